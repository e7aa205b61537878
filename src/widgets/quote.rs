//! Live quote calculator.
//!
//! Reads the venue pricing once at mount, then re-derives the whole
//! breakdown from the hours control every time it changes. Nothing is
//! updated incrementally: each render projects a fresh [`QuoteResult`] onto
//! the four display anchors.

use serde::Serialize;
use tracing::trace;

use crate::dom::{Document, Event, NodeId};
use crate::error::{Result, WidgetError};
use crate::payload::read_payload;
use crate::pricing::{calculate_quote, deposit_label, gbp, PricingConfig, QuoteInput, QuoteResult};

pub const QUOTE_FORM: &str = "data-quote-form";
pub const QUOTE_CONFIG: &str = "data-quote-config";
pub const QUOTE_HOURS: &str = "data-hours";
pub const QUOTE_BASE: &str = "data-quote-base";
pub const QUOTE_FEE: &str = "data-quote-fee";
pub const QUOTE_TOTAL: &str = "data-quote-total";
pub const QUOTE_DEPOSIT: &str = "data-quote-deposit";

/// Display strings for one quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteDisplay {
    pub base: String,
    pub fee: String,
    pub total: String,
    pub deposit: String,
}

impl QuoteDisplay {
    pub fn project(quote: &QuoteResult, config: &PricingConfig) -> Self {
        Self {
            base: gbp(quote.base),
            fee: gbp(quote.fee),
            total: gbp(quote.total),
            deposit: deposit_label(quote.deposit, config.deposit_pct),
        }
    }
}

/// The four elements the quote is written into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteTargets {
    pub base: NodeId,
    pub fee: NodeId,
    pub total: NodeId,
    pub deposit: NodeId,
}

impl QuoteTargets {
    fn write(&self, doc: &mut Document, display: &QuoteDisplay) {
        doc.set_text_content(self.base, display.base.as_str());
        doc.set_text_content(self.fee, display.fee.as_str());
        doc.set_text_content(self.total, display.total.as_str());
        doc.set_text_content(self.deposit, display.deposit.as_str());
    }
}

/// Quote calculator bound to `[data-quote-form]`
#[derive(Debug, Clone)]
pub struct QuoteWidget {
    hours_input: NodeId,
    targets: QuoteTargets,
    config: PricingConfig,
}

impl QuoteWidget {
    /// Bind to the form, its pricing payload and the display targets, then
    /// render once with whatever the hours control already holds.
    ///
    /// Every anchor is checked up front; if any is missing nothing is
    /// written at all.
    pub fn mount(doc: &mut Document) -> Result<Self> {
        let find = |attr: &'static str| doc.query(attr).ok_or(WidgetError::MissingAnchor(attr));

        let form = find(QUOTE_FORM)?;
        let config_el = find(QUOTE_CONFIG)?;
        let hours_input = doc
            .query_within(form, QUOTE_HOURS)
            .ok_or(WidgetError::MissingAnchor(QUOTE_HOURS))?;
        let targets = QuoteTargets {
            base: find(QUOTE_BASE)?,
            fee: find(QUOTE_FEE)?,
            total: find(QUOTE_TOTAL)?,
            deposit: find(QUOTE_DEPOSIT)?,
        };

        let widget = Self {
            hours_input,
            targets,
            config: read_payload(doc, config_el),
        };
        widget.render(doc);
        Ok(widget)
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn hours_input(&self) -> NodeId {
        self.hours_input
    }

    pub fn targets(&self) -> QuoteTargets {
        self.targets
    }

    /// Current view-model, read from the hours control
    pub fn input(&self, doc: &Document) -> QuoteInput {
        QuoteInput::new(doc.value(self.hours_input))
    }

    /// Recompute from scratch and write all four display strings
    pub fn render(&self, doc: &mut Document) -> QuoteResult {
        let quote = calculate_quote(&self.config, &self.input(doc));
        trace!(
            "Quote: {} h, base {}, fee {}, total {}, deposit {}",
            quote.hours,
            quote.base,
            quote.fee,
            quote.total,
            quote.deposit
        );
        self.targets.write(doc, &QuoteDisplay::project(&quote, &self.config));
        quote
    }

    /// Re-render on input changes to the hours control
    pub fn handle(&self, doc: &mut Document, event: Event) -> bool {
        match event {
            Event::Input(target) if doc.is_inclusive_ancestor(self.hours_input, target) => {
                self.render(doc);
                true
            }
            _ => false,
        }
    }
}
