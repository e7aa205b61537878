//! Booking page composition.
//!
//! [`BookingPage::init`] runs the three widget setups one after another. A
//! widget whose anchors are missing is skipped and the others carry on.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::dom::{Document, Element, Event};
use crate::error::Result;
use crate::widgets::availability::{AvailabilityWidget, AVAILABILITY_CONTAINER, AVAILABILITY_JSON};
use crate::widgets::gallery::{
    GalleryWidget, GALLERY_IMAGES, GALLERY_IMG, GALLERY_NEXT, GALLERY_PREV, GALLERY_ROOT,
};
use crate::widgets::quote::{
    QuoteWidget, QUOTE_BASE, QUOTE_CONFIG, QUOTE_DEPOSIT, QUOTE_FEE, QUOTE_FORM, QUOTE_HOURS,
    QUOTE_TOTAL,
};

/// Widgets mounted on one page
#[derive(Debug, Clone, Default)]
pub struct BookingPage {
    gallery: Option<GalleryWidget>,
    availability: Option<AvailabilityWidget>,
    quote: Option<QuoteWidget>,
}

impl BookingPage {
    /// Mount every widget whose anchors are present
    pub fn init(doc: &mut Document, today: NaiveDate) -> Self {
        let page = Self {
            gallery: mounted("gallery", GalleryWidget::mount(doc)),
            availability: mounted("availability", AvailabilityWidget::mount(doc, today)),
            quote: mounted("quote", QuoteWidget::mount(doc)),
        };
        info!(
            "Booking page ready: gallery={}, availability={}, quote={}",
            page.gallery.is_some(),
            page.availability.is_some(),
            page.quote.is_some()
        );
        page
    }

    pub fn gallery(&self) -> Option<&GalleryWidget> {
        self.gallery.as_ref()
    }

    pub fn availability(&self) -> Option<&AvailabilityWidget> {
        self.availability.as_ref()
    }

    pub fn quote(&self) -> Option<&QuoteWidget> {
        self.quote.as_ref()
    }

    /// Deliver one event; handlers run to completion before this returns.
    /// Returns whether any widget handled it.
    pub fn dispatch(&mut self, doc: &mut Document, event: Event) -> bool {
        let mut handled = false;
        if let Some(gallery) = self.gallery.as_mut() {
            handled |= gallery.handle(doc, event);
        }
        if let Some(quote) = self.quote.as_ref() {
            handled |= quote.handle(doc, event);
        }
        handled
    }
}

fn mounted<W>(name: &str, result: Result<W>) -> Option<W> {
    match result {
        Ok(widget) => Some(widget),
        Err(e) => {
            debug!("Skipping {} widget: {}", name, e);
            None
        }
    }
}

/// Builds a document carrying the standard booking page anchors.
///
/// Payloads are kept as raw text so callers can embed exactly what a server
/// would, malformed JSON included.
#[derive(Debug, Clone, Default)]
pub struct BookingPageBuilder {
    gallery: Option<String>,
    availability: Option<String>,
    quote: Option<(String, String)>,
}

impl BookingPageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gallery<S: Serialize>(self, images: &[S]) -> Self {
        self.gallery_payload(to_payload(images))
    }

    pub fn gallery_payload(mut self, raw: impl Into<String>) -> Self {
        self.gallery = Some(raw.into());
        self
    }

    pub fn availability<S: Serialize>(self, map: &S) -> Self {
        self.availability_payload(to_payload(map))
    }

    pub fn availability_payload(mut self, raw: impl Into<String>) -> Self {
        self.availability = Some(raw.into());
        self
    }

    pub fn quote<S: Serialize>(self, config: &S, initial_hours: impl Into<String>) -> Self {
        self.quote_payload(to_payload(config), initial_hours)
    }

    pub fn quote_payload(mut self, raw: impl Into<String>, initial_hours: impl Into<String>) -> Self {
        self.quote = Some((raw.into(), initial_hours.into()));
        self
    }

    pub fn build(self) -> Document {
        let mut doc = Document::new();
        let body = doc.body();

        if let Some(images) = self.gallery {
            let first = first_image(&images);
            let root = doc.append(body, Element::anchor("div", GALLERY_ROOT));
            doc.append(root, Element::anchor("img", GALLERY_IMG).with_attr("src", first));
            doc.append(
                root,
                Element::anchor("script", GALLERY_IMAGES)
                    .with_attr("type", "application/json")
                    .with_text(images),
            );
            doc.append(root, Element::anchor("button", GALLERY_PREV).with_text("‹"));
            doc.append(root, Element::anchor("button", GALLERY_NEXT).with_text("›"));
        }

        if let Some(availability) = self.availability {
            doc.append(body, Element::anchor("div", AVAILABILITY_CONTAINER));
            doc.append(
                body,
                Element::anchor("script", AVAILABILITY_JSON)
                    .with_attr("type", "application/json")
                    .with_text(availability),
            );
        }

        if let Some((config, hours)) = self.quote {
            let form = doc.append(body, Element::anchor("form", QUOTE_FORM));
            doc.append(
                form,
                Element::anchor("input", QUOTE_HOURS)
                    .with_attr("type", "number")
                    .with_attr("value", hours),
            );
            doc.append(
                body,
                Element::anchor("script", QUOTE_CONFIG)
                    .with_attr("type", "application/json")
                    .with_text(config),
            );
            let summary = doc.append(body, Element::new("dl"));
            for attr in [QUOTE_BASE, QUOTE_FEE, QUOTE_TOTAL, QUOTE_DEPOSIT] {
                doc.append(summary, Element::anchor("dd", attr));
            }
        }

        doc
    }
}

fn to_payload<S: Serialize + ?Sized>(value: &S) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// What the server would have put in `src` before any navigation
fn first_image(payload: &str) -> String {
    serde_json::from_str::<Vec<String>>(payload)
        .ok()
        .and_then(|images| images.into_iter().next())
        .unwrap_or_default()
}
