//! View-model for the quote calculator.

use rust_decimal::Decimal;
use serde::Serialize;

/// Raw contents of the hours control, re-read on every change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteInput {
    pub hours_raw: String,
}

impl QuoteInput {
    pub fn new(hours_raw: impl Into<String>) -> Self {
        Self {
            hours_raw: hours_raw.into(),
        }
    }
}

/// Price breakdown for one render cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteResult {
    pub hours: u32,
    pub base: Decimal,
    pub fee: Decimal,
    pub total: Decimal,
    pub deposit: Decimal,
}
