//! Quote calculator pricing.
//!
//! Turns the venue's embedded pricing configuration and the visitor's hour
//! count into a price breakdown. The result is an estimate for display; the
//! booking itself is priced elsewhere.

pub mod calculators;
pub mod config;
pub mod format;
pub mod models;

// Re-export commonly used items
pub use calculators::{calculate_quote, effective_hours, parse_hours, round_half_up};
pub use config::PricingConfig;
pub use format::{deposit_label, gbp};
pub use models::{QuoteInput, QuoteResult};
