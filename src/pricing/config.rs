//! Pricing configuration embedded in the booking page.
//!
//! The payload is loosely typed: fields may be missing, null, numbers or
//! numeric strings. Defaults are filled in here, once, so the calculators only
//! ever see a fully-populated [`PricingConfig`].

use rust_decimal::prelude::*;
use serde::Deserialize;
use serde_json::Value;

/// Venue pricing used by the quote calculator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PricingConfigPayload")]
pub struct PricingConfig {
    /// Whole-currency amount per hour
    pub price_per_hour: Decimal,
    /// Floor on billable hours, always at least 1
    pub min_hours: u32,
    /// Fraction of the base price charged as a service fee
    pub service_fee_rate: Decimal,
    /// Percentage of the base price due up front
    pub deposit_pct: Decimal,
}

impl PricingConfig {
    pub fn new(
        price_per_hour: Decimal,
        min_hours: u32,
        service_fee_rate: Decimal,
        deposit_pct: Decimal,
    ) -> Self {
        Self {
            price_per_hour,
            min_hours: min_hours.max(1),
            service_fee_rate,
            deposit_pct,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::new(Decimal::ZERO, 1, Decimal::ZERO, Decimal::ZERO)
    }
}

/// Raw shape of the `data-quote-config` payload
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PricingConfigPayload {
    price_per_hour: Option<Value>,
    min_hours: Option<Value>,
    service_fee_rate: Option<Value>,
    deposit_pct: Option<Value>,
}

impl From<PricingConfigPayload> for PricingConfig {
    fn from(raw: PricingConfigPayload) -> Self {
        let amount = |v: &Option<Value>| v.as_ref().and_then(lenient_decimal).unwrap_or_default();

        Self {
            price_per_hour: amount(&raw.price_per_hour),
            min_hours: raw
                .min_hours
                .as_ref()
                .and_then(lenient_decimal)
                .map(min_hours_from)
                .unwrap_or(1),
            service_fee_rate: amount(&raw.service_fee_rate),
            deposit_pct: amount(&raw.deposit_pct),
        }
    }
}

/// Accept JSON numbers and numeric strings; anything else counts as absent.
///
/// Finite values outside the `Decimal` range clamp to `Decimal::MAX`/`MIN`
/// (or zero when they are too small to represent), whether they arrive as a
/// number or a string.
pub fn lenient_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    text.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(&text).ok())
        .or_else(|| out_of_range(&text))
}

fn out_of_range(text: &str) -> Option<Decimal> {
    let float = text.parse::<f64>().ok().filter(|f| f.is_finite())?;
    Some(if float.abs() < 1.0 {
        Decimal::ZERO
    } else if float > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    })
}

/// Zero or negative means "not configured"; fractions round up so the clamp
/// never drops below what the venue asked for.
fn min_hours_from(value: Decimal) -> u32 {
    if value <= Decimal::ZERO {
        return 1;
    }
    value.ceil().to_u32().unwrap_or(u32::MAX).max(1)
}
