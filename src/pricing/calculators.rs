//! Core quote calculation functions.
//!
//! Pure functions for the booking estimate - no page access.

use rust_decimal::Decimal;

use crate::pricing::config::PricingConfig;
use crate::pricing::models::{QuoteInput, QuoteResult};

/// Round to a whole currency unit, halves going up: `floor(x + 0.5)`.
///
/// Fee and deposit are each rounded on their own with this; the total is
/// never rounded again.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use bookaspace_web::pricing::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2.5)), dec!(3));
/// assert_eq!(round_half_up(dec!(2.49)), dec!(2));
/// assert_eq!(round_half_up(dec!(-2.5)), dec!(-2));
/// ```
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.saturating_add(Decimal::new(5, 1)).floor()
}

/// Parse the leading integer of a free-text hours entry.
///
/// Leading whitespace and a sign are allowed, anything after the digits is
/// ignored (`"5.7"` is 5, `"12h"` is 12). Returns `None` when there are no
/// digits at all. Values past the `i64` range saturate.
pub fn parse_hours(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Billable hours: the parsed entry (or `min_hours` when unparseable),
/// clamped up to `min_hours`. There is no upper bound.
pub fn effective_hours(raw: &str, min_hours: u32) -> u32 {
    let min_hours = min_hours.max(1);
    let parsed = match parse_hours(raw) {
        Some(h) if h < 0 => 0,
        Some(h) => u32::try_from(h).unwrap_or(u32::MAX),
        None => min_hours,
    };
    parsed.max(min_hours)
}

/// Derive the full price breakdown from the configuration and current input.
///
/// `total` is built from the already-rounded fee, so `total == base + fee`
/// holds exactly. The deposit is rounded from the base independently.
pub fn calculate_quote(config: &PricingConfig, input: &QuoteInput) -> QuoteResult {
    let hours = effective_hours(&input.hours_raw, config.min_hours);

    let base = Decimal::from(hours).saturating_mul(config.price_per_hour);
    let fee = round_half_up(base.saturating_mul(config.service_fee_rate));
    let total = base.saturating_add(fee);
    let deposit = round_half_up(base.saturating_mul(config.deposit_pct / Decimal::ONE_HUNDRED));

    QuoteResult {
        hours,
        base,
        fee,
        total,
        deposit,
    }
}
