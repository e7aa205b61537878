//! Whole-pound currency strings for the quote display.
//!
//! One fixed currency and locale: sterling, `en-GB` grouping, no pence.

use rust_decimal::prelude::*;

pub const CURRENCY_SYMBOL: &str = "£";

/// Format an amount as whole pounds, e.g. `£1,250` or `-£5`.
///
/// Fractional amounts are rounded half away from zero for display only. The
/// sign comes from the unrounded amount, so `-0.2` shows as `-£0`.
pub fn gbp(amount: Decimal) -> String {
    let negative = amount < Decimal::ZERO;
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().normalize().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    if negative {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push_str(&group_thousands(&digits));
    out
}

/// Deposit amount plus the percentage it was derived from
pub fn deposit_label(deposit: Decimal, deposit_pct: Decimal) -> String {
    format!("{} (based on {}% of base)", gbp(deposit), deposit_pct.normalize())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
