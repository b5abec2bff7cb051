//! Locale number formatting for report values.
//!
//! Values are printed with the `#.##` pattern: at most two fractional
//! digits, no trailing zeros, no zero integer part and no grouping.

use rust_decimal::{Decimal, RoundingStrategy};

/// Maximum number of fractional digits printed.
const FRACTION_DIGITS: u32 = 2;

/// Format `value` with the given decimal separator.
///
/// Rounds half away from zero. A value that rounds to zero yields an empty
/// string, and `0.5` renders as `.5`.
pub fn format_decimal(value: Decimal, separator: char) -> String {
    let rounded = value
        .round_dp_with_strategy(FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    if rounded.is_zero() {
        return String::new();
    }

    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + 1);
    if rounded.is_sign_negative() {
        out.push('-');
    }
    if integer != "0" {
        out.push_str(integer);
    }
    if let Some(fraction) = fraction {
        out.push(separator);
        out.push_str(fraction);
    }
    out
}
