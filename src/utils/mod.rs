//! Utility functions for rounding and formatting report values
//!
//! Money is kept as full-precision `f64` throughout the calculation and only
//! rounded here, at the presentation boundary.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to 2 decimal places, ties to even.
///
/// The exact binary value of `value` is rounded, so `2.675` (stored as
/// 2.67499999...) becomes `2.67`. Values a `Decimal` cannot hold
/// (NaN, infinities, beyond ~7.9e28) are returned unchanged.
///
/// # Examples
/// ```
/// use offers::utils::round_cents;
///
/// assert_eq!(round_cents(102.5), 102.5);
/// assert_eq!(round_cents(318.5481486), 318.55);
/// assert_eq!(round_cents(0.125), 0.12);
/// ```
pub fn round_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Format a money value with exactly two decimals: "1102.50"
pub fn format_cents(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a user-entered number as typed: integral values keep a trailing
/// ".0" ("5.0", "1000.0"), others use the shortest exact representation.
///
/// # Examples
/// ```
/// use offers::utils::format_plain;
///
/// assert_eq!(format_plain(5.0), "5.0");
/// assert_eq!(format_plain(4.75), "4.75");
/// ```
pub fn format_plain(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimals(value: f64) -> usize {
        let s = value.to_string();
        s.split('.').nth(1).map(str::len).unwrap_or(0)
    }

    #[test]
    fn test_round_cents_basic() {
        assert_eq!(round_cents(1102.5), 1102.5);
        assert_eq!(round_cents(2318.548148), 2318.55);
        assert_eq!(round_cents(-190.004), -190.0);
    }

    #[test]
    fn test_round_cents_ties_to_even() {
        assert_eq!(round_cents(0.125), 0.12);
        assert_eq!(round_cents(0.375), 0.38);
        assert_eq!(round_cents(-0.125), -0.12);
    }

    #[test]
    fn test_round_cents_uses_binary_value() {
        // 2.675 is stored slightly below the midpoint
        assert_eq!(round_cents(2.675), 2.67);
    }

    #[test]
    fn test_round_cents_at_most_two_decimals() {
        for v in [1.0 / 3.0, 2.0 / 3.0, 123456.789123, 0.005, 99.999] {
            assert!(decimals(round_cents(v)) <= 2, "{v} rounded to {}", round_cents(v));
        }
    }

    #[test]
    fn test_round_cents_passes_through_non_finite() {
        assert!(round_cents(f64::NAN).is_nan());
        assert_eq!(round_cents(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(1102.5), "1102.50");
        assert_eq!(format_cents(0.0), "0.00");
        assert_eq!(format_cents(-190.0), "-190.00");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(1000.0), "1000.0");
        assert_eq!(format_plain(-3.0), "-3.0");
        assert_eq!(format_plain(0.1), "0.1");
        assert_eq!(format_plain(2.5), "2.5");
    }
}
