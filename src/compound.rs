//! Compound interest over yearly periods.
//!
//! Values here are full precision; rounding to cents happens only when a
//! report is built (see [`crate::reports`]).

/// Final value and gain of an investment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Growth {
    pub total: f64,
    pub profit: f64,
}

/// `amount * (1 + rate/100) ^ term`
pub fn compound_total(amount: f64, interest_rate: f64, term_years: i64) -> f64 {
    amount * (1.0 + interest_rate / 100.0).powf(term_years as f64)
}

/// Total and profit for one offer. Zero terms and negative rates are not
/// special-cased.
pub fn compound(amount: f64, interest_rate: f64, term_years: i64) -> Growth {
    let total = compound_total(amount, interest_rate, term_years);
    Growth {
        total,
        profit: total - amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_two_years_at_five_percent() {
        let g = compound(1000.0, 5.0, 2);
        assert_close(g.total, 1102.5);
        assert_close(g.profit, 102.5);
    }

    #[test]
    fn test_five_years_at_three_percent() {
        let g = compound(2000.0, 3.0, 5);
        assert_close(g.total, 2318.5481486);
        assert_close(g.profit, 318.5481486);
    }

    #[test]
    fn test_zero_term_has_no_profit() {
        for (amount, rate) in [(1000.0, 5.0), (0.0, 12.5), (250.0, -3.0)] {
            let g = compound(amount, rate, 0);
            assert_eq!(g.total, amount);
            assert_eq!(g.profit, 0.0);
        }
    }

    #[test]
    fn test_negative_rate_shrinks_total() {
        let g = compound(1000.0, -10.0, 2);
        assert_close(g.total, 810.0);
        assert_close(g.profit, -190.0);
    }

    #[test]
    fn test_profit_is_total_minus_amount() {
        let g = compound(1234.56, 7.25, 13);
        assert_eq!(g.profit, g.total - 1234.56);
        assert_eq!(g.total, compound_total(1234.56, 7.25, 13));
    }
}
