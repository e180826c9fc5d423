//! Payout estimation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Estimated cash payout: `shares * rate`, rounded to 2 decimal places
/// with midpoint-away-from-zero rounding (deterministic half-up for the
/// positive amounts handled here).
///
/// A zero rate yields a zero payout; the alert still fires on the date
/// match and reports the estimate as $0.00.
pub fn estimated_payout(shares: Decimal, dividend_rate: Decimal) -> Decimal {
    (shares * dividend_rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_basic_payout() {
        assert_eq!(estimated_payout(dec!(10), dec!(0.25)), dec!(2.50));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        // 3 * 0.105 = 0.315 -> 0.32
        assert_eq!(estimated_payout(dec!(3), dec!(0.105)), dec!(0.32));
    }

    #[test]
    fn test_zero_rate_yields_zero() {
        assert_eq!(estimated_payout(dec!(100), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_shares() {
        // 2.5 * 0.333 = 0.8325 -> 0.83
        assert_eq!(estimated_payout(dec!(2.5), dec!(0.333)), dec!(0.83));
    }
}
