//! Dividend data models.
//!
//! Bundles mirror the two logical provider payloads; [`DividendFacts`]
//! is what the resolver hands downstream after applying the
//! first-match-wins strategy.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// The primary provider bundle: dividend detail plus current price.
///
/// Every field is optional on the wire. Common stocks usually populate
/// the ex-dividend date here; ETFs often leave it empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryBundle {
    pub ex_dividend_date: Option<NaiveDate>,
    pub dividend_rate: Option<Decimal>,
    pub regular_market_price: Option<Decimal>,
}

/// The fallback provider bundle: upcoming calendar events.
///
/// Queried only when the summary bundle has no ex-dividend date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarBundle {
    pub ex_dividend_date: Option<NaiveDate>,
    pub dividend_rate: Option<Decimal>,
}

/// Which provider bundle supplied the resolved facts.
///
/// Internal to the resolver; it is logged for diagnostics but never
/// exposed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Summary,
    CalendarEvents,
}

/// Dividend facts resolved for one ticker in one run.
///
/// `rate_known` distinguishes a provider-reported zero rate from a rate
/// that was missing everywhere and defaulted to zero, so logs can say
/// "rate unknown" instead of "rate is zero".
#[derive(Debug, Clone, PartialEq)]
pub struct DividendFacts {
    /// Ex-dividend date as a UTC calendar day.
    pub ex_dividend_date: NaiveDate,
    /// Cash paid per held share. Zero when unresolved.
    pub dividend_rate: Decimal,
    /// False when the rate was missing from every bundle and defaulted.
    pub rate_known: bool,
    /// Current market price, when the provider reported one.
    pub current_price: Option<Decimal>,
}

/// Outcome of resolving one ticker.
///
/// `NoEventData` is a normal result, not an error: neither bundle had an
/// ex-dividend date, so there is nothing to check for this ticker.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Facts(DividendFacts),
    NoEventData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bundle_defaults_are_empty() {
        let summary = SummaryBundle::default();
        assert!(summary.ex_dividend_date.is_none());
        assert!(summary.dividend_rate.is_none());
        assert!(summary.regular_market_price.is_none());

        let calendar = CalendarBundle::default();
        assert!(calendar.ex_dividend_date.is_none());
        assert!(calendar.dividend_rate.is_none());
    }

    #[test]
    fn test_facts_equality() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let a = DividendFacts {
            ex_dividend_date: date,
            dividend_rate: dec!(0.50),
            rate_known: true,
            current_price: Some(dec!(101.25)),
        };
        assert_eq!(a, a.clone());
        assert_ne!(
            Resolution::Facts(a),
            Resolution::NoEventData
        );
    }
}
