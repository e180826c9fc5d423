//! Dividend fact resolution - ordered multi-source strategy.
//!
//! The resolver is the entry point for turning a ticker into
//! [`DividendFacts`]. It tries the provider bundles in a fixed order and
//! stops at the first one that yields an ex-dividend date:
//!
//! 1. Summary bundle. If it has a date, the rate is taken from it too; a
//!    missing rate defaults to zero rather than triggering the fallback,
//!    because the summary bundle stays authoritative for the date.
//! 2. Calendar-events bundle. If it has a date, the rate preference is
//!    summary rate, then calendar rate, then zero.
//!
//! No date anywhere is [`Resolution::NoEventData`], a normal outcome.
//! Adding a third source means adding a [`ResolutionSource`] variant and
//! a match arm in `try_source`, nothing else moves.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{DividendFacts, Resolution, ResolutionSource, SummaryBundle};
use crate::provider::DividendDataProvider;

/// Sources in resolution-priority order. First date wins.
const SOURCE_ORDER: [ResolutionSource; 2] =
    [ResolutionSource::Summary, ResolutionSource::CalendarEvents];

/// Resolves dividend facts for a ticker from an injected provider.
pub struct DividendResolver {
    provider: Arc<dyn DividendDataProvider>,
}

impl DividendResolver {
    pub fn new(provider: Arc<dyn DividendDataProvider>) -> Self {
        Self { provider }
    }

    /// Resolve the dividend facts for one ticker.
    ///
    /// Fetch failures on either bundle surface as an error; the caller
    /// decides what a per-ticker failure means for the batch.
    pub async fn resolve(&self, ticker: &str) -> Result<Resolution, MarketDataError> {
        // The summary bundle is always fetched: even when its date is
        // missing, its rate and price feed the fallback path.
        let summary = self.provider.get_summary(ticker).await?;

        for source in SOURCE_ORDER {
            if let Some(facts) = self.try_source(source, ticker, &summary).await? {
                debug!(
                    "[{}] resolved ex-dividend date {} from {:?}",
                    ticker, facts.ex_dividend_date, source
                );
                if !facts.rate_known {
                    // Distinct from a reported zero rate: the amount is unknown.
                    warn!("[{}] dividend rate unknown, estimating payout as 0", ticker);
                }
                return Ok(Resolution::Facts(facts));
            }
        }

        Ok(Resolution::NoEventData)
    }

    /// Try one source; `None` means it has no ex-dividend date and the
    /// next source should be tried.
    async fn try_source(
        &self,
        source: ResolutionSource,
        ticker: &str,
        summary: &SummaryBundle,
    ) -> Result<Option<DividendFacts>, MarketDataError> {
        match source {
            ResolutionSource::Summary => Ok(summary.ex_dividend_date.map(|date| DividendFacts {
                ex_dividend_date: date,
                dividend_rate: summary.dividend_rate.unwrap_or(Decimal::ZERO),
                rate_known: summary.dividend_rate.is_some(),
                current_price: summary.regular_market_price,
            })),
            ResolutionSource::CalendarEvents => {
                let calendar = self.provider.get_calendar_events(ticker).await?;
                Ok(calendar.ex_dividend_date.map(|date| {
                    let rate = summary.dividend_rate.or(calendar.dividend_rate);
                    DividendFacts {
                        ex_dividend_date: date,
                        dividend_rate: rate.unwrap_or(Decimal::ZERO),
                        rate_known: rate.is_some(),
                        current_price: summary.regular_market_price,
                    }
                }))
            }
        }
    }
}
