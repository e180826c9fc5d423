//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CalendarBundle, SummaryBundle};

/// Trait for dividend data providers.
///
/// A provider exposes the two logical bundles the resolver draws from.
/// Implementations are injected into [`DividendResolver`], so tests can
/// substitute a canned double without any global state.
///
/// [`DividendResolver`]: crate::resolver::DividendResolver
#[async_trait]
pub trait DividendDataProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "YAHOO".
    ///
    /// Used for logging and error context.
    fn id(&self) -> &'static str;

    /// Fetch the summary bundle (dividend detail plus current price).
    ///
    /// Missing fields are `None`, not an error; only transport failures,
    /// malformed responses and unrecognized tickers return `Err`.
    async fn get_summary(&self, symbol: &str) -> Result<SummaryBundle, MarketDataError>;

    /// Fetch the calendar-events bundle for upcoming dividend events.
    ///
    /// Same field semantics as [`get_summary`](Self::get_summary).
    async fn get_calendar_events(&self, symbol: &str) -> Result<CalendarBundle, MarketDataError>;
}
