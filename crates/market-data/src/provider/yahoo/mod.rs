//! Yahoo Finance dividend data provider.
//!
//! Both bundles come from the quoteSummary v10 API:
//! - summary: `modules=summaryDetail,price`
//! - calendar events: `modules=calendarEvents`
//!
//! The API requires a crumb/cookie pair, which is fetched once and
//! cached process-wide; a 401 clears the cache so the next call
//! re-authenticates.

mod models;

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use reqwest::header;
use tracing::debug;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{CalendarBundle, SummaryBundle};
use crate::provider::DividendDataProvider;

use models::{YahooQuoteSummaryResponse, YahooQuoteSummaryResult};

const PROVIDER_ID: &str = "YAHOO";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Per-request timeout so a hung provider call cannot stall the batch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for the Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance dividend data provider.
pub struct YahooProvider {
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider with a shared HTTP client.
    pub fn new() -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        {
            let guard = YAHOO_CRUMB.read().unwrap();
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e, "Failed to get cookie"))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: "Failed to parse Yahoo cookie".to_string(),
            })?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e, "Failed to get crumb"))?
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read crumb: {}", e),
            })?;

        let crumb_data = CrumbData { cookie, crumb };

        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = None;
    }

    // ========================================================================
    // quoteSummary Fetching
    // ========================================================================

    /// Turn a reqwest transport error into the matching error variant.
    fn classify_transport_error(&self, error: reqwest::Error, context: &str) -> MarketDataError {
        if error.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("{}: {}", context, error),
            }
        }
    }

    /// Fetch one quoteSummary result for the requested modules.
    async fn quote_summary(
        &self,
        symbol: &str,
        modules: &str,
    ) -> Result<YahooQuoteSummaryResult, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules={}&crumb={}",
            encode(symbol),
            modules,
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e, "quoteSummary request failed"))?;

        match response.status() {
            reqwest::StatusCode::UNAUTHORIZED => {
                self.clear_crumb();
                return Err(MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: "Yahoo authentication expired".to_string(),
                });
            }
            reqwest::StatusCode::NOT_FOUND => {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            status if !status.is_success() => {
                return Err(MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("quoteSummary returned status {}", status),
                });
            }
            _ => {}
        }

        let data: YahooQuoteSummaryResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Failed to parse quoteSummary response: {}", e),
                })?;

        data.quote_summary
            .result
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}

// ============================================================================
// DividendDataProvider Implementation
// ============================================================================

#[async_trait]
impl DividendDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_summary(&self, symbol: &str) -> Result<SummaryBundle, MarketDataError> {
        debug!("Fetching summary bundle for {} from Yahoo", symbol);

        let result = self.quote_summary(symbol, "summaryDetail,price").await?;
        Ok(map_summary(&result))
    }

    async fn get_calendar_events(&self, symbol: &str) -> Result<CalendarBundle, MarketDataError> {
        debug!("Fetching calendar events for {} from Yahoo", symbol);

        let result = self.quote_summary(symbol, "calendarEvents").await?;
        Ok(map_calendar_events(&result))
    }
}

// ============================================================================
// Response Mapping
// ============================================================================

/// Map a quoteSummary result to the summary bundle.
fn map_summary(result: &YahooQuoteSummaryResult) -> SummaryBundle {
    let detail = result.summary_detail.as_ref();
    SummaryBundle {
        ex_dividend_date: detail
            .and_then(|d| d.ex_dividend_date.as_ref())
            .and_then(|d| d.as_utc_date()),
        dividend_rate: detail
            .and_then(|d| d.dividend_rate.as_ref())
            .and_then(|d| d.as_decimal()),
        regular_market_price: result
            .price
            .as_ref()
            .and_then(|p| p.regular_market_price.as_ref())
            .and_then(|d| d.as_decimal()),
    }
}

/// Map a quoteSummary result to the calendar-events bundle.
fn map_calendar_events(result: &YahooQuoteSummaryResult) -> CalendarBundle {
    let events = result.calendar_events.as_ref();
    CalendarBundle {
        ex_dividend_date: events
            .and_then(|e| e.ex_dividend_date.as_ref())
            .and_then(|d| d.as_utc_date()),
        dividend_rate: events
            .and_then(|e| e.dividend_rate.as_ref())
            .and_then(|d| d.as_decimal()),
    }
}
