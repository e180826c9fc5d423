//! Yahoo Finance API response models.
//!
//! These models parse the quoteSummary API responses. Yahoo wraps most
//! scalar fields in `{"raw": ..., "fmt": "..."}` detail objects, and
//! sends an empty object `{}` when a field has no data.

use chrono::{DateTime, NaiveDate};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Main response wrapper for the quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    /// Yahoo sends `"result": null` alongside an error object for
    /// unknown symbols; treat that the same as an empty result list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub result: Vec<YahooQuoteSummaryResult>,
    // Note: error field exists in API but we handle errors via HTTP status/empty results
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<YahooQuoteSummaryResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<Vec<YahooQuoteSummaryResult>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Individual result from the quoteSummary API
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
    pub summary_detail: Option<YahooSummaryDetail>,
    pub calendar_events: Option<YahooCalendarEvents>,
}

/// Price data from the quoteSummary API
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub regular_market_price: Option<YahooDetail>,
}

/// Summary detail data (dividend fields)
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryDetail {
    pub ex_dividend_date: Option<YahooDetail>,
    pub dividend_rate: Option<YahooDetail>,
}

/// Calendar events data (upcoming dividend dates)
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct YahooCalendarEvents {
    pub ex_dividend_date: Option<YahooDetail>,
    pub dividend_rate: Option<YahooDetail>,
}

/// Detail object with raw and formatted values
#[derive(Debug, Deserialize, Clone, Default)]
pub struct YahooDetail {
    pub raw: Option<f64>,
    // Note: fmt field exists but we only use raw values
}

impl YahooDetail {
    /// Interpret the raw value as a decimal amount.
    pub fn as_decimal(&self) -> Option<Decimal> {
        self.raw.and_then(Decimal::from_f64)
    }

    /// Interpret the raw value as epoch seconds and normalize to a UTC
    /// calendar day.
    pub fn as_utc_date(&self) -> Option<NaiveDate> {
        self.raw
            .and_then(|ts| DateTime::from_timestamp(ts as i64, 0))
            .map(|dt| dt.date_naive())
    }
}
