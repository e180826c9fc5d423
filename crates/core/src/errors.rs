//! Run-level error types.
//!
//! The fatal-vs-recovered distinction is carried by the error itself via
//! [`AlertError::is_fatal`], not inferred from the call site: a fetch
//! failure on one ticker is recovered by skipping that ticker, while
//! everything else aborts the run with a non-zero exit.

use divwatch_market_data::MarketDataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    /// The portfolio file could not be read or parsed. Nothing has been
    /// processed yet when this fires.
    #[error("Failed to load portfolio from {path}: {message}")]
    PortfolioLoad { path: String, message: String },

    /// Fetching dividend data for one ticker failed. Recovered by the
    /// aggregator: logged, counted, and the batch continues.
    #[error("Fetch failed for {ticker}: {source}")]
    Fetch {
        ticker: String,
        #[source]
        source: MarketDataError,
    },

    /// A credential required by the selected notifier is absent. Checked
    /// before any dispatch attempt.
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// The aggregated notification could not be delivered. Fatal: the
    /// batch result is lost if not delivered.
    #[error("Notification dispatch failed via {channel}: {message}")]
    Dispatch {
        channel: &'static str,
        message: String,
    },
}

impl AlertError {
    /// Whether this error must abort the run with a non-zero exit.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Fetch { .. })
    }
}

pub type Result<T> = std::result::Result<T, AlertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_is_the_only_recovered_kind() {
        let fetch = AlertError::Fetch {
            ticker: "AAA".to_string(),
            source: MarketDataError::SymbolNotFound("AAA".to_string()),
        };
        assert!(!fetch.is_fatal());

        let load = AlertError::PortfolioLoad {
            path: "portfolio.json".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert!(load.is_fatal());

        assert!(AlertError::MissingCredential("GMAIL_USER").is_fatal());

        let dispatch = AlertError::Dispatch {
            channel: "email",
            message: "connection refused".to_string(),
        };
        assert!(dispatch.is_fatal());
    }

    #[test]
    fn test_error_display() {
        let error = AlertError::Fetch {
            ticker: "AAA".to_string(),
            source: MarketDataError::SymbolNotFound("AAA".to_string()),
        };
        assert_eq!(format!("{}", error), "Fetch failed for AAA: Symbol not found: AAA");

        let error = AlertError::MissingCredential("GITHUB_TOKEN");
        assert_eq!(format!("{}", error), "Missing credential: GITHUB_TOKEN");
    }
}
