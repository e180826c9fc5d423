//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching dividend data for one ticker.
///
/// All variants are recoverable at the batch level: the aggregator logs
/// the failure, counts it, and moves on to the next holding. None of
/// them abort a run.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested ticker was not recognized by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// A provider-specific error occurred (bad response shape,
    /// authentication expiry, unexpected status code).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
