//! Portfolio model and loader.
//!
//! The portfolio is a JSON array of `{ "ticker": "...", "shares": n }`
//! records. Duplicate tickers are legal and processed independently.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::{AlertError, Result};

/// One portfolio entry: a ticker plus the number of shares held.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Holding {
    pub ticker: String,
    pub shares: Decimal,
}

/// Load and validate the portfolio file.
///
/// Any read, parse or validation failure is a fatal
/// [`AlertError::PortfolioLoad`]; the run aborts before any ticker is
/// processed.
pub fn load_portfolio(path: &Path) -> Result<Vec<Holding>> {
    let load_error = |message: String| AlertError::PortfolioLoad {
        path: path.display().to_string(),
        message,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
    let holdings: Vec<Holding> = serde_json::from_str(&raw).map_err(|e| load_error(e.to_string()))?;

    for holding in &holdings {
        if holding.ticker.trim().is_empty() {
            return Err(load_error("holding with empty ticker".to_string()));
        }
        if holding.shares <= Decimal::ZERO {
            return Err(load_error(format!(
                "holding {} has non-positive shares {}",
                holding.ticker, holding.shares
            )));
        }
    }

    Ok(holdings)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal_macros::dec;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_portfolio(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_portfolio() {
        let file = write_portfolio(
            r#"[
                {"ticker": "AAA", "shares": 10},
                {"ticker": "BBB", "shares": 5.5}
            ]"#,
        );

        let holdings = load_portfolio(file.path()).unwrap();
        assert_eq!(
            holdings,
            vec![
                Holding {
                    ticker: "AAA".to_string(),
                    shares: dec!(10),
                },
                Holding {
                    ticker: "BBB".to_string(),
                    shares: dec!(5.5),
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_tickers_are_kept() {
        let file = write_portfolio(
            r#"[
                {"ticker": "AAA", "shares": 10},
                {"ticker": "AAA", "shares": 3}
            ]"#,
        );

        let holdings = load_portfolio(file.path()).unwrap();
        assert_eq!(holdings.len(), 2);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_portfolio(Path::new("/nonexistent/portfolio.json")).unwrap_err();
        assert!(matches!(err, AlertError::PortfolioLoad { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_malformed_json_is_load_error() {
        let file = write_portfolio("not json");
        let err = load_portfolio(file.path()).unwrap_err();
        assert!(matches!(err, AlertError::PortfolioLoad { .. }));
    }

    #[test]
    fn test_non_positive_shares_rejected() {
        let file = write_portfolio(r#"[{"ticker": "AAA", "shares": 0}]"#);
        let err = load_portfolio(file.path()).unwrap_err();
        assert!(matches!(err, AlertError::PortfolioLoad { .. }));
    }

    #[test]
    fn test_empty_ticker_rejected() {
        let file = write_portfolio(r#"[{"ticker": "  ", "shares": 1}]"#);
        let err = load_portfolio(file.path()).unwrap_err();
        assert!(matches!(err, AlertError::PortfolioLoad { .. }));
    }
}
