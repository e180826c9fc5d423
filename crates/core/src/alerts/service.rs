//! Alert aggregation over the portfolio.

use chrono::NaiveDate;
use divwatch_market_data::{DividendResolver, Resolution};
use tracing::{debug, info, warn};

use crate::alerts::estimator::estimated_payout;
use crate::alerts::matcher::is_event_today;
use crate::alerts::message::{render_alert, AlertMessage};
use crate::errors::AlertError;
use crate::portfolio::Holding;

/// The ordered alert messages produced by one run, plus the per-ticker
/// error tally. Consumed once by the notifier, then discarded.
#[derive(Debug, Default)]
pub struct RunResult {
    pub messages: Vec<AlertMessage>,
    pub errors: usize,
}

/// Runs the resolve/match/estimate pipeline per holding and collects the
/// results.
///
/// This owns the only cross-item invariant: all N holdings are always
/// attempted, in portfolio order, regardless of individual failures.
pub struct DividendAlertService {
    resolver: DividendResolver,
}

impl DividendAlertService {
    pub fn new(resolver: DividendResolver) -> Self {
        Self { resolver }
    }

    /// Process every holding against `today` and aggregate the alerts.
    ///
    /// Each holding maps to a `Result<Option<AlertMessage>, _>` which is
    /// folded in input order: `Ok(Some)` appends a message, `Ok(None)`
    /// is a silent skip, `Err` is logged and counted.
    pub async fn run(&self, holdings: &[Holding], today: NaiveDate) -> RunResult {
        let mut result = RunResult::default();

        for holding in holdings {
            match self.check_holding(holding, today).await {
                Ok(Some(message)) => result.messages.push(message),
                Ok(None) => {}
                Err(error) => {
                    warn!("Error checking {}: {}", holding.ticker, error);
                    result.errors += 1;
                }
            }
        }

        result
    }

    /// Resolve, match and estimate one holding.
    async fn check_holding(
        &self,
        holding: &Holding,
        today: NaiveDate,
    ) -> Result<Option<AlertMessage>, AlertError> {
        let resolution = self
            .resolver
            .resolve(&holding.ticker)
            .await
            .map_err(|source| AlertError::Fetch {
                ticker: holding.ticker.clone(),
                source,
            })?;

        let facts = match resolution {
            Resolution::Facts(facts) => facts,
            Resolution::NoEventData => {
                info!("[{}] No dividend data found or Ex-Date missing.", holding.ticker);
                return Ok(None);
            }
        };

        info!(
            "[{}] Ex-Date: {} | Today: {}",
            holding.ticker, facts.ex_dividend_date, today
        );

        if !is_event_today(facts.ex_dividend_date, today) {
            debug!("[{}] not an event day, skipping", holding.ticker);
            return Ok(None);
        }

        let payout = estimated_payout(holding.shares, facts.dividend_rate);
        Ok(Some(render_alert(holding, &facts, payout)))
    }
}
