//! Divwatch Core Crate
//!
//! The dividend alert pipeline: load a portfolio, resolve each holding's
//! dividend facts, match the ex-dividend date against today, estimate
//! payouts, and hand the aggregated messages to a notifier.
//!
//! Per-ticker fetch failures are contained inside the aggregator; only
//! portfolio loading, missing credentials and notification dispatch are
//! fatal to a run.

pub mod alerts;
pub mod errors;
pub mod notify;
pub mod portfolio;

pub use alerts::{AlertMessage, DividendAlertService, RunResult};
pub use errors::AlertError;
pub use notify::{dispatch, EmailNotifier, GithubIssueNotifier, Notifier};
pub use portfolio::{load_portfolio, Holding};
