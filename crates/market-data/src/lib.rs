//! Divwatch Market Data Crate
//!
//! This crate resolves dividend event facts for a ticker from a market
//! data provider.
//!
//! # Overview
//!
//! A ticker's ex-dividend date and per-share rate are spread across two
//! logical provider bundles that are inconsistently populated:
//!
//! - the summary bundle (dividend detail plus current price), which
//!   common stocks usually fill in, and
//! - the calendar-events bundle, which is often the only place ETFs
//!   report the ex-dividend date.
//!
//! The resolver tries the bundles in a fixed order and takes the first
//! one that yields a date, so both shapes are covered without a
//! ticker-type lookup.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |     Ticker       |
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | DividendResolver |  (ordered source strategy)
//! +------------------+
//!          |
//!          v
//! +----------------------+
//! | DividendDataProvider |  (Yahoo, test doubles)
//! +----------------------+
//!          |
//!          v
//! +------------------+
//! |  DividendFacts   |  (date, rate, price)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`DividendFacts`] - Resolved ex-dividend date, rate and price
//! - [`Resolution`] - Facts, or the normal "no event data" outcome
//! - [`SummaryBundle`] / [`CalendarBundle`] - Raw provider bundles
//! - [`DividendResolver`] - The multi-source resolution strategy
//! - [`MarketDataError`] - Per-ticker fetch failures

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

pub use errors::MarketDataError;
pub use models::{CalendarBundle, DividendFacts, Resolution, ResolutionSource, SummaryBundle};
pub use provider::yahoo::YahooProvider;
pub use provider::DividendDataProvider;
pub use resolver::DividendResolver;
