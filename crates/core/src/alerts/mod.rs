//! The dividend alert pipeline.
//!
//! Leaf-first: [`matcher`] decides whether today is the event date,
//! [`estimator`] turns shares and rate into a payout, [`message`]
//! renders the alert block, and [`service`] runs the whole pass over the
//! portfolio with per-ticker failure isolation.

pub mod estimator;
pub mod matcher;
pub mod message;
pub mod service;

pub use message::AlertMessage;
pub use service::{DividendAlertService, RunResult};
