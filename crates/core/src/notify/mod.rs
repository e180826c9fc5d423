//! Notification dispatch.
//!
//! A run produces zero or more alert messages; dispatch sends exactly
//! one aggregated notification when there is anything to say, and is a
//! no-op otherwise. Which channel is used is a deployment choice made
//! once at startup, not per run.

mod email;
mod github;

pub use email::EmailNotifier;
pub use github::GithubIssueNotifier;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::alerts::RunResult;
use crate::errors::Result;

/// A notification sink. Constructor-injected so tests can substitute a
/// recording double.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel name for logs, e.g. "email" or "github".
    fn channel(&self) -> &'static str;

    /// Deliver one notification. A failure here is fatal to the run: a
    /// failed send means the user was not informed.
    async fn send(&self, subject: &str, body: &str) -> Result<()>;
}

/// Send the aggregated notification for a run, or do nothing when the
/// run produced no alerts.
pub async fn dispatch(notifier: &dyn Notifier, result: &RunResult, today: NaiveDate) -> Result<()> {
    if result.messages.is_empty() {
        info!("No dividends found for today.");
        return Ok(());
    }

    info!(
        "Dividends found! Sending {} notification...",
        notifier.channel()
    );

    let subject = format!("💰 Dividend Alert: {}", today);
    let blocks: Vec<&str> = result.messages.iter().map(|m| m.body.as_str()).collect();
    let body = format!(
        "You have incoming dividends today!\n\n{}",
        blocks.join("\n")
    );

    notifier.send(&subject, &body).await?;
    info!("Notification sent successfully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::alerts::AlertMessage;
    use crate::errors::AlertError;

    struct RecordingNotifier {
        calls: AtomicUsize,
        last: Mutex<Option<(String, String)>>,
        fail: bool,
    }

    impl RecordingNotifier {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
                fail,
            }
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        fn channel(&self) -> &'static str {
            "recording"
        }

        async fn send(&self, subject: &str, body: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some((subject.to_string(), body.to_string()));
            if self.fail {
                return Err(AlertError::Dispatch {
                    channel: "recording",
                    message: "simulated send failure".to_string(),
                });
            }
            Ok(())
        }
    }

    fn run_result(tickers: &[&str]) -> RunResult {
        RunResult {
            messages: tickers
                .iter()
                .map(|t| AlertMessage {
                    ticker: t.to_string(),
                    body: format!("🔔 Stock: {}", t),
                })
                .collect(),
            errors: 0,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[tokio::test]
    async fn test_empty_run_never_invokes_notifier() {
        let notifier = RecordingNotifier::new(false);
        dispatch(&notifier, &RunResult::default(), today())
            .await
            .unwrap();
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_aggregated_notification() {
        let notifier = RecordingNotifier::new(false);
        dispatch(&notifier, &run_result(&["AAA", "BBB"]), today())
            .await
            .unwrap();

        assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
        let (subject, body) = notifier.last.lock().unwrap().clone().unwrap();
        assert_eq!(subject, "💰 Dividend Alert: 2024-03-15");
        assert!(body.starts_with("You have incoming dividends today!"));
        assert!(body.contains("🔔 Stock: AAA"));
        assert!(body.contains("🔔 Stock: BBB"));
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_fatal_and_attributable() {
        let notifier = RecordingNotifier::new(true);
        let err = dispatch(&notifier, &run_result(&["AAA"]), today())
            .await
            .unwrap_err();

        assert!(err.is_fatal());
        assert!(matches!(err, AlertError::Dispatch { .. }));
    }
}
