//! GitHub issue notifier.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::errors::{AlertError, Result};
use crate::notify::Notifier;

const CHANNEL: &str = "github";
const API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = "divwatch";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Opens the aggregated alert as a single issue on the configured
/// repository.
#[derive(Debug)]
pub struct GithubIssueNotifier {
    client: reqwest::Client,
    token: String,
    repository: String,
}

impl GithubIssueNotifier {
    /// Build a notifier for `repository` in `owner/repo` form.
    pub fn new(token: &str, repository: &str) -> Result<Self> {
        if !repository.contains('/') {
            return Err(AlertError::Dispatch {
                channel: CHANNEL,
                message: format!("repository must be owner/repo, got {}", repository),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AlertError::Dispatch {
                channel: CHANNEL,
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            token: token.to_string(),
            repository: repository.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for GithubIssueNotifier {
    fn channel(&self) -> &'static str {
        CHANNEL
    }

    async fn send(&self, subject: &str, body: &str) -> Result<()> {
        let url = format!("{}/repos/{}/issues", API_BASE, self.repository);
        debug!("Creating issue on {}", self.repository);

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .bearer_auth(&self.token)
            .json(&json!({ "title": subject, "body": body }))
            .send()
            .await
            .map_err(|e| AlertError::Dispatch {
                channel: CHANNEL,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AlertError::Dispatch {
                channel: CHANNEL,
                message: format!("GitHub API returned {}: {}", status, detail),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_must_be_owner_repo() {
        let err = GithubIssueNotifier::new("token", "just-a-name").unwrap_err();
        assert!(matches!(err, AlertError::Dispatch { .. }));

        assert!(GithubIssueNotifier::new("token", "owner/repo").is_ok());
    }
}
