use std::path::PathBuf;

/// Which notification sink a deployment uses. Selected once at startup,
/// never per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierChannel {
    Email,
    Github,
}

pub struct Config {
    pub portfolio_path: PathBuf,
    pub notifier: NotifierChannel,
    pub gmail_user: Option<String>,
    pub gmail_app_password: Option<String>,
    pub mail_to: Option<String>,
    pub github_token: Option<String>,
    pub github_repository: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let portfolio_path = std::env::var("DIVWATCH_PORTFOLIO")
            .unwrap_or_else(|_| "portfolio.json".to_string())
            .into();
        let notifier = match std::env::var("DIVWATCH_NOTIFIER")
            .unwrap_or_else(|_| "email".to_string())
            .to_lowercase()
            .as_str()
        {
            "email" => NotifierChannel::Email,
            "github" => NotifierChannel::Github,
            other => panic!(
                "Invalid DIVWATCH_NOTIFIER: {} (expected 'email' or 'github')",
                other
            ),
        };
        Self {
            portfolio_path,
            notifier,
            gmail_user: std::env::var("GMAIL_USER").ok(),
            gmail_app_password: std::env::var("GMAIL_APP_PASSWORD").ok(),
            mail_to: std::env::var("DIVWATCH_MAIL_TO").ok(),
            github_token: std::env::var("GITHUB_TOKEN").ok(),
            github_repository: std::env::var("GITHUB_REPOSITORY").ok(),
        }
    }
}
