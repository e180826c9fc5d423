use std::sync::Arc;

use chrono::Utc;
use divwatch_core::{
    dispatch, load_portfolio, AlertError, DividendAlertService, EmailNotifier,
    GithubIssueNotifier, Notifier,
};
use divwatch_market_data::{DividendResolver, YahooProvider};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, NotifierChannel};

pub fn init_tracing() {
    let log_format = std::env::var("DIVWATCH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

/// Build the configured notifier, failing fast on a missing credential
/// before any market data is fetched.
pub fn build_notifier(config: &Config) -> Result<Box<dyn Notifier>, AlertError> {
    match config.notifier {
        NotifierChannel::Email => {
            let user = config
                .gmail_user
                .as_deref()
                .ok_or(AlertError::MissingCredential("GMAIL_USER"))?;
            let password = config
                .gmail_app_password
                .as_deref()
                .ok_or(AlertError::MissingCredential("GMAIL_APP_PASSWORD"))?;
            Ok(Box::new(EmailNotifier::new(
                user,
                password,
                config.mail_to.as_deref(),
            )?))
        }
        NotifierChannel::Github => {
            let token = config
                .github_token
                .as_deref()
                .ok_or(AlertError::MissingCredential("GITHUB_TOKEN"))?;
            let repository = config
                .github_repository
                .as_deref()
                .ok_or(AlertError::MissingCredential("GITHUB_REPOSITORY"))?;
            Ok(Box::new(GithubIssueNotifier::new(token, repository)?))
        }
    }
}

/// One full dividend check: load, resolve, match, aggregate, notify.
///
/// Per-ticker failures are contained in the service; any error that
/// escapes this function is fatal and exits non-zero.
pub async fn check(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Starting Dividend Check...");

    let notifier = build_notifier(config)?;
    let holdings = load_portfolio(&config.portfolio_path)?;

    let today = Utc::now().date_naive();
    tracing::info!("Date used for check: {}", today);

    let provider = Arc::new(YahooProvider::new()?);
    let service = DividendAlertService::new(DividendResolver::new(provider));

    let result = service.run(&holdings, today).await;
    if result.errors > 0 {
        tracing::warn!("{} holding(s) could not be checked", result.errors);
    }

    dispatch(notifier.as_ref(), &result, today).await?;
    Ok(())
}

/// Send a test notification through the configured channel to verify
/// credentials and permissions.
pub async fn probe(config: &Config) -> anyhow::Result<()> {
    let notifier = build_notifier(config)?;
    let today = Utc::now().date_naive();

    tracing::info!("Sending test notification via {}...", notifier.channel());
    let subject = format!("🧪 Test: Dividend Checker {}", today);
    let body = "This is a test notification to verify that the Dividend Checker \
                credentials and permissions are working correctly.\n\n\
                If you can read this, it works! 🎉";

    notifier.send(&subject, body).await?;
    tracing::info!("Test notification sent successfully!");
    Ok(())
}
