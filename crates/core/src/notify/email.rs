//! Email notifier (SMTP).

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::errors::{AlertError, Result};
use crate::notify::Notifier;

const CHANNEL: &str = "email";
const DEFAULT_RELAY: &str = "smtp.gmail.com";

/// Sends the aggregated alert as a single email.
///
/// Defaults to sending to the authenticated user themselves when no
/// recipient is configured.
#[derive(Debug)]
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailNotifier {
    /// Build a notifier for an SMTP relay with username/app-password
    /// authentication.
    pub fn new(user: &str, app_password: &str, recipient: Option<&str>) -> Result<Self> {
        let dispatch_error = |message: String| AlertError::Dispatch {
            channel: CHANNEL,
            message,
        };

        let from: Mailbox = user
            .parse()
            .map_err(|e| dispatch_error(format!("invalid sender address {}: {}", user, e)))?;
        let to: Mailbox = recipient
            .unwrap_or(user)
            .parse()
            .map_err(|e| dispatch_error(format!("invalid recipient address: {}", e)))?;

        let credentials = Credentials::new(user.to_string(), app_password.to_string());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(DEFAULT_RELAY)
            .map_err(|e| dispatch_error(format!("SMTP relay setup failed: {}", e)))?
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from,
            to,
        })
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    fn channel(&self) -> &'static str {
        CHANNEL
    }

    async fn send(&self, subject: &str, body: &str) -> Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| AlertError::Dispatch {
                channel: CHANNEL,
                message: format!("failed to build message: {}", e),
            })?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AlertError::Dispatch {
                channel: CHANNEL,
                message: e.to_string(),
            })?;

        Ok(())
    }
}
