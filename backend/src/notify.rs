use std::time::Duration;

use async_trait::async_trait;
use shared::{ContactRequest, WaitlistRequest};
use thiserror::Error;

use crate::env;

// simulated provider round trip
const CONTACT_DELAY: Duration = Duration::from_millis(500);
const WAITLIST_DELAY: Duration = Duration::from_millis(300);

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Delivery seam for accepted submissions. The only implementation today
/// logs and simulates latency; a real mail provider would slot in here.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn contact_received(&self, submission: &ContactRequest) -> Result<(), NotifyError>;
    async fn waitlist_joined(&self, submission: &WaitlistRequest) -> Result<(), NotifyError>;
}

/// Logs submission metadata only (presence flags and lengths), never field
/// content.
pub struct LogNotifier {
    mail_configured: bool,
    waitlist_inbox: Option<String>,
}

impl LogNotifier {
    #[must_use]
    pub fn from_env() -> Self {
        let mail_configured = std::env::var(env::ENV_MAIL_API_KEY).is_ok()
            && std::env::var(env::ENV_MAIL_FROM).is_ok()
            && std::env::var(env::ENV_MAIL_TO).is_ok();

        if !mail_configured {
            tracing::info!("no mail provider configured, submissions are logged only");
        }

        Self {
            mail_configured,
            waitlist_inbox: std::env::var(env::ENV_WAITLIST_INBOX).ok(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn contact_received(&self, submission: &ContactRequest) -> Result<(), NotifyError> {
        tracing::info!(
            has_name = !submission.name.is_empty(),
            has_email = !submission.email.is_empty(),
            has_message = !submission.message.is_empty(),
            message_length = submission.message.len(),
            mail_configured = self.mail_configured,
            "contact submission received"
        );

        tokio::time::sleep(CONTACT_DELAY).await;

        Ok(())
    }

    async fn waitlist_joined(&self, submission: &WaitlistRequest) -> Result<(), NotifyError> {
        tracing::info!(
            has_email = !submission.email.is_empty(),
            has_name = submission
                .name
                .as_deref()
                .is_some_and(|name| !name.is_empty()),
            inbox_configured = self.waitlist_inbox.is_some(),
            "waitlist submission received"
        );

        tokio::time::sleep(WAITLIST_DELAY).await;

        Ok(())
    }
}
