use std::sync::Arc;

use shared::{ContactRequest, WaitlistRequest};

use crate::{error::Result, notify::Notifier, sanitize::sanitize_input};

/// Per-field sanitization cap. Validation has already rejected anything
/// over a field's proper limit; this is a backstop, not the primary bound.
const CONTACT_FIELD_CAP: usize = 5000;
const WAITLIST_FIELD_CAP: usize = 254;

#[derive(Clone)]
pub struct App {
    notifier: Arc<dyn Notifier>,
}

impl App {
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Sanitizes the already-validated submission and hands it to the
    /// notifier.
    pub async fn process_contact(&self, request: ContactRequest) -> Result<()> {
        let sanitized = ContactRequest {
            name: sanitize_input(&request.name, CONTACT_FIELD_CAP),
            email: sanitize_input(&request.email, CONTACT_FIELD_CAP),
            message: sanitize_input(&request.message, CONTACT_FIELD_CAP),
        };

        self.notifier.contact_received(&sanitized).await?;

        Ok(())
    }

    pub async fn process_waitlist(&self, request: WaitlistRequest) -> Result<()> {
        let sanitized = WaitlistRequest {
            email: sanitize_input(&request.email, WAITLIST_FIELD_CAP),
            name: request
                .name
                .map(|name| sanitize_input(&name, WAITLIST_FIELD_CAP)),
        };

        self.notifier.waitlist_joined(&sanitized).await?;

        Ok(())
    }
}
