#![allow(clippy::future_not_send)]

use gloo_net::http::Request;
use serde::Serialize;
use shared::ErrorResponse;

/// Something went wrong while submitting a form.
#[derive(Debug)]
pub enum SubmitError {
    /// The server answered with a non-2xx status.
    Rejected(String),
    /// The request itself failed before an answer arrived.
    Transport(String),
}

impl SubmitError {
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Rejected(message) | Self::Transport(message) => message,
        }
    }
}

/// POSTs the trimmed payload as JSON. No timeout and no retries; a failed
/// submission is only retried by the user.
pub async fn submit_form<M: Serialize>(
    endpoint: &str,
    payload: &M,
    fallback: &str,
) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .json(payload)
        .map_err(|e| SubmitError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .map(|body| body.error)
        .filter(|error| !error.is_empty())
        .unwrap_or_else(|| fallback.to_owned());

    Err(SubmitError::Rejected(message))
}
