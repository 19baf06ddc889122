use axum::{
    body::Bytes,
    http::StatusCode,
    response::{Html, IntoResponse},
    Extension, Json,
};
use serde_json::Value;
use shared::{contact, waitlist, ContactRequest, ErrorResponse, SubmitResponse, WaitlistRequest};

use crate::{
    app::App,
    error::{ApiError, Result},
};

pub const CONTACT_CONFIRMATION: &str =
    "Thank you for your message. We will get back to you soon.";
pub const WAITLIST_CONFIRMATION: &str =
    "Thank you for joining the waitlist. We'll be in touch soon!";

fn parse_body(body: &Bytes) -> Result<Value> {
    serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)
}

pub async fn contact_handler(
    Extension(app): Extension<App>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let body = parse_body(&body)?;

    let errors = contact::validate_body(&body);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    // validation guarantees all three fields are strings
    let request: ContactRequest = serde_json::from_value(body)?;

    app.process_contact(request).await?;

    Ok(Json(SubmitResponse {
        success: true,
        message: CONTACT_CONFIRMATION.to_owned(),
    }))
}

pub async fn waitlist_handler(
    Extension(app): Extension<App>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let body = parse_body(&body)?;

    let errors = waitlist::validate_body(&body);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let request: WaitlistRequest = serde_json::from_value(body)?;

    app.process_waitlist(request).await?;

    Ok(Json(SubmitResponse {
        success: true,
        message: WAITLIST_CONFIRMATION.to_owned(),
    }))
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_owned(),
            details: None,
        }),
    )
}

pub async fn ping_handler() -> Html<&'static str> {
    Html("pong")
}
