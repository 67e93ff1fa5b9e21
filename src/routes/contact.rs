use std::fmt::Formatter;

use actix_web::web;
use actix_web::HttpResponse;
use anyhow::Context;

use crate::domain::ContactSubmission;
use crate::webhook_client::WebhookClient;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

/// JSON body of `POST /api/contact`. Missing fields deserialize as empty
/// strings so they fall through to the validator instead of a 400.
#[derive(serde::Deserialize)]
pub struct FormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl TryFrom<FormData> for ContactSubmission {
    type Error = String;

    fn try_from(form: FormData) -> Result<Self, Self::Error> {
        ContactSubmission::parse(form.name, form.email, form.message)
    }
}

/// Normalized outcome of a relay attempt. Every response of the endpoint
/// is HTTP 200 with this body; failures are carried in `ok`/`message`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RelayResult {
    pub ok: bool,
    #[serde(default)]
    pub message: String,
}

impl RelayResult {
    pub fn success(message: String) -> Self {
        Self { ok: true, message }
    }

    pub fn failure(message: String) -> Self {
        Self { ok: false, message }
    }
}

#[derive(thiserror::Error)]
pub enum RelayError {
    #[error("Contact form is not properly configured. Please try again later.")]
    NotConfigured,
    #[error("Failed to send message. Please try again later.")]
    ForwardFailed(#[source] anyhow::Error),
}

impl std::fmt::Debug for RelayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[tracing::instrument(
    name = "Relay a contact form submission",
    skip(form, webhook_client),
    fields(contact_email = tracing::field::Empty)
)]
pub async fn contact(
    form: web::Json<FormData>,
    webhook_client: web::Data<Option<WebhookClient>>,
) -> HttpResponse {
    let submission = match ContactSubmission::try_from(form.0) {
        Ok(submission) => submission,
        Err(reason) => return HttpResponse::Ok().json(RelayResult::failure(reason)),
    };
    tracing::Span::current()
        .record("contact_email", &tracing::field::display(&submission.email));

    let result = match relay(&submission, webhook_client.get_ref()).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error.cause_chain = ?e, "Failed to relay contact form submission");
            RelayResult::failure(e.to_string())
        }
    };
    HttpResponse::Ok().json(result)
}

/// Forwards the submission upstream and normalizes the reply. A reply
/// carrying a boolean `ok` is relayed verbatim; anything else counts as
/// a successful delivery.
async fn relay(
    submission: &ContactSubmission,
    webhook_client: &Option<WebhookClient>,
) -> Result<RelayResult, RelayError> {
    let webhook_client = webhook_client.as_ref().ok_or(RelayError::NotConfigured)?;
    let reply = webhook_client
        .forward(submission)
        .await
        .context("Failed to forward submission to the webhook")
        .map_err(RelayError::ForwardFailed)?;

    let result = match reply.ok {
        Some(ok) => {
            let fallback = if ok { SUCCESS_MESSAGE } else { FAILURE_MESSAGE };
            let message = reply.message.unwrap_or_else(|| fallback.to_string());
            RelayResult { ok, message }
        }
        None => RelayResult::success(SUCCESS_MESSAGE.to_string()),
    };
    Ok(result)
}
