use chrono::Utc;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::ContactSubmission;

pub const SECRET_HEADER: &str = "x-webhook-secret";

/// Client for the external automation webhook that receives forwarded
/// contact-form submissions.
pub struct WebhookClient {
    http_client: Client,
    url: String,
    secret: Option<Secret<String>>,
}

#[derive(serde::Serialize)]
struct ForwardRequest<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    timestamp: String,
}

/// Whatever the webhook answered with. Both fields are optional: an
/// absent or non-JSON body is treated as a successful delivery.
#[derive(serde::Deserialize, Default)]
pub struct WebhookReply {
    pub ok: Option<bool>,
    pub message: Option<String>,
}

impl WebhookClient {
    pub fn new(
        url: String,
        secret: Option<Secret<String>>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self { http_client, url, secret })
    }

    #[tracing::instrument(name = "Forward submission to webhook", skip(self, submission))]
    pub async fn forward(
        &self,
        submission: &ContactSubmission,
    ) -> Result<WebhookReply, reqwest::Error> {
        let body = ForwardRequest {
            name: submission.name.as_ref(),
            email: submission.email.as_ref(),
            message: submission.message.as_ref(),
            timestamp: Utc::now().to_rfc3339(),
        };
        let mut request = self.http_client.post(&self.url).json(&body);
        if let Some(secret) = &self.secret {
            request = request.header(SECRET_HEADER, secret.expose_secret());
        }
        let response = request.send().await?.error_for_status()?;
        // A reply we cannot parse carries no verdict; assume delivery
        // succeeded, matching a webhook that returns no body at all.
        Ok(response.json::<WebhookReply>().await.unwrap_or_default())
    }
}
