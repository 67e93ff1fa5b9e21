use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use crate::domain::ContactSubmission;
use crate::notifications::Notifier;
use crate::routes::RelayResult;

/// Fallback shown when the relay answered with a failure but no reason,
/// or could not be reached at all.
const GENERIC_FAILURE: &str = "Failed to send message. Please try again.";
const DEFAULT_CLEAR_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Loading,
    Success(String),
    Error(String),
}

struct FormInner {
    name: String,
    email: String,
    message: String,
    state: SubmissionState,
    /// Bumped by every `submit()` and `reset()`. A scheduled auto-clear or
    /// an in-flight response only applies while its captured epoch is still
    /// current, so stale timers and late responses cannot clobber state.
    epoch: u64,
}

/// Client-side lifecycle of the contact form: field buffers plus an
/// Idle/Loading/Success/Error state driven by `submit()` and `reset()`.
/// Success and error displays revert to Idle after `clear_after`.
pub struct ContactForm {
    inner: Arc<Mutex<FormInner>>,
    http_client: reqwest::Client,
    relay_url: String,
    clear_after: Duration,
    notifier: Option<Notifier>,
}

impl ContactForm {
    /// `base_url` is the address of the relay service, without the
    /// `/api/contact` path.
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FormInner {
                name: String::new(),
                email: String::new(),
                message: String::new(),
                state: SubmissionState::Idle,
                epoch: 0,
            })),
            http_client: reqwest::Client::new(),
            relay_url: format!("{}/api/contact", base_url),
            clear_after: DEFAULT_CLEAR_AFTER,
            notifier: None,
        }
    }

    pub fn with_clear_after(mut self, clear_after: Duration) -> Self {
        self.clear_after = clear_after;
        self
    }

    /// Surfaces submission outcomes as toasts on top of the inline state.
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.inner.lock().unwrap().name = name.into();
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.inner.lock().unwrap().email = email.into();
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.inner.lock().unwrap().message = message.into();
    }

    pub fn state(&self) -> SubmissionState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Current field buffers as (name, email, message).
    pub fn fields(&self) -> (String, String, String) {
        let inner = self.inner.lock().unwrap();
        (inner.name.clone(), inner.email.clone(), inner.message.clone())
    }

    /// Validates, POSTs to the relay endpoint, and transitions the state
    /// accordingly. A validation failure stores the reason and performs no
    /// network call. Returns the state the submission settled in.
    pub async fn submit(&self) -> SubmissionState {
        let (payload, epoch) = {
            let mut inner = self.inner.lock().unwrap();
            if let Err(reason) = ContactSubmission::parse(
                inner.name.clone(),
                inner.email.clone(),
                inner.message.clone(),
            ) {
                // Still bumps the epoch: a display timer left over from a
                // previous submission must not wipe the inline error.
                inner.epoch += 1;
                inner.state = SubmissionState::Error(reason);
                return inner.state.clone();
            }
            inner.epoch += 1;
            inner.state = SubmissionState::Loading;
            let payload = serde_json::json!({
                "name": inner.name,
                "email": inner.email,
                "message": inner.message,
            });
            (payload, inner.epoch)
        };

        let outcome = self.post_submission(&payload).await;

        let mut inner = self.inner.lock().unwrap();
        if inner.epoch != epoch {
            // reset() ran while the request was in flight; drop the result.
            return inner.state.clone();
        }
        let state = match outcome {
            Ok(result) if result.ok => {
                inner.name.clear();
                inner.email.clear();
                inner.message.clear();
                if let Some(notifier) = &self.notifier {
                    notifier.success(result.message.clone());
                }
                SubmissionState::Success(result.message)
            }
            Ok(result) => {
                let message = if result.message.is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    result.message
                };
                if let Some(notifier) = &self.notifier {
                    notifier.error(message.clone());
                }
                SubmissionState::Error(message)
            }
            Err(e) => {
                tracing::warn!(error = ?e, "Contact form submission failed");
                if let Some(notifier) = &self.notifier {
                    notifier.error(GENERIC_FAILURE.to_string());
                }
                SubmissionState::Error(GENERIC_FAILURE.to_string())
            }
        };
        inner.state = state.clone();
        drop(inner);
        self.schedule_clear(epoch);
        state
    }

    /// Returns fields and state to blank Idle. Pending display timers and
    /// any in-flight submission are cancelled via the epoch bump.
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.epoch += 1;
        inner.name.clear();
        inner.email.clear();
        inner.message.clear();
        inner.state = SubmissionState::Idle;
    }

    async fn post_submission(
        &self,
        payload: &serde_json::Value,
    ) -> Result<RelayResult, reqwest::Error> {
        self.http_client
            .post(&self.relay_url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json::<RelayResult>()
            .await
    }

    fn schedule_clear(&self, epoch: u64) {
        let inner = Arc::downgrade(&self.inner);
        let clear_after = self.clear_after;
        tokio::spawn(async move {
            tokio::time::sleep(clear_after).await;
            clear_if_current(&inner, epoch);
        });
    }
}

fn clear_if_current(inner: &Weak<Mutex<FormInner>>, epoch: u64) {
    if let Some(inner) = inner.upgrade() {
        let mut inner = inner.lock().unwrap();
        if inner.epoch == epoch {
            inner.state = SubmissionState::Idle;
        }
    }
}
