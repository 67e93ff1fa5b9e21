use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use uuid::Uuid;

const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

/// Ordered list of active toasts. A clonable handle to explicitly shared
/// state; every holder sees the same list. Auto-removal tasks hold only a
/// weak reference, so dropping the last handle cancels them.
#[derive(Clone, Default)]
pub struct Notifier {
    inner: Arc<Mutex<Vec<Toast>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and schedules its removal after `duration`.
    /// A zero duration makes the toast sticky until `remove` is called.
    pub fn show(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let toast = Toast {
            id,
            message: message.into(),
            severity,
            duration,
        };
        self.inner.lock().unwrap().push(toast);
        if duration > Duration::ZERO {
            self.schedule_removal(id, duration);
        }
        id
    }

    pub fn remove(&self, id: Uuid) {
        self.inner.lock().unwrap().retain(|toast| toast.id != id);
    }

    pub fn active(&self) -> Vec<Toast> {
        self.inner.lock().unwrap().clone()
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.show(message, Severity::Success, DEFAULT_TOAST_DURATION)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.show(message, Severity::Error, DEFAULT_TOAST_DURATION)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.show(message, Severity::Info, DEFAULT_TOAST_DURATION)
    }

    pub fn warning(&self, message: impl Into<String>) -> Uuid {
        self.show(message, Severity::Warning, DEFAULT_TOAST_DURATION)
    }

    fn schedule_removal(&self, id: Uuid, duration: Duration) {
        let inner: Weak<Mutex<Vec<Toast>>> = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if let Some(inner) = inner.upgrade() {
                inner.lock().unwrap().retain(|toast| toast.id != id);
            }
        });
    }
}
