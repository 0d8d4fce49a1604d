//! Transient user notifications.
//!
//! The core calls a [`NotificationSink`] exactly once per download
//! resolution, at a level matching the outcome. Sinks are
//! fire-and-forget: nothing in the core consumes their result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Neutral feedback
    Info,

    /// An action started or completed as expected
    Success,

    /// An action could not be carried out
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Info => write!(f, "info"),
            Level::Success => write!(f, "success"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// Receives transient, leveled messages for user feedback.
pub trait NotificationSink {
    /// Deliver one message. Fire-and-forget.
    fn notify(&self, message: &str, level: Level);
}

/// Sink that forwards notifications to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, message: &str, level: Level) {
        match level {
            Level::Error => warn!(level = %level, "{message}"),
            _ => info!(level = %level, "{message}"),
        }
    }
}

/// One active toast.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Monotonic id used for dismissal
    pub id: u64,

    /// Message text
    pub message: String,

    /// Severity
    pub level: Level,

    /// When the toast was raised
    pub raised_at: DateTime<Utc>,
}

/// In-memory toast display with timed auto-dismiss.
///
/// Each notification becomes a toast that a one-shot tokio task
/// removes after the configured delay. Dismissals need no
/// cancellation: a task firing after the toast is already gone (or
/// after the catalog has changed again) removes nothing and is
/// harmless. Outside a tokio runtime, toasts simply stay until the
/// hub is dropped.
#[derive(Debug, Clone)]
pub struct ToastHub {
    toasts: Arc<Mutex<Vec<Toast>>>,
    next_id: Arc<AtomicU64>,
    dismiss_after: Duration,
}

impl ToastHub {
    /// Create a hub with the given auto-dismiss delay.
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(0)),
            dismiss_after,
        }
    }

    /// Currently visible toasts, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        self.toasts.lock().expect("toast list poisoned").clone()
    }

    /// Remove a toast by id. No-op when already dismissed.
    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts.lock().expect("toast list poisoned");
        if let Some(pos) = toasts.iter().position(|t| t.id == id) {
            toasts.remove(pos);
        }
    }
}

impl NotificationSink for ToastHub {
    fn notify(&self, message: &str, level: Level) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let toast = Toast {
            id,
            message: message.to_string(),
            level,
            raised_at: Utc::now(),
        };

        self.toasts.lock().expect("toast list poisoned").push(toast);

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let hub = self.clone();
            let delay = self.dismiss_after;
            handle.spawn(async move {
                tokio::time::sleep(delay).await;
                hub.dismiss(id);
            });
        }
    }
}
