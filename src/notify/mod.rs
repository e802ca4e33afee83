//! # Notification Sink
//!
//! Transient success and failure messages ("toasts"). Calls are fire-and-forget:
//! nothing is returned and nothing the caller does depends on them.

use std::sync::{Arc, Mutex};
use tracing::{error, info};

/// Where a success toast is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    #[default]
    TopCenter,
    TopRight,
    BottomCenter,
    BottomRight,
}

/// Something that can surface user-facing messages.
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str, placement: Placement);

    fn notify_error(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify_success(&self, message: &str, placement: Placement) {
        (**self).notify_success(message, placement)
    }

    fn notify_error(&self, message: &str) {
        (**self).notify_error(message)
    }
}

/// Writes notifications to the log. Used by headless hosts such as the demo binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_success(&self, message: &str, placement: Placement) {
        info!(?placement, "{message}");
    }

    fn notify_error(&self, message: &str) {
        error!("{message}");
    }
}

/// A notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success { message: String, placement: Placement },
    Error { message: String },
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Success { message, .. } | Notification::Error { message } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error { .. })
    }
}

/// Keeps every notification in order. Clones share the same history,
/// so a UI layer can drain what a dialog produced.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    history: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything recorded so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// The most recent notification.
    pub fn last(&self) -> Option<Notification> {
        self.lock().last().cloned()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    fn push(&self, notification: Notification) {
        self.lock().push(notification);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        // A panic while pushing can't leave the Vec half-written.
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str, placement: Placement) {
        self.push(Notification::Success {
            message: message.to_string(),
            placement,
        });
    }

    fn notify_error(&self, message: &str) {
        self.push(Notification::Error {
            message: message.to_string(),
        });
    }
}
