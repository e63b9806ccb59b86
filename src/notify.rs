//! User-facing notifications.
//!
//! The store reports the outcome of every mutation and any load problem
//! through a [`Notifier`] rather than talking to a UI directly. The front
//! end decides how notifications are shown; the default implementation
//! forwards them to `tracing`.

use tracing::{info, warn};

/// Sink for non-blocking user notifications emitted by the store.
pub trait Notifier: Send + Sync {
    /// A mutation completed (record added or deleted).
    fn success(&self, message: &str);

    /// Something non-fatal went wrong (load or persist failure).
    fn warning(&self, message: &str);
}

/// Default notifier that emits notifications as log events.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("{message}");
    }

    fn warning(&self, message: &str) {
        warn!("{message}");
    }
}
