//! Notification seam standing in for toast presentation.
//!
//! The session reports user-facing events through this trait; how they are
//! rendered (toast, terminal line, test buffer) is the caller's concern.

/// Sink for transient user-facing notifications.
pub trait Notifier: Send + Sync {
    /// A completed action, with a short detail line (e.g. the new quantity).
    fn success(&self, summary: &str, detail: &str);

    /// A failed action the user should know about.
    fn error(&self, message: &str);

    /// An informational event.
    fn info(&self, message: &str);
}

/// Notifier that routes notifications to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, summary: &str, detail: &str) {
        tracing::info!(detail = detail, "{summary}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}
