//! User-facing notifications, decoupled from cart logic.
//!
//! The cart reports rejections and failures through a [`Notifier`] so that
//! state logic never knows whether messages end up as toasts, terminal
//! output, or log lines. Callers additionally receive a typed
//! [`CartError`](crate::CartError) and may surface that however they like.

/// How serious a notice is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A rejected request the user can act on (e.g., out of stock).
    Warning,
    /// A failed operation (e.g., the shop API is unreachable).
    Error,
}

/// A single user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message severity.
    pub severity: Severity,
    /// Human-readable message text.
    pub message: String,
}

impl Notice {
    /// Create an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Create a warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Sink for user-facing messages.
pub trait Notifier: Send + Sync {
    /// Emit a notice. Must not fail and must not block for long.
    fn notify(&self, notice: Notice);
}

/// Notifier that routes notices through `tracing`.
///
/// The library default; binaries with a real user channel (terminal, UI)
/// substitute their own implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Warning => tracing::warn!("{}", notice.message),
            Severity::Error => tracing::error!("{}", notice.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_constructors() {
        let err = Notice::error("boom");
        assert_eq!(err.severity, Severity::Error);
        assert_eq!(err.message, "boom");

        let warn = Notice::warning("careful");
        assert_eq!(warn.severity, Severity::Warning);
    }

    #[test]
    fn test_tracing_notifier_is_infallible() {
        // Smoke test: emitting without a subscriber must not panic.
        TracingNotifier.notify(Notice::error("no subscriber installed"));
        TracingNotifier.notify(Notice::warning("still fine"));
    }
}
