//! User-facing transient notices.
//!
//! [`ApiClient::submit`](crate::ApiClient::submit) shows exactly one notice
//! per invocation, success or error, never both. Front ends plug in their own
//! sink; [`TerminalNotifier`] is the stderr implementation used by the CLI.

use std::time::Duration;

/// How long a notice should stay visible by default.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Visual category of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A sink for transient user-facing notices.
///
/// `duration` is advisory: sinks without a concept of display time (like a
/// terminal) may ignore it.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: NoticeKind, duration: Duration);
}

/// Prints notices as symbol-prefixed lines on stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str, kind: NoticeKind, _duration: Duration) {
        match kind {
            NoticeKind::Success => eprintln!("✓ {}", message),
            NoticeKind::Error => eprintln!("✗ {}", message),
            NoticeKind::Warning => eprintln!("! {}", message),
            NoticeKind::Info => eprintln!("· {}", message),
        }
    }
}
