//! User notification port (the toast system).

use std::sync::Mutex;

/// Visual category of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Green confirmation toast.
    Success,
    /// Red failure toast.
    Error,
}

/// A transient user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message shown to the user.
    pub message: String,
    /// Success or error styling.
    pub kind: NoticeKind,
}

impl Notice {
    /// Build a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    /// Build an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Sink for user-facing notices.
///
/// The embedding front end renders these however it likes; delivery is
/// fire-and-forget and a dropped notice loses nothing but feedback.
pub trait Notifier: Send + Sync {
    /// Deliver a notice to the user.
    fn notify(&self, notice: Notice);
}

/// [`Notifier`] that writes notices to the tracing log.
///
/// The default sink for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => tracing::info!(message = %notice.message, "notice"),
            NoticeKind::Error => tracing::warn!(message = %notice.message, "notice"),
        }
    }
}

/// [`Notifier`] that records every notice, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all notices delivered so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map_or_else(|_| Vec::new(), |n| n.clone())
    }

    /// Messages of all notices delivered so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .map(|notice| notice.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_constructors() {
        let ok = Notice::success("added");
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.message, "added");

        let err = Notice::error("failed");
        assert_eq!(err.kind, NoticeKind::Error);
    }

    #[test]
    fn test_recording_notifier_records_in_order() {
        let recorder = RecordingNotifier::new();
        recorder.notify(Notice::success("first"));
        recorder.notify(Notice::error("second"));

        let messages = recorder.messages();
        assert_eq!(messages, vec!["first".to_string(), "second".to_string()]);
    }
}
