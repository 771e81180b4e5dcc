use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short-lived, human readable message about the outcome of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success<T: ToString, M: ToString>(title: T, message: M) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn error<T: ToString, M: ToString>(title: T, message: M) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Hands notifications to the log; display is up to whoever tails it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NoticeKind::Success => info!(title = %notification.title, "{}", notification.message),
            NoticeKind::Error => warn!(title = %notification.title, "{}", notification.message),
        }
    }
}

#[cfg(test)]
pub use self::recording::RecordingNotifier;
