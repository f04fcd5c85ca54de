//! User-visible notifications emitted by the workflow.

/// Outcome class of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A single user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn failure(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Sink for user-visible notifications.
///
/// Called on the async path; implementations must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Notifier that writes notices to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => tracing::info!("{}: {}", notice.title, notice.body),
            NoticeKind::Failure => tracing::warn!("{}: {}", notice.title, notice.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        let ok = Notice::success("Position", "Coordinates acquired");
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.title, "Position");

        let bad = Notice::failure("Address", "Network error");
        assert_eq!(bad.kind, NoticeKind::Failure);
        assert_eq!(bad.body, "Network error");
    }
}
