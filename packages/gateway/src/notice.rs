//! Fire-and-forget user-facing notices (`showMessage`).
//!
//! This surface is disjoint from call dispatch: the core sends a notice and
//! never learns what became of it. The receiving half belongs to the UI
//! collaborator, which drains it into popups.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::failure::Failure;

/// Visual flavor of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warn,
    Error,
}

/// A user-facing popup message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(description: impl Into<String>) -> Self {
        Notice {
            title: None,
            description: description.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn warn(description: impl Into<String>) -> Self {
        Notice {
            title: None,
            description: description.into(),
            kind: NoticeKind::Warn,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Notice {
            title: None,
            description: description.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render a boundary failure as an error notice, the way the presenter
    /// surfaces a failed call to the user.
    pub fn from_failure(failure: &Failure) -> Self {
        Notice::error(failure.description.clone())
    }
}

/// Sending half of the notice surface. Cheap to clone.
#[derive(Clone)]
pub struct NoticeSender {
    tx: mpsc::UnboundedSender<Notice>,
}

impl NoticeSender {
    /// Send a notice. Never fails: if the receiving side is gone the
    /// message is logged and discarded.
    pub fn show(&self, notice: Notice) {
        if let Err(dropped) = self.tx.send(notice) {
            tracing::debug!("notice receiver gone, discarding: {}", dropped.0.description);
        }
    }
}

/// Create the notice surface: a sender for the core and a receiver for the
/// UI collaborator to drain.
pub fn notice_channel() -> (NoticeSender, mpsc::UnboundedReceiver<Notice>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (NoticeSender { tx }, rx)
}
