//! User-facing feedback raised by screens

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Where the message is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    /// Text under the form
    Inline,
    /// Modal dialog
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub style: NoticeStyle,
    pub message: String,
}

impl Notice {
    pub fn alert(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            style: NoticeStyle::Alert,
            message: message.into(),
        }
    }

    pub fn inline(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            style: NoticeStyle::Inline,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::alert(NoticeKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::alert(NoticeKind::Error, message)
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self.kind {
            NoticeKind::Success => "Success",
            NoticeKind::Error => "Error",
            NoticeKind::Info => "Info",
        };
        write!(f, "{}: {}", title, self.message)
    }
}
