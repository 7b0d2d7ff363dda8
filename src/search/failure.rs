use std::fmt;
use thiserror::Error;

/// What went wrong while scanning the notes directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The scan could not be started at all (worker panicked or was torn down).
    ToolUnavailable,
    /// The scan ran but hit an error: missing root, permission denied, unreadable file.
    ScanFailed,
    /// The caller cancelled the scan.
    Cancelled,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::ToolUnavailable => "tool unavailable",
            FailureKind::ScanFailed => "scan failed",
            FailureKind::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// A failed search, carrying a short message meant for the user and an
/// optional raw diagnostic.
///
/// The front end shows `user_message` and, when present, `detail`. A search
/// that finds nothing is never a `SearchFailure`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{user_message}")]
pub struct SearchFailure {
    kind: FailureKind,
    user_message: String,
    detail: Option<String>,
}

impl SearchFailure {
    pub fn new(kind: FailureKind, user_message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            kind,
            user_message: user_message.into(),
            detail,
        }
    }

    /// A scan that ran and reported an error, with the error text as detail.
    pub fn scan_failed(user_message: &str, err: impl fmt::Display) -> Self {
        Self::new(FailureKind::ScanFailed, user_message, Some(err.to_string()))
    }

    pub fn cancelled() -> Self {
        Self::new(FailureKind::Cancelled, "Search was cancelled", None)
    }

    pub fn tool_unavailable(err: impl fmt::Display) -> Self {
        Self::new(
            FailureKind::ToolUnavailable,
            "Could not run the note search",
            Some(err.to_string()),
        )
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}
