//! Terminal-related data types for output rendering.

use chrono::{DateTime, Local};

use super::EntryKind;

/// Text styling applied by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Unstyled output
    Plain,
    /// Directory entries (blue)
    Directory,
    /// File entries and success messages (green)
    Green,
    /// Warnings (yellow)
    Yellow,
    /// Errors (red)
    Red,
    /// Headers and hints (cyan)
    Cyan,
}

/// A single line of output produced by a command.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLine {
    /// Plain text output, printed verbatim
    Text(String),
    /// Error message (red)
    Error(String),
    /// Success message (green)
    Success(String),
    /// Warning message (yellow)
    Warning(String),
    /// Usage hint (cyan)
    Hint(String),
    /// Column header above a listing
    ListHeader(String),
    /// Directory listing row
    ListEntry {
        name: String,
        kind: EntryKind,
        created_at: Option<DateTime<Local>>,
    },
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::Error(s.into())
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::Success(s.into())
    }

    pub fn warning(s: impl Into<String>) -> Self {
        Self::Warning(s.into())
    }

    pub fn hint(s: impl Into<String>) -> Self {
        Self::Hint(s.into())
    }

    /// Create a listing row from a directory entry.
    pub fn entry(entry: &super::DirEntry) -> Self {
        Self::ListEntry {
            name: entry.name.clone(),
            kind: entry.kind,
            created_at: entry.created_at,
        }
    }

    /// Style the renderer should apply to this line.
    pub fn style(&self) -> TextStyle {
        match self {
            Self::Text(_) => TextStyle::Plain,
            Self::Error(_) => TextStyle::Red,
            Self::Success(_) => TextStyle::Green,
            Self::Warning(_) => TextStyle::Yellow,
            Self::Hint(_) | Self::ListHeader(_) => TextStyle::Cyan,
            Self::ListEntry { kind, .. } => match kind {
                EntryKind::Directory => TextStyle::Directory,
                _ => TextStyle::Green,
            },
        }
    }
}
