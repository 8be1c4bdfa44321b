//! Plain-data event types reported by the host editor.
//!
//! The engine never talks to an editor directly; the host observes its own
//! document and feeds these values into a [`crate::session::GhostlineSession`].

use std::fmt;

/// Identifies an open document, typically its URI or path rendered as a string.
///
/// Line history is scoped per document; the engine never interprets the
/// contents of the identifier beyond equality and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single reported edit: the line range that was replaced and the text that
/// replaced it.
///
/// `start_line` is the line holding the start of the replaced range and
/// `end_line` the line holding its end; a pure within-line edit has
/// `start_line == end_line` and no line breaks in `text`. The number of
/// inserted lines is derived by counting `\n` in `text`, never reported
/// separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange {
    /// Line containing the start of the replaced range.
    pub start_line: usize,
    /// Line containing the end of the replaced range.
    pub end_line: usize,
    /// Newly inserted text (may be empty for pure deletions).
    pub text: String,
}

impl ContentChange {
    pub fn new(start_line: usize, end_line: usize, text: impl Into<String>) -> Self {
        Self {
            start_line,
            end_line,
            text: text.into(),
        }
    }

    /// Number of line breaks in the inserted text.
    pub fn inserted_lines(&self) -> usize {
        self.text.matches('\n').count()
    }

    /// Number of lines the replaced range spanned beyond its first line.
    pub fn removed_lines(&self) -> usize {
        self.end_line - self.start_line
    }

    /// Net line-count change of this edit.
    pub fn delta(&self) -> isize {
        self.inserted_lines() as isize - self.removed_lines() as isize
    }

    /// True when this edit stays on one line and inserts no line breaks.
    /// Such edits never shift or drop history entries.
    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line && self.inserted_lines() == 0
    }
}

/// Which stack a restore or history listing draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreDirection {
    Undo,
    Redo,
}

impl RestoreDirection {
    /// The stack the inverse action draws from.
    pub fn opposite(self) -> Self {
        match self {
            RestoreDirection::Undo => RestoreDirection::Redo,
            RestoreDirection::Redo => RestoreDirection::Undo,
        }
    }

    /// Lowercase name for log and status messages.
    pub fn as_str(self) -> &'static str {
        match self {
            RestoreDirection::Undo => "undo",
            RestoreDirection::Redo => "redo",
        }
    }
}
