//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use ghostline::{ContentChange, DocumentId, GhostlineConfig, GhostlineSession};
use ropey::Rope;

/// Default debounce used by the test sessions, matching the engine default.
pub const IDLE: Duration = Duration::from_millis(400);

pub fn doc_id() -> DocumentId {
    DocumentId::new("file:///test.rs")
}

/// Session with the default config (depth 20, 400ms idle delay).
pub fn test_session() -> GhostlineSession {
    GhostlineSession::default()
}

/// Session with a specific depth limit and idle delay.
pub fn session_with(max_history_per_line: usize, idle_delay_ms: i64) -> GhostlineSession {
    GhostlineSession::new(GhostlineConfig {
        max_history_per_line,
        idle_delay_ms,
        ..GhostlineConfig::default()
    })
}

/// In-memory document the tests edit like a host editor would.
///
/// Edits mutate the rope *and* return the `ContentChange` the host's change
/// listener would report, so tests feed the session exactly what a real
/// editor does. Host line ranges follow the usual editor convention: the
/// change's end line is the line holding the end of the replaced range.
pub struct MockDocument {
    buffer: Rope,
}

impl MockDocument {
    pub fn new(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
        }
    }

    /// Build a document of numbered lines: "line 0" .. "line {n-1}".
    pub fn numbered(n: usize) -> Self {
        let text: String = (0..n).map(|i| format!("line {}\n", i)).collect();
        Self::new(&text)
    }

    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Line content without its trailing newline, `None` when out of range.
    /// The bounds check mirrors the host's skip-stale-events rule.
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx >= self.buffer.len_lines() {
            return None;
        }
        let line = self.buffer.line(idx).to_string();
        Some(line.strip_suffix('\n').unwrap_or(&line).to_string())
    }

    /// Replace a line's content in place (the write-back path for restores).
    pub fn set_line(&mut self, idx: usize, text: &str) {
        let start = self.buffer.line_to_char(idx);
        let end = start + self.line(idx).expect("line in range").chars().count();
        self.buffer.remove(start..end);
        self.buffer.insert(start, text);
    }

    /// Edit within a single line: replace its whole content with `text`.
    /// Returns the change the host would report (no line breaks involved).
    pub fn edit_line(&mut self, idx: usize, text: &str) -> ContentChange {
        self.set_line(idx, text);
        ContentChange::new(idx, idx, text)
    }

    /// Insert `lines` as new lines directly below `after`, the way an editor
    /// reports pressing Enter at the end of a line or pasting below it: a
    /// newline-led insertion anchored on `after` itself.
    pub fn insert_lines_after(&mut self, after: usize, lines: &[&str]) -> ContentChange {
        let mut inserted = String::new();
        for line in lines {
            inserted.push('\n');
            inserted.push_str(line);
        }

        let at = self.buffer.line_to_char(after)
            + self.line(after).expect("line in range").chars().count();
        self.buffer.insert(at, &inserted);

        ContentChange::new(after, after, inserted)
    }

    /// Replace the inclusive line range `start..=end` with `text` (which may
    /// contain line breaks). The replaced span runs from the start of `start`
    /// to the end of `end`, leaving `end`'s newline in place, so the host
    /// reports `end` as the change's end line.
    pub fn splice_lines(&mut self, start: usize, end: usize, text: &str) -> ContentChange {
        let from = self.buffer.line_to_char(start);
        let to =
            self.buffer.line_to_char(end) + self.line(end).expect("line in range").chars().count();
        self.buffer.remove(from..to);
        self.buffer.insert(from, text);

        ContentChange::new(start, end, text)
    }

    pub fn to_string(&self) -> String {
        self.buffer.to_string()
    }
}

/// Report an edit to the session and flush it after the idle delay, reading
/// line text fresh from the document like a host timer callback would.
pub fn edit_and_flush(
    session: &mut GhostlineSession,
    doc: &mut MockDocument,
    id: &DocumentId,
    change: ContentChange,
    now: Instant,
) {
    session.on_text_changed(id, &[change], now);
    flush(session, doc, now + IDLE);
}

/// Drive every due commit at `now`, reading text from the document.
pub fn flush(session: &mut GhostlineSession, doc: &MockDocument, now: Instant) -> usize {
    session.flush_due(now, |_, line| doc.line(line))
}

/// Write restored text back into the document under the programmatic-write
/// guard, echoing the change event the host's listener would observe.
pub fn write_back(
    session: &mut GhostlineSession,
    doc: &mut MockDocument,
    id: &DocumentId,
    line: usize,
    text: &str,
    now: Instant,
) {
    let guard = session.suppress_events();
    let change = doc.edit_line(line, text);
    session.on_text_changed(id, &[change], now);
    drop(guard);
}
