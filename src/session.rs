//! Host-facing session: event intake, debounce driving, and restore commands.
//!
//! A [`GhostlineSession`] owns one [`HistoryStore`] and one
//! [`SnapshotScheduler`] and is the only type a host embeds. Everything is
//! single-threaded and event-driven: each call runs to completion before the
//! next, so no locking exists anywhere in the engine.
//!
//! # Programmatic writes
//!
//! Undo/redo/jump return replacement text; the host writes it into its own
//! document. That write will echo back through the host's change listener, and
//! observing it as a user edit would commit restored text as if freshly
//! typed. Hold the guard from [`GhostlineSession::suppress_events`] around
//! every programmatic write; while any guard is alive, event intake is a
//! no-op. Guards are counted, so nesting cannot desynchronize the state, and
//! release happens on drop along every exit path.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::config::GhostlineConfig;
use crate::events::{ContentChange, DocumentId, RestoreDirection};
use crate::history::{remap_line, restore, HistoryStore, SnapshotScheduler};

/// Per-line history engine for one editing session.
pub struct GhostlineSession {
    config: GhostlineConfig,
    store: HistoryStore,
    scheduler: SnapshotScheduler,
    /// Depth of live programmatic-write guards.
    suppressed: Rc<Cell<u32>>,
}

/// RAII guard suppressing event intake for the duration of a programmatic
/// write. Dropping the guard resumes intake once the outermost guard is gone.
#[must_use = "event intake resumes as soon as the guard is dropped"]
pub struct ProgrammaticWriteGuard {
    depth: Rc<Cell<u32>>,
}

impl Drop for ProgrammaticWriteGuard {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

impl GhostlineSession {
    pub fn new(config: GhostlineConfig) -> Self {
        tracing::info!(
            "ghostline session started (max depth {}, idle delay {}ms)",
            config.max_history_per_line,
            config.idle_delay_ms
        );
        Self {
            config,
            store: HistoryStore::new(),
            scheduler: SnapshotScheduler::new(),
            suppressed: Rc::new(Cell::new(0)),
        }
    }

    pub fn config(&self) -> &GhostlineConfig {
        &self.config
    }

    /// Begin tracking a document.
    pub fn open_document(&mut self, doc: &DocumentId) {
        self.store.open(doc);
    }

    /// Discard all history and pending commits for a document.
    pub fn close_document(&mut self, doc: &DocumentId) {
        self.scheduler.cancel_document(doc);
        self.store.close(doc);
    }

    /// Suspend event intake for a programmatic write-back.
    pub fn suppress_events(&self) -> ProgrammaticWriteGuard {
        self.suppressed.set(self.suppressed.get() + 1);
        ProgrammaticWriteGuard {
            depth: Rc::clone(&self.suppressed),
        }
    }

    fn events_suspended(&self) -> bool {
        self.suppressed.get() > 0
    }

    /// Intake for document-change events.
    ///
    /// Remaps existing history and pending deadlines for the reported batch,
    /// then schedules a debounced commit for each change's start line. The
    /// committed text is read later, at flush time, so it reflects the line's
    /// state after the quiet period rather than mid-burst.
    pub fn on_text_changed(&mut self, doc: &DocumentId, changes: &[ContentChange], now: Instant) {
        if self.events_suspended() || changes.is_empty() {
            return;
        }

        self.store.remap(doc, changes);
        self.scheduler.remap(doc, changes);

        let Some(delay) = self.config.idle_delay() else {
            // Capture disabled: edits still remap, they just never commit.
            return;
        };

        for (i, change) in changes.iter().enumerate() {
            // Later changes in the same batch can shift or consume this
            // change's start line; schedule against where it ended up.
            match remap_line(change.start_line, &changes[i + 1..]) {
                Some(line) => self.scheduler.schedule(doc, line, now + delay),
                None => tracing::debug!(
                    "not scheduling {}:{}, line consumed later in batch",
                    doc,
                    change.start_line
                ),
            }
        }
    }

    /// Intake for cursor/selection moves: capture the first observed state of
    /// the active line. No undo effect, and no-op for already-tracked lines.
    pub fn on_cursor_moved(&mut self, doc: &DocumentId, line: usize, text: &str) {
        if self.events_suspended() {
            return;
        }
        self.store.ensure_initialized(doc, line, text);
    }

    /// Commit every line whose debounce deadline has passed.
    ///
    /// Text is read fresh through `read_line`, keyed by the then-current line
    /// index; returning `None` (stale or out-of-range index) skips that commit
    /// silently. Returns the number of lines whose undo stack grew.
    pub fn flush_due<F>(&mut self, now: Instant, mut read_line: F) -> usize
    where
        F: FnMut(&DocumentId, usize) -> Option<String>,
    {
        let mut committed = 0;
        for (doc, line) in self.scheduler.take_due(now) {
            match read_line(&doc, line) {
                Some(text) => {
                    if self
                        .store
                        .commit(&doc, line, &text, self.config.max_history_per_line)
                    {
                        committed += 1;
                    }
                }
                None => {
                    tracing::debug!("skipping commit for stale line {}:{}", doc, line);
                }
            }
        }
        committed
    }

    /// Earliest pending commit deadline, for the host to plan its next wakeup.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Undo one step on a line. Returns the replacement text to write back,
    /// or `None` when there is nothing to undo.
    pub fn undo(&mut self, doc: &DocumentId, line: usize, current_text: &str) -> Option<String> {
        self.restore(doc, line, RestoreDirection::Undo, current_text)
    }

    /// Redo one step on a line. Returns the replacement text to write back,
    /// or `None` when there is nothing to redo.
    pub fn redo(&mut self, doc: &DocumentId, line: usize, current_text: &str) -> Option<String> {
        self.restore(doc, line, RestoreDirection::Redo, current_text)
    }

    fn restore(
        &mut self,
        doc: &DocumentId,
        line: usize,
        direction: RestoreDirection,
        current_text: &str,
    ) -> Option<String> {
        if !self.shortcuts_enabled(direction.as_str()) {
            return None;
        }

        let restored = restore::restore(&mut self.store, doc, line, direction, current_text);
        if restored.is_some() {
            // The restore already advanced the snapshot; a still-pending
            // debounce for this line has nothing left to say.
            self.scheduler.cancel(doc, line);
        }
        restored
    }

    /// The requested stack for a line, most-recent-first.
    pub fn list_history(
        &self,
        doc: &DocumentId,
        line: usize,
        direction: RestoreDirection,
    ) -> Vec<String> {
        if !self.shortcuts_enabled("list history") {
            return Vec::new();
        }
        restore::list_history(&self.store, doc, line, direction)
    }

    /// Jump directly to a listed entry by its most-recent-first index.
    /// Returns the text to write back; neither stack is altered.
    pub fn apply_history_entry(
        &mut self,
        doc: &DocumentId,
        line: usize,
        direction: RestoreDirection,
        index: usize,
        current_text: &str,
    ) -> Option<String> {
        if !self.shortcuts_enabled("apply history entry") {
            return None;
        }

        let applied =
            restore::apply_entry(&mut self.store, doc, line, direction, index, current_text);
        if applied.is_some() {
            self.scheduler.cancel(doc, line);
        }
        applied
    }

    /// Last committed text for a line, if it is tracked.
    pub fn current_snapshot(&self, doc: &DocumentId, line: usize) -> Option<&str> {
        self.store.line(doc, line).map(|h| h.current_snapshot())
    }

    fn shortcuts_enabled(&self, action: &str) -> bool {
        if !self.config.enable_shortcuts {
            tracing::debug!("{} ignored, shortcuts disabled", action);
            return false;
        }
        true
    }
}

impl Default for GhostlineSession {
    fn default() -> Self {
        Self::new(GhostlineConfig::default())
    }
}
