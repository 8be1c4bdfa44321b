//! Debounced snapshot scheduling.
//!
//! Commits are not taken on every keystroke: each edited line gets a deadline
//! `idle_delay` in the future, and only lines still untouched when their
//! deadline passes are committed. Deadlines are keyed per (document, line) so
//! a burst of edits on one line cannot starve a pending commit on another.
//!
//! The engine never sleeps or spawns; the host owns the clock, passes `now`
//! in, and drives expiry through [`SnapshotScheduler::take_due`].

use std::collections::HashMap;
use std::time::Instant;

use crate::events::{ContentChange, DocumentId};

use super::store::remap_line;

/// Pending commit deadlines, one per touched (document, line).
#[derive(Debug, Default)]
pub struct SnapshotScheduler {
    pending: HashMap<(DocumentId, usize), Instant>,
}

impl SnapshotScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule (or reschedule) a commit for a line. Rescheduling replaces the
    /// previous deadline outright; that replacement is the cancellation
    /// mechanism, so only the last edit in a burst ever commits.
    pub fn schedule(&mut self, doc: &DocumentId, line: usize, deadline: Instant) {
        self.pending.insert((doc.clone(), line), deadline);
    }

    /// Drop a single pending deadline, if any.
    pub fn cancel(&mut self, doc: &DocumentId, line: usize) {
        self.pending.remove(&(doc.clone(), line));
    }

    /// Drop every pending deadline for a document.
    pub fn cancel_document(&mut self, doc: &DocumentId) {
        self.pending.retain(|(d, _), _| d != doc);
    }

    /// Shift pending keys by the same rules history entries follow, so a
    /// deadline that fires after intervening edits commits against the
    /// then-current line index. Deadlines for consumed lines are dropped.
    pub fn remap(&mut self, doc: &DocumentId, changes: &[ContentChange]) {
        if changes.iter().all(ContentChange::is_single_line) {
            return;
        }

        let mut remapped = HashMap::with_capacity(self.pending.len());
        for ((d, line), deadline) in self.pending.drain() {
            if &d != doc {
                remapped.insert((d, line), deadline);
                continue;
            }
            if let Some(new_line) = remap_line(line, changes) {
                remapped.insert((d, new_line), deadline);
            }
        }
        self.pending = remapped;
    }

    /// Remove and return every key whose deadline has passed, ordered by
    /// document then line for deterministic commit order.
    pub fn take_due(&mut self, now: Instant) -> Vec<(DocumentId, usize)> {
        let mut due: Vec<(DocumentId, usize)> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(key, _)| key.clone())
            .collect();

        for key in &due {
            self.pending.remove(key);
        }

        due.sort();
        due
    }

    /// Earliest pending deadline, for the host to plan its next wakeup.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
