//! Per-document line history storage and the offset-remapping algorithm.

use std::collections::HashMap;

use crate::events::{ContentChange, DocumentId};

use super::line::LineHistory;

/// Maps (document, line index) to per-line history.
///
/// Line indices are positions in the document's *current* line sequence, not
/// stable identifiers. [`remap`](Self::remap) must run before any commit
/// whenever the host reports edits, so that entries stay attached to the
/// logical line they describe rather than a stale numeric index.
///
/// The store exclusively owns every [`LineHistory`]; all access goes through
/// (document, line) lookup.
#[derive(Debug, Default)]
pub struct HistoryStore {
    docs: HashMap<DocumentId, HashMap<usize, LineHistory>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin tracking a document. Idempotent; the per-document map is also
    /// created lazily on first touch, so calling this is optional.
    pub fn open(&mut self, doc: &DocumentId) {
        self.docs.entry(doc.clone()).or_default();
        tracing::info!("history store opened for {}", doc);
    }

    /// Discard all history for a document.
    pub fn close(&mut self, doc: &DocumentId) {
        if let Some(lines) = self.docs.remove(doc) {
            tracing::info!("history store closed for {} ({} lines tracked)", doc, lines.len());
        }
    }

    /// Create an entry for a line if none exists, capturing `text` as the
    /// initial snapshot. First touch has no undo effect. Returns whether an
    /// entry was created.
    pub fn ensure_initialized(&mut self, doc: &DocumentId, line: usize, text: &str) -> bool {
        let lines = self.docs.entry(doc.clone()).or_default();
        if lines.contains_key(&line) {
            return false;
        }
        lines.insert(line, LineHistory::new(text));
        tracing::debug!("initialized history for {}:{}", doc, line);
        true
    }

    /// Commit `text` as the line's new state.
    ///
    /// A line without an entry yet gets one with `text` as its initial
    /// snapshot (no undo entry); otherwise this delegates to
    /// [`LineHistory::commit`]. Returns whether the undo stack grew.
    pub fn commit(&mut self, doc: &DocumentId, line: usize, text: &str, max_depth: usize) -> bool {
        let lines = self.docs.entry(doc.clone()).or_default();
        match lines.get_mut(&line) {
            Some(history) => {
                let pushed = history.commit(text, max_depth);
                if pushed {
                    tracing::debug!(
                        "committed {}:{} (undo depth {})",
                        doc,
                        line,
                        history.undo_depth()
                    );
                }
                pushed
            }
            None => {
                lines.insert(line, LineHistory::new(text));
                tracing::debug!("initialized history for {}:{} at commit", doc, line);
                false
            }
        }
    }

    pub fn line(&self, doc: &DocumentId, line: usize) -> Option<&LineHistory> {
        self.docs.get(doc)?.get(&line)
    }

    pub fn line_mut(&mut self, doc: &DocumentId, line: usize) -> Option<&mut LineHistory> {
        self.docs.get_mut(doc)?.get_mut(&line)
    }

    /// Number of tracked lines for a document.
    pub fn tracked_lines(&self, doc: &DocumentId) -> usize {
        self.docs.get(doc).map_or(0, |lines| lines.len())
    }

    /// Recompute every entry's line index after a batch of document edits.
    ///
    /// Each entry's fate is decided against its *original* index: the new map
    /// is built fresh and swapped in atomically, never mutated in place, so a
    /// partially shifted key can never influence another entry's outcome.
    /// Entries whose line was consumed by a merge or multi-line deletion are
    /// discarded rather than reattached to surviving lines.
    pub fn remap(&mut self, doc: &DocumentId, changes: &[ContentChange]) {
        // Pure within-line edits never perturb history placement.
        if changes.iter().all(ContentChange::is_single_line) {
            return;
        }

        let Some(lines) = self.docs.get_mut(doc) else {
            return;
        };

        let mut remapped: HashMap<usize, LineHistory> = HashMap::with_capacity(lines.len());
        let mut dropped = 0usize;

        for (old_line, history) in lines.drain() {
            match remap_line(old_line, changes) {
                Some(new_line) => {
                    remapped.insert(new_line, history);
                }
                None => dropped += 1,
            }
        }

        tracing::debug!(
            "remapped {} ({} surviving, {} dropped)",
            doc,
            remapped.len(),
            dropped
        );
        *lines = remapped;
    }
}

/// Apply a batch of changes to one line index.
///
/// For each change, in the order reported:
/// - strictly below the edited range (`old_line > end_line`): shift by the
///   change's net line delta;
/// - strictly inside the range, excluding its first line
///   (`start_line < old_line <= end_line`): the line was consumed, the entry
///   is dropped;
/// - at or above the edit's start: unaffected.
///
/// Comparisons always use the original index while the shift accumulates,
/// matching the atomic-rebuild rule in [`HistoryStore::remap`]. Returns the
/// new index, or `None` when the entry should be dropped.
pub(crate) fn remap_line(old_line: usize, changes: &[ContentChange]) -> Option<usize> {
    let mut new_line = old_line as isize;
    for change in changes {
        if old_line > change.end_line {
            new_line += change.delta();
        } else if old_line > change.start_line && old_line <= change.end_line {
            return None;
        }
    }

    // A misreported batch could shift an index negative; treat it like a
    // consumed line rather than wrapping.
    usize::try_from(new_line).ok()
}
