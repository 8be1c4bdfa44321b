//! Undo/redo and history-browse operations against a [`HistoryStore`].
//!
//! All "nothing to restore" conditions are benign `None`/empty results for the
//! host to surface as transient feedback, never errors. The caller writes the
//! returned text back into the document itself; that write must happen under
//! the session's programmatic-write guard so it is not observed as a user
//! edit.

use crate::events::{DocumentId, RestoreDirection};

use super::store::HistoryStore;

/// Pop one state in `direction` for a line and return the text to write back.
///
/// `current_text` is the line's text at the moment of the action, read fresh
/// by the caller; it lands on the opposite stack so the inverse action is
/// immediately available. Returns `None` when there is no entry or the source
/// stack is empty.
pub fn restore(
    store: &mut HistoryStore,
    doc: &DocumentId,
    line: usize,
    direction: RestoreDirection,
    current_text: &str,
) -> Option<String> {
    let Some(history) = store.line_mut(doc, line) else {
        tracing::debug!("nothing to {} at {}:{} (no history)", direction.as_str(), doc, line);
        return None;
    };

    let restored = history.restore(direction, current_text);
    if restored.is_none() {
        tracing::debug!("nothing to {} at {}:{}", direction.as_str(), doc, line);
    }
    restored
}

/// The requested stack for a line, most-recent-first. Empty when the line has
/// no entry or the stack is empty.
pub fn list_history(
    store: &HistoryStore,
    doc: &DocumentId,
    line: usize,
    direction: RestoreDirection,
) -> Vec<String> {
    store
        .line(doc, line)
        .map(|history| history.entries(direction))
        .unwrap_or_default()
}

/// Jump directly to a listed entry by its most-recent-first index.
///
/// The jump updates the snapshot and returns the text to write back but pops
/// and pushes nothing, so neither stack changes. The pre-jump text is not
/// recorded anywhere, which makes a jump itself non-undoable; `current_text`
/// is accepted so the signature will not change if that decision is revisited.
pub fn apply_entry(
    store: &mut HistoryStore,
    doc: &DocumentId,
    line: usize,
    direction: RestoreDirection,
    index: usize,
    _current_text: &str,
) -> Option<String> {
    let history = store.line_mut(doc, line)?;
    let applied = history.jump(direction, index);
    if applied.is_none() {
        tracing::debug!(
            "history entry {} out of range at {}:{}",
            index,
            doc,
            line
        );
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use RestoreDirection::{Redo, Undo};

    fn doc() -> DocumentId {
        DocumentId::new("file:///test.rs")
    }

    fn store_with_commits() -> HistoryStore {
        let mut store = HistoryStore::new();
        store.ensure_initialized(&doc(), 10, "foo");
        store.commit(&doc(), 10, "bar", 20);
        store.commit(&doc(), 10, "baz", 20);
        store
    }

    #[test]
    fn test_restore_missing_line_is_none() {
        let mut store = HistoryStore::new();
        assert!(restore(&mut store, &doc(), 3, Undo, "text").is_none());
    }

    #[test]
    fn test_undo_redo_through_store() {
        let mut store = store_with_commits();

        let undone = restore(&mut store, &doc(), 10, Undo, "baz").unwrap();
        assert_eq!(undone, "bar");

        let redone = restore(&mut store, &doc(), 10, Redo, "bar").unwrap();
        assert_eq!(redone, "baz");
    }

    #[test]
    fn test_list_history_most_recent_first() {
        let store = store_with_commits();
        assert_eq!(list_history(&store, &doc(), 10, Undo), vec!["bar", "foo"]);
        assert!(list_history(&store, &doc(), 10, Redo).is_empty());
        assert!(list_history(&store, &doc(), 99, Undo).is_empty());
    }

    #[test]
    fn test_apply_entry_is_direct_jump() {
        let mut store = store_with_commits();

        let applied = apply_entry(&mut store, &doc(), 10, Undo, 1, "baz").unwrap();
        assert_eq!(applied, "foo");

        // Neither stack changed
        let history = store.line(&doc(), 10).unwrap();
        assert_eq!(history.entries(Undo), vec!["bar", "foo"]);
        assert_eq!(history.redo_depth(), 0);
        assert_eq!(history.current_snapshot(), "foo");
    }
}
