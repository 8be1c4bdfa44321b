//! Per-line undo/redo stacks.

use crate::events::RestoreDirection;

/// Undo/redo history for a single line of text.
///
/// `current_snapshot` is the line's last committed text, the baseline the next
/// commit is compared against. It never appears in either stack except at the
/// moment a commit pushes it onto the undo stack.
#[derive(Debug, Clone)]
pub struct LineHistory {
    /// Prior committed states, most-recent last. Bounded; oldest evicted first.
    undo_stack: Vec<String>,
    /// States undone away from, most-recent last. Cleared on divergent commit.
    redo_stack: Vec<String>,
    /// Last committed text of the line.
    current_snapshot: String,
}

impl LineHistory {
    /// Create history for a freshly observed line. No undo effect: the first
    /// observed state only becomes an undo entry once a later commit replaces it.
    pub fn new(snapshot: impl Into<String>) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            current_snapshot: snapshot.into(),
        }
    }

    pub fn current_snapshot(&self) -> &str {
        &self.current_snapshot
    }

    /// Commit a new state for the line.
    ///
    /// Pushes the previous snapshot onto the undo stack, trims the stack to
    /// `max_depth` by dropping the oldest entries, clears the redo stack
    /// (branch invalidation), and advances the snapshot. Committing text equal
    /// to the current snapshot is a no-op, so repeated commits never grow the
    /// stack. Returns whether anything changed.
    pub fn commit(&mut self, text: &str, max_depth: usize) -> bool {
        if self.current_snapshot == text {
            return false;
        }

        let previous = std::mem::replace(&mut self.current_snapshot, text.to_string());
        self.undo_stack.push(previous);

        while self.undo_stack.len() > max_depth {
            self.undo_stack.remove(0);
        }

        self.redo_stack.clear();
        true
    }

    /// Pop one state off the source stack and make it current.
    ///
    /// `current_text` (the line's text at the moment of the action, read fresh
    /// by the caller) is pushed onto the opposite stack first, so the inverse
    /// action is immediately available. Returns the text to write back, or
    /// `None` when the source stack is empty.
    pub fn restore(&mut self, direction: RestoreDirection, current_text: &str) -> Option<String> {
        let (source, target) = match direction {
            RestoreDirection::Undo => (&mut self.undo_stack, &mut self.redo_stack),
            RestoreDirection::Redo => (&mut self.redo_stack, &mut self.undo_stack),
        };

        let restored = source.pop()?;
        target.push(current_text.to_string());
        self.current_snapshot = restored.clone();
        Some(restored)
    }

    /// The requested stack's entries, most-recent-first.
    pub fn entries(&self, direction: RestoreDirection) -> Vec<String> {
        let stack = match direction {
            RestoreDirection::Undo => &self.undo_stack,
            RestoreDirection::Redo => &self.redo_stack,
        };
        stack.iter().rev().cloned().collect()
    }

    /// Jump directly to an entry by its most-recent-first index.
    ///
    /// Unlike [`restore`](Self::restore), a jump pops and pushes nothing:
    /// both stacks keep their contents, only the snapshot advances. Returns
    /// the text to write back, or `None` if the index is out of range.
    pub fn jump(&mut self, direction: RestoreDirection, index: usize) -> Option<String> {
        let stack = match direction {
            RestoreDirection::Undo => &self.undo_stack,
            RestoreDirection::Redo => &self.redo_stack,
        };
        let entry = stack.iter().rev().nth(index)?.clone();
        self.current_snapshot = entry.clone();
        Some(entry)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
