//! Ghostline - per-line undo/redo history for text editors
//!
//! Each line of an open document accumulates its own undo/redo stacks,
//! independent of the whole-buffer undo history: editing one line never
//! consumes undo slots for another. The engine owns the per-line stacks, the
//! debounced snapshot-capture policy, and the remapping that keeps
//! line-indexed history attached to the logical line as insertions,
//! deletions, and multi-line pastes shift the document around it.
//!
//! The host editor stays in charge of its own document and commands: it feeds
//! change and cursor events in as plain data, drives pending commits with its
//! clock, and writes restored text back itself.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use ghostline::{ContentChange, DocumentId, GhostlineSession};
//!
//! let mut session = GhostlineSession::default();
//! let doc = DocumentId::new("file:///demo.rs");
//! let t0 = Instant::now();
//!
//! // Cursor lands on line 0, capturing its first observed state
//! session.on_cursor_moved(&doc, 0, "let x = 1;");
//!
//! // The user edits the line; after the quiet period the new state commits
//! session.on_text_changed(&doc, &[ContentChange::new(0, 0, "2")], t0);
//! session.flush_due(t0 + Duration::from_millis(400), |_, _| {
//!     Some("let x = 2;".to_string())
//! });
//!
//! // Undo hands back the text to write into the document
//! let restored = session.undo(&doc, 0, "let x = 2;");
//! assert_eq!(restored.as_deref(), Some("let x = 1;"));
//! ```

pub mod config;
pub mod config_paths;
pub mod events;
pub mod history;
pub mod session;
pub mod trace;

// Re-export commonly used types
pub use config::GhostlineConfig;
pub use events::{ContentChange, DocumentId, RestoreDirection};
pub use history::{HistoryStore, LineHistory, SnapshotScheduler};
pub use session::{GhostlineSession, ProgrammaticWriteGuard};
