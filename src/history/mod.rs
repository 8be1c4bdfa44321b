//! The history-tracking engine.
//!
//! The core components are:
//!
//! - [`LineHistory`]: per-line undo/redo stacks plus the current snapshot
//! - [`HistoryStore`]: per-document (line index -> history) maps and the
//!   offset-remapping algorithm that keeps entries attached to logical lines
//!   as the document's line count changes
//! - [`SnapshotScheduler`]: per-(document, line) debounce deadlines deciding
//!   when an edited line's state is committed
//! - [`restore`]: undo/redo and history-browse operations
//!
//! These are deliberately host-agnostic; [`crate::session::GhostlineSession`]
//! wires them to the event intake and configuration.

mod line;
pub mod restore;
mod snapshot;
mod store;

pub use line::LineHistory;
pub use snapshot::SnapshotScheduler;
pub use store::HistoryStore;

pub(crate) use store::remap_line;
