//! Clipboard domain model.
//!
//! One capture produces one immutable [`ClipboardItem`]; pinning snapshots
//! an item into a [`PinnedClipboardItem`] that survives rolling-history
//! eviction. [`HistoryDocument`] is the durable shape of the history
//! aggregate.

pub mod classify;
mod item;
mod pinned;
mod store;

pub use classify::classify_text;
pub use item::{ClipboardItem, ClipboardKind, ClipboardPayload, TextKind};
pub use pinned::PinnedClipboardItem;
pub use store::HistoryDocument;
