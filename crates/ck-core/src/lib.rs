//! # ck-core
//!
//! Core domain models and ports for ClipKeep.
//!
//! This crate contains pure domain logic without any infrastructure
//! dependencies: the clipboard item model, pinned items, settings,
//! snippets, the backup payload, typed errors, and the port traits the
//! engine talks through.

// Public module exports
pub mod backup;
pub mod clipboard;
pub mod error;
pub mod ids;
pub mod ports;
pub mod security;
pub mod settings;
pub mod snippet;

// Re-export commonly used types at the crate root
pub use backup::{BackupPayload, CURRENT_BACKUP_VERSION};
pub use clipboard::{
    ClipboardItem, ClipboardKind, ClipboardPayload, HistoryDocument, PinnedClipboardItem, TextKind,
};
pub use error::{EngineError, Result};
pub use ids::{ItemId, PinId, SnippetId};
pub use security::{EncryptedBlob, EncryptionError};
pub use settings::Settings;
pub use snippet::Snippet;
