//! Unified typed error for all fallible engine operations.
//!
//! Variants fall into three bands:
//!
//! - domain-invariant violations (limits, duplicates, not-found, validation)
//! - application-workflow failures (initialization, monitor lifecycle)
//! - infrastructure failures (storage I/O, serialization, encryption)
//!
//! Engine operations never panic across the component boundary; every
//! failure is one of these codes so the presentation layer can render a
//! precise message.

use crate::ids::{ItemId, SnippetId};
use crate::security::EncryptionError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    // === Domain invariants ===
    /// An image payload exceeded the configured maximum persisted size.
    #[error("image payload of {size} bytes exceeds the configured maximum of {max} bytes")]
    ClipboardImageTooLarge { size: usize, max: usize },

    /// Lookup by id failed in both the rolling history and the pinned list.
    #[error("clipboard item {0} not found")]
    ClipboardHistoryItemNotFound(ItemId),

    /// The pinned list is at its hard cap; pins are never silently evicted.
    #[error("pinned item limit of {0} reached")]
    PinnedItemsLimitExceeded(usize),

    #[error("no pinned item matches clipboard item {0}")]
    PinnedItemNotFound(ItemId),

    /// A content-equivalent pin already exists.
    #[error("clipboard item {0} is already pinned")]
    PinnedItemDuplicate(ItemId),

    #[error("snippet {0} not found")]
    SnippetNotFound(SnippetId),

    #[error("settings value out of range: {0}")]
    SettingsRangeInvalid(String),

    #[error("settings shortcut is not well-formed: {0:?}")]
    SettingsShortcutInvalid(String),

    /// A persisted or imported payload could not be understood (malformed
    /// bytes or an unrecognized version). Nothing is partially applied.
    #[error("data format invalid: {0}")]
    DataFormatInvalid(String),

    // === Application workflow ===
    #[error("engine state failed to initialize: {0}")]
    StateInitializationFailed(String),

    #[error("clipboard monitor failed to start: {0}")]
    MonitorStartFailed(String),

    #[error("clipboard monitor failed to stop: {0}")]
    MonitorStopFailed(String),

    // === Infrastructure ===
    #[error("storage failure: {0}")]
    Storage(String),

    #[error("serialization failure: {0}")]
    Serialization(String),

    #[error("encryption failure: {0}")]
    Encryption(#[from] EncryptionError),
}

/// Convert port-boundary failures into the infrastructure band.
///
/// The alternate format preserves the anyhow context chain.
impl From<anyhow::Error> for EngineError {
    fn from(err: anyhow::Error) -> Self {
        EngineError::Storage(format!("{err:#}"))
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

/// Result alias used by every fallible engine operation.
pub type Result<T> = std::result::Result<T, EngineError>;
