//! Durable shape of the history aggregate.

use serde::{Deserialize, Serialize};

use crate::security::EncryptedBlob;

use super::item::ClipboardItem;

/// What the history repository stores.
///
/// The engine alone decides which variant to write (mirroring the
/// encrypt-history setting); the repository is encryption-agnostic and
/// stores whichever document it is handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "storage", rename_all = "snake_case")]
pub enum HistoryDocument {
    Plain { items: Vec<ClipboardItem> },
    Encrypted { blob: EncryptedBlob },
}

impl HistoryDocument {
    pub fn empty() -> Self {
        HistoryDocument::Plain { items: Vec::new() }
    }
}
