//! Rolling-history store.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use ck_core::ports::HistoryRepositoryPort;
use ck_core::HistoryDocument;

use super::document::{load_json, remove_if_exists, save_json_atomic};

/// Stores the history aggregate as one JSON document. The document may be
/// plain records or a pre-encrypted blob; this repository does not care
/// which; the engine decides.
pub struct HistoryFileRepository {
    path: PathBuf,
}

impl HistoryFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl HistoryRepositoryPort for HistoryFileRepository {
    async fn load(&self) -> Result<HistoryDocument> {
        Ok(load_json(&self.path)
            .await?
            .unwrap_or_else(HistoryDocument::empty))
    }

    async fn save(&self, document: &HistoryDocument) -> Result<()> {
        save_json_atomic(&self.path, document).await
    }

    async fn clear(&self) -> Result<()> {
        remove_if_exists(&self.path).await
    }
}
