//! Pinned-items store.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use ck_core::ports::PinnedRepositoryPort;
use ck_core::PinnedClipboardItem;

use super::document::{load_json, remove_if_exists, save_json_atomic};

pub struct PinnedFileRepository {
    path: PathBuf,
}

impl PinnedFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PinnedRepositoryPort for PinnedFileRepository {
    async fn load(&self) -> Result<Vec<PinnedClipboardItem>> {
        Ok(load_json(&self.path).await?.unwrap_or_default())
    }

    async fn save(&self, pinned: &[PinnedClipboardItem]) -> Result<()> {
        save_json_atomic(&self.path, &pinned).await
    }

    async fn clear(&self) -> Result<()> {
        remove_if_exists(&self.path).await
    }
}
