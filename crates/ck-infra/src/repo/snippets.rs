//! Snippet store.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use ck_core::ports::SnippetRepositoryPort;
use ck_core::Snippet;

use super::document::{load_json, remove_if_exists, save_json_atomic};

pub struct SnippetFileRepository {
    path: PathBuf,
}

impl SnippetFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnippetRepositoryPort for SnippetFileRepository {
    async fn load(&self) -> Result<Vec<Snippet>> {
        Ok(load_json(&self.path).await?.unwrap_or_default())
    }

    async fn save(&self, snippets: &[Snippet]) -> Result<()> {
        save_json_atomic(&self.path, &snippets).await
    }

    async fn clear(&self) -> Result<()> {
        remove_if_exists(&self.path).await
    }
}
