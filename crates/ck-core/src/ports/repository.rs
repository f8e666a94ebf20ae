//! Persistence ports: one repository per aggregate.
//!
//! Each aggregate persists as one serialized record. Saves are atomic from
//! the engine's perspective: a save either fully succeeds or leaves the
//! prior durable state intact. How the repository achieves that
//! (temp-file-then-rename, a transaction) is its own business.

use anyhow::Result;
use async_trait::async_trait;

use crate::clipboard::{HistoryDocument, PinnedClipboardItem};
use crate::settings::Settings;
use crate::snippet::Snippet;

/// Rolling-history store.
///
/// The document is either plain records or a pre-encrypted blob; the engine
/// alone decides which variant it hands over, so the repository stays
/// encryption-agnostic.
#[async_trait]
pub trait HistoryRepositoryPort: Send + Sync {
    /// Load the stored document; an absent store loads as the empty
    /// plain document.
    async fn load(&self) -> Result<HistoryDocument>;

    async fn save(&self, document: &HistoryDocument) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}

#[async_trait]
pub trait PinnedRepositoryPort: Send + Sync {
    async fn load(&self) -> Result<Vec<PinnedClipboardItem>>;

    async fn save(&self, pinned: &[PinnedClipboardItem]) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}

#[async_trait]
pub trait SnippetRepositoryPort: Send + Sync {
    async fn load(&self) -> Result<Vec<Snippet>>;

    async fn save(&self, snippets: &[Snippet]) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}

#[async_trait]
pub trait SettingsRepositoryPort: Send + Sync {
    /// Load the settings record; an absent store loads as defaults.
    async fn load(&self) -> Result<Settings>;

    async fn save(&self, settings: &Settings) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}
