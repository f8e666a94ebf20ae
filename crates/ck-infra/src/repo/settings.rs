//! Settings store.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use log::warn;

use ck_core::ports::SettingsRepositoryPort;
use ck_core::settings::CURRENT_SCHEMA_VERSION;
use ck_core::Settings;

use super::document::{load_json, remove_if_exists, save_json_atomic};

pub struct SettingsFileRepository {
    path: PathBuf,
}

impl SettingsFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsRepositoryPort for SettingsFileRepository {
    /// Load the settings record, filling defaults for a missing file.
    ///
    /// A record written by an older build (missing sections, older schema
    /// version) deserializes with defaults filled in and is re-persisted in
    /// the current shape.
    async fn load(&self) -> Result<Settings> {
        let Some(mut settings) = load_json::<Settings>(&self.path).await? else {
            return Ok(Settings::default());
        };

        if settings.schema_version < CURRENT_SCHEMA_VERSION {
            warn!(
                "settings schema {} is older than {}; upgrading in place",
                settings.schema_version, CURRENT_SCHEMA_VERSION
            );
            settings.schema_version = CURRENT_SCHEMA_VERSION;
            self.save(&settings).await?;
        }

        Ok(settings)
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        save_json_atomic(&self.path, settings).await
    }

    async fn clear(&self) -> Result<()> {
        remove_if_exists(&self.path).await
    }
}
