//! Application data directory resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APP_DIR_NAME: &str = "clipkeep";

/// Resolves where the durable documents live.
#[derive(Debug, Clone)]
pub struct AppDirs {
    data_dir: PathBuf,
}

impl AppDirs {
    /// Per-user data directory, e.g. `~/.local/share/clipkeep` on Linux.
    pub fn resolve() -> Result<Self> {
        let base = dirs::data_dir().context("no data directory available on this platform")?;
        Ok(Self {
            data_dir: base.join(APP_DIR_NAME),
        })
    }

    /// Root everything under an explicit directory (tests, portable mode).
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: root.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn history_file(&self) -> PathBuf {
        self.data_dir.join("history.json")
    }

    pub fn pinned_file(&self) -> PathBuf {
        self.data_dir.join("pinned.json")
    }

    pub fn snippets_file(&self) -> PathBuf {
        self.data_dir.join("snippets.json")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    pub fn key_file(&self) -> PathBuf {
        self.data_dir.join("history.key")
    }
}
