//! Key-file management.
//!
//! The history key is 32 random bytes stored next to the data documents,
//! created on first use.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use rand::RngCore;
use tokio::fs;

pub struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the key, generating and persisting a fresh one when the file
    /// does not exist yet.
    pub async fn load_or_create(&self) -> Result<[u8; 32]> {
        match fs::read(&self.path).await {
            Ok(bytes) => {
                if bytes.len() != 32 {
                    bail!(
                        "key file {} has {} bytes, expected 32",
                        self.path.display(),
                        bytes.len()
                    );
                }
                let mut key = [0u8; 32];
                key.copy_from_slice(&bytes);
                Ok(key)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => self.create().await,
            Err(e) => {
                Err(e).with_context(|| format!("read key file failed: {}", self.path.display()))
            }
        }
    }

    async fn create(&self) -> Result<[u8; 32]> {
        let mut key = [0u8; 32];
        rand::rng().fill_bytes(&mut key);

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create key dir failed: {}", dir.display()))?;
        }

        let tmp_path = self.path.with_extension("key.tmp");
        fs::write(&tmp_path, key)
            .await
            .with_context(|| format!("write key file failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .await
            .with_context(|| format!("rename key file failed: {}", self.path.display()))?;

        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_then_reloads_same_key() {
        let dir = tempfile::tempdir().unwrap();
        let key_file = KeyFile::new(dir.path().join("history.key"));

        let first = key_file.load_or_create().await.unwrap();
        let second = key_file.load_or_create().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn rejects_wrong_length_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.key");
        std::fs::write(&path, [0u8; 16]).unwrap();

        let key_file = KeyFile::new(path);
        assert!(key_file.load_or_create().await.is_err());
    }
}
