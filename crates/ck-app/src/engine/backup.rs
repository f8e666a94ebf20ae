//! Backup export and import.

use tracing::info;

use ck_core::backup::BackupError;
use ck_core::{BackupPayload, EngineError, Result};

use super::flush::build_history_document;
use super::ClipboardEngine;

impl ClipboardEngine {
    /// Snapshot-serialize the current history and pinned lists into a
    /// versioned payload.
    pub async fn export_backup(&self) -> Result<Vec<u8>> {
        let payload = {
            let state = self.lock_state().await;
            self.ensure_initialized(&state)?;
            BackupPayload::new(
                self.clock_now(),
                state.history.clone(),
                state.pinned.clone(),
            )
        };
        Ok(payload.to_bytes()?)
    }

    /// Parse, validate, and apply a backup payload.
    ///
    /// Validation happens before anything is touched: a malformed payload
    /// or an unrecognized version fails whole with `DataFormatInvalid` and
    /// leaves both the in-memory and durable state exactly as they were.
    /// On acceptance, both stores are written before the in-memory lists
    /// are replaced.
    pub async fn import_backup(&self, bytes: &[u8]) -> Result<()> {
        let payload = BackupPayload::from_bytes(bytes).map_err(|e| match e {
            BackupError::Malformed(msg) => EngineError::DataFormatInvalid(msg),
            BackupError::UnsupportedVersion(v) => {
                EngineError::DataFormatInvalid(format!("unsupported backup version {v}"))
            }
        })?;

        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        let mut history = payload.history;
        history.truncate(state.settings.effective_history_limit());
        let pinned = payload.pinned;

        let document = build_history_document(
            &history,
            state.settings.security.encrypt_history,
            &self.deps.encryption,
        )
        .await?;
        self.deps.history_repo.save(&document).await?;
        self.deps.pinned_repo.save(&pinned).await?;

        state.history = history;
        state.pinned = pinned;
        state.selected = None;
        self.commit(&mut state, false);
        info!(
            history = state.history.len(),
            pinned = state.pinned.len(),
            "backup imported"
        );
        Ok(())
    }
}
