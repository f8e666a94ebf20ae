//! Settings updates.

use tracing::{info, warn};

use ck_core::{Result, Settings};

use super::ClipboardEngine;

impl ClipboardEngine {
    /// Validate, persist, and apply a new settings record.
    ///
    /// Validation failures surface before anything is written and leave the
    /// held settings untouched. On acceptance the record is persisted
    /// first; only then is it applied, so a storage failure also leaves the
    /// engine on its previous settings.
    ///
    /// Applying a smaller effective history limit truncates the held
    /// history immediately, on this call.
    pub async fn save_settings(&self, settings: Settings) -> Result<()> {
        settings.validate()?;

        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        self.deps.settings_repo.save(&settings).await?;

        let rich_text_changed =
            state.settings.capture.capture_rich_text != settings.capture.capture_rich_text;

        state.settings = settings;

        let limit = state.settings.effective_history_limit();
        let truncated = state.history.len() > limit;
        if truncated {
            state.history.truncate(limit);
            state.prune_selection();
        }

        // History is re-persisted even without truncation: the encryption
        // toggle may have flipped, and the stored document must follow it.
        self.commit(&mut state, true);

        if rich_text_changed && state.monitor_running {
            let capture_rich_text = state.settings.capture.capture_rich_text;
            if let Err(e) = self
                .deps
                .monitor
                .update_capture_rich_text(capture_rich_text)
                .await
            {
                warn!(error = %format!("{e:#}"), "failed to propagate rich-text setting to monitor");
            }
        }

        info!(truncated, "settings saved");
        Ok(())
    }
}
