//! Engine lifecycle: initialization and the monitor runtime.

use std::sync::{Arc, Weak};

use async_trait::async_trait;
use tracing::{info, warn};

use ck_core::ports::{CaptureDisposition, CaptureSink};
use ck_core::{ClipboardItem, EngineError, HistoryDocument, Result};

use super::ClipboardEngine;

impl ClipboardEngine {
    /// Load durable state into memory.
    ///
    /// Load order follows the dependency chain: settings first (the
    /// effective history limit must be known before the history is
    /// trimmed), then history (decrypted when stored encrypted), then
    /// pinned items, then snippets.
    ///
    /// Settings or history failures are unrecoverable and surface as
    /// `StateInitializationFailed`. A failed pinned or snippet load
    /// degrades instead: the engine starts with that list empty and
    /// retains a warning (see `init_warnings`).
    ///
    /// Idempotent; a second call on an initialized engine is a no-op.
    pub async fn initialize(&self) -> Result<()> {
        let mut state = self.lock_state().await;
        if state.initialized {
            return Ok(());
        }

        let settings = self
            .deps
            .settings_repo
            .load()
            .await
            .map_err(|e| init_failed("load settings", e))?;

        let document = self
            .deps
            .history_repo
            .load()
            .await
            .map_err(|e| init_failed("load history", e))?;
        let mut history = match document {
            HistoryDocument::Plain { items } => items,
            HistoryDocument::Encrypted { blob } => {
                let bytes = self.deps.encryption.decrypt(&blob).await.map_err(|e| {
                    EngineError::StateInitializationFailed(format!("decrypt history: {e}"))
                })?;
                serde_json::from_slice(&bytes).map_err(|e| {
                    EngineError::StateInitializationFailed(format!("decode history: {e}"))
                })?
            }
        };
        history.truncate(settings.effective_history_limit());

        let mut warnings = Vec::new();
        let pinned = match self.deps.pinned_repo.load().await {
            Ok(pinned) => pinned,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "pinned items failed to load; starting empty");
                warnings.push(format!("pinned items failed to load and were reset: {e:#}"));
                Vec::new()
            }
        };
        let snippets = match self.deps.snippet_repo.load().await {
            Ok(snippets) => snippets,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "snippets failed to load; starting empty");
                warnings.push(format!("snippets failed to load and were reset: {e:#}"));
                Vec::new()
            }
        };

        state.settings = settings;
        state.history = history;
        state.pinned = pinned;
        state.snippets = snippets;
        state.init_warnings = warnings;
        state.initialized = true;
        self.commit(&mut state, false);

        info!(
            history = state.history.len(),
            pinned = state.pinned.len(),
            snippets = state.snippets.len(),
            "engine state initialized"
        );
        Ok(())
    }

    /// Subscribe to the clipboard monitor with the current rich-text
    /// capture preference. Re-entrant-safe: a second call while running is
    /// a no-op, never a double subscription.
    pub async fn start_runtime(&self) -> Result<()> {
        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;
        if state.monitor_running {
            return Ok(());
        }

        let sink: Arc<dyn CaptureSink> = Arc::new(EngineCaptureSink {
            engine: self.self_weak(),
        });
        self.deps
            .monitor
            .start(sink, state.settings.capture.capture_rich_text)
            .await
            .map_err(|e| EngineError::MonitorStartFailed(format!("{e:#}")))?;
        state.monitor_running = true;
        info!("clipboard monitor started");
        Ok(())
    }

    /// Stop the monitor subscription. Safe to call when not running.
    pub async fn stop_runtime(&self) -> Result<()> {
        let mut state = self.lock_state().await;
        if !state.monitor_running {
            return Ok(());
        }

        self.deps
            .monitor
            .stop()
            .await
            .map_err(|e| EngineError::MonitorStopFailed(format!("{e:#}")))?;
        state.monitor_running = false;
        info!("clipboard monitor stopped");
        Ok(())
    }

    /// Tear down: the monitor is stopped before the engine goes away, and
    /// the last scheduled flush is given the chance to land.
    pub async fn shutdown(&self) -> Result<()> {
        self.stop_runtime().await?;
        self.flush_settled().await;
        Ok(())
    }
}

fn init_failed(step: &str, e: anyhow::Error) -> EngineError {
    EngineError::StateInitializationFailed(format!("{step}: {e:#}"))
}

/// The engine's end of the monitor callback.
///
/// Holds a weak reference; a capture delivered after the engine is gone is
/// reported as an error to the monitor rather than kept alive forever.
struct EngineCaptureSink {
    engine: Weak<ClipboardEngine>,
}

#[async_trait]
impl CaptureSink for EngineCaptureSink {
    async fn on_capture(&self, item: ClipboardItem) -> anyhow::Result<CaptureDisposition> {
        let engine = self
            .engine
            .upgrade()
            .ok_or_else(|| anyhow::anyhow!("engine has shut down"))?;
        Ok(engine.capture(item).await?)
    }
}
