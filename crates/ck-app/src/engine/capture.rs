//! Capture: the engine's inbound mutation path.

use tracing::debug;

use ck_core::ports::CaptureDisposition;
use ck_core::{ClipboardItem, ClipboardPayload, EngineError, Result};

use super::ClipboardEngine;

impl ClipboardEngine {
    /// Apply one observed clipboard change.
    ///
    /// Retention gates first: when history is off, the source application
    /// is excluded, or incognito is active, the item is observed but never
    /// retained or persisted; the call is a no-op success.
    ///
    /// Dedup is head-only: an item content-equivalent to the current head
    /// refreshes the head's timestamp instead of inserting an adjacent
    /// duplicate. Equivalence is never checked deeper into the list.
    ///
    /// After insertion the history is truncated to the effective limit,
    /// dropping oldest entries. Pinned items are exempt.
    pub async fn capture(&self, item: ClipboardItem) -> Result<CaptureDisposition> {
        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        let settings = &state.settings;
        if !settings.retention.remember_history || settings.capture.incognito {
            return Ok(CaptureDisposition::Skipped);
        }
        if let Some(source) = &item.source_app {
            if settings.capture.excluded_app_ids.contains(source) {
                debug!(source = %source, "capture from excluded application skipped");
                return Ok(CaptureDisposition::Skipped);
            }
        }

        // Oversized images are rejected before any state is touched.
        if let ClipboardPayload::Image { bytes } = &item.payload {
            let max = settings.capture.max_image_bytes;
            if bytes.len() > max {
                return Err(EngineError::ClipboardImageTooLarge {
                    size: bytes.len(),
                    max,
                });
            }
        }

        let limit = settings.effective_history_limit();
        let now_ms = self.clock_now();

        let head_is_equivalent = state
            .history
            .first()
            .is_some_and(|head| head.is_equivalent_content(&item));

        let disposition = if head_is_equivalent {
            let refreshed = state.history[0].clone().refreshed_at(now_ms);
            state.history[0] = refreshed;
            CaptureDisposition::Refreshed
        } else {
            state.history.insert(0, item);
            state.history.truncate(limit);
            state.prune_selection();
            CaptureDisposition::Stored
        };

        self.commit(&mut state, true);
        debug!(
            disposition = ?disposition,
            len = state.history.len(),
            "capture applied"
        );
        Ok(disposition)
    }

    pub(crate) fn clock_now(&self) -> i64 {
        self.deps.clock.now_ms()
    }
}
