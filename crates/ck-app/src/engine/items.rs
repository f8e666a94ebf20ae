//! Deletion, clearing, selection, copy, and paste.

use tracing::info;

use ck_core::{EngineError, ItemId, Result};

use super::ClipboardEngine;

impl ClipboardEngine {
    /// Remove one item from the rolling history.
    pub async fn delete_clipboard_item(&self, id: &ItemId) -> Result<()> {
        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        let before = state.history.len();
        state.history.retain(|item| &item.id != id);
        if state.history.len() == before {
            return Err(EngineError::ClipboardHistoryItemNotFound(id.clone()));
        }

        state.prune_selection();
        self.commit(&mut state, true);
        Ok(())
    }

    /// Wipe the rolling history. Idempotent; never touches pinned items.
    pub async fn clear_clipboard_history(&self) -> Result<()> {
        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        if state.history.is_empty() {
            return Ok(());
        }

        let removed = state.history.len();
        state.history.clear();
        state.prune_selection();
        self.commit(&mut state, true);
        info!(removed, "clipboard history cleared");
        Ok(())
    }

    /// Mark an item as the currently active one for downstream paste
    /// operations. The id may refer to a history entry or a pin snapshot.
    pub async fn select_clipboard_item(&self, id: &ItemId) -> Result<()> {
        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        if state.resolve_item(id).is_none() {
            return Err(EngineError::ClipboardHistoryItemNotFound(id.clone()));
        }
        state.selected = Some(id.clone());
        self.commit(&mut state, false);
        Ok(())
    }

    /// Write the item's payload back to the system clipboard.
    pub async fn copy_clipboard_item(&self, id: &ItemId) -> Result<()> {
        let item = self.item(id).await?;
        self.deps.auto_paste.set_clipboard_content(&item).await?;
        Ok(())
    }

    /// Copy the item and paste it into the previously focused window.
    pub async fn paste_clipboard_item(&self, id: &ItemId) -> Result<()> {
        let item = self.item(id).await?;
        self.deps.auto_paste.set_clipboard_content(&item).await?;
        self.deps.auto_paste.paste_to_previous_window().await?;
        Ok(())
    }

    /// Paste the currently selected item, if any.
    pub async fn paste_selected(&self) -> Result<()> {
        let selected = {
            let state = self.lock_state().await;
            self.ensure_initialized(&state)?;
            state.selected.clone()
        };
        let Some(id) = selected else {
            return Ok(());
        };
        self.paste_clipboard_item(&id).await
    }
}
