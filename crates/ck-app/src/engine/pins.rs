//! Pinning: durable, capacity-limited copies of captured items.
//!
//! Pin capacity is a hard stop: pinning at the cap fails instead of
//! evicting, unlike the rolling history's silent oldest-first eviction.

use tracing::info;

use ck_core::settings::MAX_PINNED_ITEMS;
use ck_core::{ClipboardItem, EngineError, ItemId, PinId, PinnedClipboardItem, Result};

use super::state::EngineState;
use super::ClipboardEngine;

impl ClipboardEngine {
    /// Snapshot an item into the pinned list.
    pub async fn pin_item(&self, id: &ItemId) -> Result<PinId> {
        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        let pin = self.build_pin(&state, id)?;
        let pin_id = pin.pin_id.clone();
        state.pinned.push(pin);
        self.commit(&mut state, true);
        info!(item = %id, "item pinned");
        Ok(pin_id)
    }

    /// Remove the pin whose snapshot originated from the given item id.
    pub async fn unpin_item(&self, id: &ItemId) -> Result<()> {
        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        Self::remove_pin(&mut state, id)?;
        state.prune_selection();
        self.commit(&mut state, true);
        info!(item = %id, "item unpinned");
        Ok(())
    }

    /// Pin the item if it is not pinned, unpin it otherwise. One mutation;
    /// the decision and the change happen under the same critical section.
    pub async fn toggle_pin(&self, id: &ItemId) -> Result<()> {
        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        if state.pinned.iter().any(|pin| &pin.item.id == id) {
            Self::remove_pin(&mut state, id)?;
            state.prune_selection();
            self.commit(&mut state, true);
            info!(item = %id, "item unpinned");
        } else {
            let pin = self.build_pin(&state, id)?;
            state.pinned.push(pin);
            self.commit(&mut state, true);
            info!(item = %id, "item pinned");
        }
        Ok(())
    }

    /// Set or clear the custom title of the pin originating from the given
    /// item id.
    pub async fn set_pin_title(&self, id: &ItemId, title: Option<String>) -> Result<()> {
        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        let Some(pin) = state.pinned.iter_mut().find(|pin| &pin.item.id == id) else {
            return Err(EngineError::PinnedItemNotFound(id.clone()));
        };
        pin.title = title;
        self.commit(&mut state, true);
        Ok(())
    }

    /// Validate capacity and duplicate rules, then snapshot the item.
    fn build_pin(&self, state: &EngineState, id: &ItemId) -> Result<PinnedClipboardItem> {
        let item: ClipboardItem = state
            .resolve_item(id)
            .ok_or_else(|| EngineError::ClipboardHistoryItemNotFound(id.clone()))?;

        if state.pinned.len() >= MAX_PINNED_ITEMS {
            return Err(EngineError::PinnedItemsLimitExceeded(MAX_PINNED_ITEMS));
        }
        if state
            .pinned
            .iter()
            .any(|pin| pin.item.is_equivalent_content(&item))
        {
            return Err(EngineError::PinnedItemDuplicate(id.clone()));
        }

        Ok(PinnedClipboardItem::new(item, self.clock_now()))
    }

    fn remove_pin(state: &mut EngineState, id: &ItemId) -> Result<()> {
        let before = state.pinned.len();
        state.pinned.retain(|pin| &pin.item.id != id);
        if state.pinned.len() == before {
            return Err(EngineError::PinnedItemNotFound(id.clone()));
        }
        Ok(())
    }
}
