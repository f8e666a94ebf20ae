//! Pinned clipboard items.

use serde::{Deserialize, Serialize};

use crate::ids::PinId;

use super::item::ClipboardItem;

/// A durable, capacity-limited copy of a captured item.
///
/// The wrapped item is a snapshot taken at pin time; later history
/// mutations (including eviction of the originating entry) never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedClipboardItem {
    pub pin_id: PinId,
    pub item: ClipboardItem,
    pub pinned_at_ms: i64,
    pub title: Option<String>,
}

impl PinnedClipboardItem {
    pub fn new(item: ClipboardItem, pinned_at_ms: i64) -> Self {
        Self {
            pin_id: PinId::new(),
            item,
            pinned_at_ms,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
