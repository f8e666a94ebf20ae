//! The engine's owned state aggregate.
//!
//! Everything lives behind one async mutex in [`super::ClipboardEngine`];
//! mutations compute replacement values and commit them in a single
//! critical section, so readers only ever see fully-built snapshots.

use ck_core::{ClipboardItem, ItemId, PinnedClipboardItem, Settings, Snippet};

pub(crate) struct EngineState {
    pub initialized: bool,

    /// Rolling history, most-recent first.
    pub history: Vec<ClipboardItem>,

    pub pinned: Vec<PinnedClipboardItem>,

    pub snippets: Vec<Snippet>,

    pub settings: Settings,

    /// Currently active item, consulted by downstream paste operations.
    pub selected: Option<ItemId>,

    /// Bumped on every committed state change; published on the change
    /// feed so readers can detect stale views.
    pub generation: u64,

    pub monitor_running: bool,

    /// Warning-class problems from initialization (e.g. the pinned list
    /// failed to load and was reset) that did not block startup.
    pub init_warnings: Vec<String>,
}

impl EngineState {
    pub fn new() -> Self {
        Self {
            initialized: false,
            history: Vec::new(),
            pinned: Vec::new(),
            snippets: Vec::new(),
            settings: Settings::default(),
            selected: None,
            generation: 0,
            monitor_running: false,
            init_warnings: Vec::new(),
        }
    }

    /// Resolve an id in the rolling history, then among pin snapshots.
    pub fn resolve_item(&self, id: &ItemId) -> Option<ClipboardItem> {
        self.history
            .iter()
            .find(|item| &item.id == id)
            .or_else(|| {
                self.pinned
                    .iter()
                    .map(|pin| &pin.item)
                    .find(|item| &item.id == id)
            })
            .cloned()
    }

    /// Drop the selection when the item it points at no longer exists in
    /// either list.
    pub fn prune_selection(&mut self) {
        if let Some(id) = self.selected.clone() {
            if self.resolve_item(&id).is_none() {
                self.selected = None;
            }
        }
    }
}
