//! Clipboard State & Retention Engine.
//!
//! The engine owns the canonical in-memory history, pinned list, snippets,
//! and settings. Exactly one logical mutation is in flight at a time (the
//! state mutex); every mutation computes its replacement lists first and
//! commits them in one critical section, then bumps the generation counter,
//! publishes it on the change feed, and (for history/pinned changes) hands
//! a snapshot to the coalescing flush worker.
//!
//! Readers get cloned snapshots and can never observe a torn update. A
//! caller that drops an in-flight operation before its commit leaves state
//! exactly as it was.

mod backup;
mod capture;
mod flush;
mod items;
mod pins;
mod runtime;
mod settings;
mod snippets;
mod state;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use tokio::sync::{watch, Mutex, MutexGuard};

use ck_core::ports::{
    AutoPastePort, ClipboardMonitorPort, ClockPort, EncryptionPort, HistoryRepositoryPort,
    PinnedRepositoryPort, SettingsRepositoryPort, SnippetRepositoryPort,
};
use ck_core::{
    ClipboardItem, EngineError, ItemId, PinnedClipboardItem, Result, Settings, Snippet,
};

use flush::PersistPlan;
use state::EngineState;

/// Everything the engine talks through.
pub struct EngineDeps {
    pub history_repo: Arc<dyn HistoryRepositoryPort>,
    pub pinned_repo: Arc<dyn PinnedRepositoryPort>,
    pub snippet_repo: Arc<dyn SnippetRepositoryPort>,
    pub settings_repo: Arc<dyn SettingsRepositoryPort>,
    pub encryption: Arc<dyn EncryptionPort>,
    pub monitor: Arc<dyn ClipboardMonitorPort>,
    pub auto_paste: Arc<dyn AutoPastePort>,
    pub clock: Arc<dyn ClockPort>,
}

pub struct ClipboardEngine {
    deps: EngineDeps,
    state: Mutex<EngineState>,
    changes: watch::Sender<u64>,
    flush_tx: watch::Sender<Option<PersistPlan>>,
    flush_processed: watch::Receiver<u64>,
    last_flush_requested: AtomicU64,

    /// Handed to the monitor as the capture sink. Weak, so a monitor that
    /// outlives the engine cannot keep it alive.
    self_weak: Weak<ClipboardEngine>,
}

impl ClipboardEngine {
    /// Build the engine and spawn its flush worker. Must be called from
    /// within a Tokio runtime.
    pub fn new(deps: EngineDeps) -> Arc<Self> {
        let (flush_tx, flush_processed) = flush::spawn_flush_worker(
            deps.history_repo.clone(),
            deps.pinned_repo.clone(),
            deps.encryption.clone(),
        );
        let (changes, _) = watch::channel(0u64);

        Arc::new_cyclic(|self_weak| Self {
            deps,
            state: Mutex::new(EngineState::new()),
            changes,
            flush_tx,
            flush_processed,
            last_flush_requested: AtomicU64::new(0),
            self_weak: self_weak.clone(),
        })
    }

    // === Read-only views ===
    //
    // Each view clones a fully-built snapshot under the lock; callers can
    // hold it as long as they like without blocking mutations.

    pub async fn clipboard_items(&self) -> Vec<ClipboardItem> {
        self.state.lock().await.history.clone()
    }

    pub async fn pinned_items(&self) -> Vec<PinnedClipboardItem> {
        self.state.lock().await.pinned.clone()
    }

    pub async fn snippets(&self) -> Vec<Snippet> {
        self.state.lock().await.snippets.clone()
    }

    pub async fn settings(&self) -> Settings {
        self.state.lock().await.settings.clone()
    }

    pub async fn selected_item(&self) -> Option<ClipboardItem> {
        let state = self.state.lock().await;
        state
            .selected
            .as_ref()
            .and_then(|id| state.resolve_item(id))
    }

    pub async fn generation(&self) -> u64 {
        self.state.lock().await.generation
    }

    /// Warning-class problems from initialization that did not block
    /// startup (e.g. the pinned list failed to load and was reset).
    pub async fn init_warnings(&self) -> Vec<String> {
        self.state.lock().await.init_warnings.clone()
    }

    /// Resolve one item by id, searching history then pinned snapshots.
    pub async fn item(&self, id: &ItemId) -> Result<ClipboardItem> {
        self.state
            .lock()
            .await
            .resolve_item(id)
            .ok_or_else(|| EngineError::ClipboardHistoryItemNotFound(id.clone()))
    }

    /// Subscribe to the state-change feed.
    ///
    /// The value is the generation counter; a receiver always observes the
    /// latest committed generation eventually, so no change is silently
    /// lost even when intermediate values are coalesced.
    pub fn subscribe_changes(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Wait until the background flusher has attempted persistence of the
    /// most recently scheduled snapshot. Used on shutdown and by tests
    /// that assert on durable state.
    pub async fn flush_settled(&self) {
        let target = self.last_flush_requested.load(Ordering::SeqCst);
        let mut rx = self.flush_processed.clone();
        while *rx.borrow() < target {
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    // === Internal commit helpers ===

    pub(crate) async fn lock_state(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().await
    }

    pub(crate) fn ensure_initialized(&self, state: &EngineState) -> Result<()> {
        if state.initialized {
            Ok(())
        } else {
            Err(EngineError::StateInitializationFailed(
                "engine is not initialized".to_string(),
            ))
        }
    }

    /// Commit a completed mutation: bump the generation, publish it, and
    /// optionally schedule a persistence flush of history + pinned.
    pub(crate) fn commit(&self, state: &mut EngineState, persist: bool) {
        state.generation += 1;
        let _ = self.changes.send(state.generation);
        if persist {
            self.schedule_flush(state);
        }
    }

    pub(crate) fn self_weak(&self) -> Weak<ClipboardEngine> {
        self.self_weak.clone()
    }

    pub(crate) fn schedule_flush(&self, state: &EngineState) {
        let plan = PersistPlan {
            generation: state.generation,
            items: state.history.clone(),
            pinned: state.pinned.clone(),
            encrypt: state.settings.security.encrypt_history,
        };
        self.last_flush_requested
            .store(state.generation, Ordering::SeqCst);
        let _ = self.flush_tx.send(Some(plan));
    }
}
