//! In-memory fake ports shared by the engine integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use ck_app::{ClipboardEngine, EngineDeps};
use ck_core::ports::{
    AutoPastePort, CaptureDisposition, CaptureSink, ClipboardMonitorPort, ClockPort,
    EncryptionPort, HistoryRepositoryPort, PinnedRepositoryPort, SettingsRepositoryPort,
    SnippetRepositoryPort,
};
use ck_core::security::EncryptionFormatVersion;
use ck_core::{
    ClipboardItem, EncryptedBlob, EncryptionError, HistoryDocument, PinnedClipboardItem, Settings,
    Snippet,
};

// === Repositories ===

#[derive(Default)]
pub struct MemHistoryRepo {
    pub document: Mutex<Option<HistoryDocument>>,
    pub save_count: AtomicUsize,
    pub fail_load: std::sync::atomic::AtomicBool,
}

impl MemHistoryRepo {
    pub fn saved_document(&self) -> Option<HistoryDocument> {
        self.document.lock().unwrap().clone()
    }

    pub fn saves(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistoryRepositoryPort for MemHistoryRepo {
    async fn load(&self) -> Result<HistoryDocument> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(anyhow!("history store unreadable"));
        }
        Ok(self
            .document
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(HistoryDocument::empty))
    }

    async fn save(&self, document: &HistoryDocument) -> Result<()> {
        *self.document.lock().unwrap() = Some(document.clone());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.document.lock().unwrap() = None;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemPinnedRepo {
    pub pinned: Mutex<Vec<PinnedClipboardItem>>,
    pub save_count: AtomicUsize,
    pub fail_load: std::sync::atomic::AtomicBool,
}

impl MemPinnedRepo {
    pub fn saved(&self) -> Vec<PinnedClipboardItem> {
        self.pinned.lock().unwrap().clone()
    }
}

#[async_trait]
impl PinnedRepositoryPort for MemPinnedRepo {
    async fn load(&self) -> Result<Vec<PinnedClipboardItem>> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(anyhow!("pinned store unreadable"));
        }
        Ok(self.pinned.lock().unwrap().clone())
    }

    async fn save(&self, pinned: &[PinnedClipboardItem]) -> Result<()> {
        *self.pinned.lock().unwrap() = pinned.to_vec();
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.pinned.lock().unwrap().clear();
        Ok(())
    }
}

#[derive(Default)]
pub struct MemSnippetRepo {
    pub snippets: Mutex<Vec<Snippet>>,
    pub save_count: AtomicUsize,
}

#[async_trait]
impl SnippetRepositoryPort for MemSnippetRepo {
    async fn load(&self) -> Result<Vec<Snippet>> {
        Ok(self.snippets.lock().unwrap().clone())
    }

    async fn save(&self, snippets: &[Snippet]) -> Result<()> {
        *self.snippets.lock().unwrap() = snippets.to_vec();
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.snippets.lock().unwrap().clear();
        Ok(())
    }
}

pub struct MemSettingsRepo {
    pub settings: Mutex<Settings>,
    pub save_count: AtomicUsize,
}

impl MemSettingsRepo {
    pub fn with(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
            save_count: AtomicUsize::new(0),
        }
    }
}

impl Default for MemSettingsRepo {
    fn default() -> Self {
        Self::with(Settings::default())
    }
}

#[async_trait]
impl SettingsRepositoryPort for MemSettingsRepo {
    async fn load(&self) -> Result<Settings> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        *self.settings.lock().unwrap() = settings.clone();
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.settings.lock().unwrap() = Settings::default();
        Ok(())
    }
}

// === Encryption ===

/// Marks blobs without really encrypting, so tests can assert on the
/// chosen document variant and still round-trip.
#[derive(Default)]
pub struct PassthroughEncryption {
    pub encrypt_count: AtomicUsize,
}

#[async_trait]
impl EncryptionPort for PassthroughEncryption {
    async fn encrypt(&self, plaintext: &[u8]) -> Result<EncryptedBlob, EncryptionError> {
        self.encrypt_count.fetch_add(1, Ordering::SeqCst);
        Ok(EncryptedBlob {
            version: EncryptionFormatVersion::V1,
            nonce: vec![0u8; 24],
            ciphertext: plaintext.to_vec(),
        })
    }

    async fn decrypt(&self, blob: &EncryptedBlob) -> Result<Vec<u8>, EncryptionError> {
        Ok(blob.ciphertext.clone())
    }
}

// === Monitor ===

#[derive(Default)]
pub struct FakeMonitor {
    pub start_count: AtomicUsize,
    pub stop_count: AtomicUsize,
    pub rich_text: Mutex<Option<bool>>,
    sink: Mutex<Option<Arc<dyn CaptureSink>>>,
}

impl FakeMonitor {
    /// Push a capture through the registered sink the way the platform
    /// observer would.
    pub async fn deliver(&self, item: ClipboardItem) -> Result<CaptureDisposition> {
        let sink = self
            .sink
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow!("monitor not started"))?;
        sink.on_capture(item).await
    }

    pub fn starts(&self) -> usize {
        self.start_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClipboardMonitorPort for FakeMonitor {
    async fn start(&self, sink: Arc<dyn CaptureSink>, capture_rich_text: bool) -> Result<()> {
        self.start_count.fetch_add(1, Ordering::SeqCst);
        *self.rich_text.lock().unwrap() = Some(capture_rich_text);
        *self.sink.lock().unwrap() = Some(sink);
        Ok(())
    }

    async fn update_capture_rich_text(&self, capture_rich_text: bool) -> Result<()> {
        *self.rich_text.lock().unwrap() = Some(capture_rich_text);
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        self.stop_count.fetch_add(1, Ordering::SeqCst);
        *self.sink.lock().unwrap() = None;
        Ok(())
    }
}

// === Auto-paste ===

#[derive(Default)]
pub struct FakeAutoPaste {
    pub set_count: AtomicUsize,
    pub paste_count: AtomicUsize,
    pub last_content: Mutex<Option<ClipboardItem>>,
}

#[async_trait]
impl AutoPastePort for FakeAutoPaste {
    async fn set_clipboard_content(&self, item: &ClipboardItem) -> Result<()> {
        self.set_count.fetch_add(1, Ordering::SeqCst);
        *self.last_content.lock().unwrap() = Some(item.clone());
        Ok(())
    }

    async fn paste_to_previous_window(&self) -> Result<()> {
        self.paste_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// === Clock ===

pub struct FixedClock {
    pub now: AtomicI64,
}

impl FixedClock {
    pub fn at(now_ms: i64) -> Self {
        Self {
            now: AtomicI64::new(now_ms),
        }
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

// === Harness ===

pub struct TestPorts {
    pub history_repo: Arc<MemHistoryRepo>,
    pub pinned_repo: Arc<MemPinnedRepo>,
    pub snippet_repo: Arc<MemSnippetRepo>,
    pub settings_repo: Arc<MemSettingsRepo>,
    pub encryption: Arc<PassthroughEncryption>,
    pub monitor: Arc<FakeMonitor>,
    pub auto_paste: Arc<FakeAutoPaste>,
    pub clock: Arc<FixedClock>,
}

impl TestPorts {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            history_repo: Arc::new(MemHistoryRepo::default()),
            pinned_repo: Arc::new(MemPinnedRepo::default()),
            snippet_repo: Arc::new(MemSnippetRepo::default()),
            settings_repo: Arc::new(MemSettingsRepo::with(settings)),
            encryption: Arc::new(PassthroughEncryption::default()),
            monitor: Arc::new(FakeMonitor::default()),
            auto_paste: Arc::new(FakeAutoPaste::default()),
            clock: Arc::new(FixedClock::at(1_000)),
        }
    }

    pub fn engine(&self) -> Arc<ClipboardEngine> {
        ClipboardEngine::new(EngineDeps {
            history_repo: self.history_repo.clone(),
            pinned_repo: self.pinned_repo.clone(),
            snippet_repo: self.snippet_repo.clone(),
            settings_repo: self.settings_repo.clone(),
            encryption: self.encryption.clone(),
            monitor: self.monitor.clone(),
            auto_paste: self.auto_paste.clone(),
            clock: self.clock.clone(),
        })
    }
}

/// Initialized engine over fresh in-memory ports.
pub async fn initialized_engine() -> (Arc<ClipboardEngine>, TestPorts) {
    let ports = TestPorts::new();
    let engine = ports.engine();
    engine.initialize().await.expect("initialize");
    (engine, ports)
}

pub async fn initialized_engine_with(settings: Settings) -> (Arc<ClipboardEngine>, TestPorts) {
    let ports = TestPorts::with_settings(settings);
    let engine = ports.engine();
    engine.initialize().await.expect("initialize");
    (engine, ports)
}

pub fn text_item(text: &str) -> ClipboardItem {
    ClipboardItem::captured_text(text.to_string(), None, 1_000)
}

pub fn text_item_from(text: &str, source_app: &str) -> ClipboardItem {
    ClipboardItem::captured_text(text.to_string(), Some(source_app.to_string()), 1_000)
}
