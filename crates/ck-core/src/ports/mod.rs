//! Ports: the abstract interfaces the engine talks through.
//!
//! Infrastructure (file repositories, the crypto service) and the platform
//! shims (clipboard monitor, auto-paste) implement these; the engine and
//! tests depend only on the traits.

mod clock;
mod encryption;
mod monitor;
mod paste;
mod repository;

pub use clock::ClockPort;
pub use encryption::EncryptionPort;
pub use monitor::{CaptureDisposition, CaptureSink, ClipboardMonitorPort};
pub use paste::AutoPastePort;
pub use repository::{
    HistoryRepositoryPort, PinnedRepositoryPort, SettingsRepositoryPort, SnippetRepositoryPort,
};
