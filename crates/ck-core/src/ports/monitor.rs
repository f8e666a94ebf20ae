//! Clipboard monitor port: the engine's only inbound event source.
//!
//! The platform observer invokes the supplied sink once per detected
//! clipboard change; delivery is serialized by the platform, but the sink
//! must still tolerate racing against UI-triggered engine commands.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::clipboard::ClipboardItem;

/// What the engine did with a delivered capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureDisposition {
    /// Inserted as a new history head.
    Stored,

    /// Content-equivalent to the head; the head's timestamp was refreshed.
    Refreshed,

    /// Observed but intentionally not retained (history off, incognito,
    /// excluded source application).
    Skipped,
}

/// Receiver of capture callbacks.
#[async_trait]
pub trait CaptureSink: Send + Sync {
    async fn on_capture(&self, item: ClipboardItem) -> Result<CaptureDisposition>;
}

/// Platform-observer abstraction.
///
/// # Behavior
/// - `start` is idempotent from the engine's point of view; the engine
///   guards against double subscription, but implementations should
///   tolerate repeated starts as well.
/// - `start` must not invoke the sink before returning; the first callback
///   comes from the observer it sets up.
/// - `stop` must be safe to call when not started.
#[async_trait]
pub trait ClipboardMonitorPort: Send + Sync {
    async fn start(&self, sink: Arc<dyn CaptureSink>, capture_rich_text: bool) -> Result<()>;

    /// Propagate a changed rich-text capture preference to a running
    /// observer without restarting it.
    async fn update_capture_rich_text(&self, capture_rich_text: bool) -> Result<()>;

    async fn stop(&self) -> Result<()>;
}
