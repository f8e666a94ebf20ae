//! Auto-paste port: OS clipboard write and focus-return paste.
//!
//! The engine resolves *which* item is acted on; window focus and keystroke
//! synthesis stay on the platform side of this boundary.

use anyhow::Result;
use async_trait::async_trait;

use crate::clipboard::ClipboardItem;

#[async_trait]
pub trait AutoPastePort: Send + Sync {
    /// Write the item's payload to the system clipboard.
    async fn set_clipboard_content(&self, item: &ClipboardItem) -> Result<()>;

    /// Paste into the window that was focused before ours.
    async fn paste_to_previous_window(&self) -> Result<()>;
}
