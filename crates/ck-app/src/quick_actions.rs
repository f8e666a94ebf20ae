//! Quick actions: one-item convenience operations composed from engine
//! primitives.
//!
//! Each action operates on a single resolved item. The edit action
//! produces a *new* captured item instead of mutating history in place,
//! keeping captured items immutable.

use std::path::Path;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use ck_core::ports::{AutoPastePort, CaptureDisposition};
use ck_core::{ClipboardItem, ClipboardPayload, EngineError, ItemId, Result};

use crate::engine::ClipboardEngine;

/// Everything except the characters that stay unreserved in a URL
/// component (RFC 3986 `unreserved`).
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub struct QuickActions {
    engine: Arc<ClipboardEngine>,
    auto_paste: Arc<dyn AutoPastePort>,
}

impl QuickActions {
    pub fn new(engine: Arc<ClipboardEngine>, auto_paste: Arc<dyn AutoPastePort>) -> Self {
        Self { engine, auto_paste }
    }

    /// Write the item's payload to a file: raw bytes for images, the
    /// plain-text rendering for everything else.
    pub async fn save_to_file(&self, id: &ItemId, path: &Path) -> Result<()> {
        let item = self.engine.item(id).await?;
        let bytes = match &item.payload {
            ClipboardPayload::Image { bytes } => bytes.clone(),
            _ => item
                .as_text()
                .unwrap_or_default()
                .as_bytes()
                .to_vec(),
        };
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| EngineError::Storage(format!("write {}: {e}", path.display())))?;
        Ok(())
    }

    /// Base64 of the payload (image bytes, or the UTF-8 of the text
    /// rendering), copied to the system clipboard and returned.
    pub async fn base64_encode(&self, id: &ItemId) -> Result<String> {
        let item = self.engine.item(id).await?;
        let encoded = match &item.payload {
            ClipboardPayload::Image { bytes } => BASE64.encode(bytes),
            _ => BASE64.encode(item.as_text().unwrap_or_default()),
        };
        self.copy_text(&encoded).await?;
        Ok(encoded)
    }

    /// Percent-encode the item's text rendering as a URL component, copy
    /// it to the system clipboard, and return it.
    pub async fn url_encode(&self, id: &ItemId) -> Result<String> {
        let item = self.engine.item(id).await?;
        let text = item
            .as_text()
            .ok_or_else(|| EngineError::DataFormatInvalid("item has no text form".to_string()))?;
        let encoded = utf8_percent_encode(text, URL_COMPONENT).to_string();
        self.copy_text(&encoded).await?;
        Ok(encoded)
    }

    /// Percent-decode the item's text rendering, copy the result to the
    /// system clipboard, and return it. Malformed sequences fail without
    /// touching the clipboard.
    pub async fn url_decode(&self, id: &ItemId) -> Result<String> {
        let item = self.engine.item(id).await?;
        let text = item
            .as_text()
            .ok_or_else(|| EngineError::DataFormatInvalid("item has no text form".to_string()))?;
        let decoded = percent_decode_str(text)
            .decode_utf8()
            .map_err(|e| EngineError::DataFormatInvalid(format!("percent decoding: {e}")))?
            .into_owned();
        self.copy_text(&decoded).await?;
        Ok(decoded)
    }

    /// Resubmit edited text as a brand-new capture. The original item is
    /// untouched; the edit enters the history through the normal capture
    /// path (dedup, eviction, persistence) and is re-classified.
    pub async fn edit_and_resubmit(
        &self,
        id: &ItemId,
        edited_text: String,
    ) -> Result<CaptureDisposition> {
        let original = self.engine.item(id).await?;
        let replacement = ClipboardItem::captured_text(
            edited_text,
            original.source_app.clone(),
            self.engine.clock_now(),
        );
        self.engine.capture(replacement).await
    }

    async fn copy_text(&self, text: &str) -> Result<()> {
        let item = ClipboardItem::captured_text(text.to_string(), None, self.engine.clock_now());
        self.auto_paste.set_clipboard_content(&item).await?;
        Ok(())
    }
}
