//! Clipboard item model.
//!
//! A [`ClipboardItem`] is the immutable snapshot of one observed
//! clipboard-content change. The payload is a tagged union with one variant
//! per payload family, so an item can never be in a "wrong fields set"
//! state: a text item always carries text, an image item always carries
//! bytes, and so on. The ten user-facing kinds are derived from the payload
//! (plus the text sub-kind) rather than stored alongside it.
//!
//! Two items are *content-equivalent* when they have the same kind and the
//! same payload under type-specific comparison. Equivalence drives
//! sequential deduplication and duplicate-pin detection; it is never an
//! identity comparison.

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

use crate::ids::ItemId;

use super::classify::classify_text;

/// Sub-kind of a text payload, assigned by the classifier at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    Plain,
    Color,
    Code,
    Url,
    Email,
    Phone,
    Json,
}

/// Exactly one payload per item, tagged by family.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ClipboardPayload {
    /// UTF-8 text, including the classified sub-kinds (color, code, url,
    /// email, phone, json).
    Text { kind: TextKind, text: String },

    /// Encoded image bytes (PNG or whatever the platform handed over).
    Image {
        #[serde_as(as = "Base64")]
        bytes: Vec<u8>,
    },

    /// A path copied from a file manager.
    File { path: String },

    /// Plain text plus the optional markup forms the source offered.
    RichText {
        text: String,
        html: Option<String>,
        rtf: Option<String>,
    },
}

/// The ten user-facing item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardKind {
    Text,
    Image,
    Color,
    Code,
    Url,
    Email,
    Phone,
    Json,
    File,
    RichText,
}

impl std::fmt::Display for ClipboardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ClipboardKind::Text => "text",
            ClipboardKind::Image => "image",
            ClipboardKind::Color => "color",
            ClipboardKind::Code => "code",
            ClipboardKind::Url => "url",
            ClipboardKind::Email => "email",
            ClipboardKind::Phone => "phone",
            ClipboardKind::Json => "json",
            ClipboardKind::File => "file",
            ClipboardKind::RichText => "rich_text",
        };
        write!(f, "{}", s)
    }
}

/// Immutable snapshot of one capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardItem {
    pub id: ItemId,
    pub captured_at_ms: i64,

    /// Identifier or path of the application the capture came from, when
    /// the platform could tell.
    pub source_app: Option<String>,

    pub payload: ClipboardPayload,
}

impl ClipboardItem {
    pub fn new(payload: ClipboardPayload, source_app: Option<String>, captured_at_ms: i64) -> Self {
        Self {
            id: ItemId::new(),
            captured_at_ms,
            source_app,
            payload,
        }
    }

    /// Build a text item, running the classifier to assign the sub-kind.
    pub fn captured_text(text: String, source_app: Option<String>, captured_at_ms: i64) -> Self {
        let kind = classify_text(&text);
        Self::new(ClipboardPayload::Text { kind, text }, source_app, captured_at_ms)
    }

    pub fn kind(&self) -> ClipboardKind {
        match &self.payload {
            ClipboardPayload::Text { kind, .. } => match kind {
                TextKind::Plain => ClipboardKind::Text,
                TextKind::Color => ClipboardKind::Color,
                TextKind::Code => ClipboardKind::Code,
                TextKind::Url => ClipboardKind::Url,
                TextKind::Email => ClipboardKind::Email,
                TextKind::Phone => ClipboardKind::Phone,
                TextKind::Json => ClipboardKind::Json,
            },
            ClipboardPayload::Image { .. } => ClipboardKind::Image,
            ClipboardPayload::File { .. } => ClipboardKind::File,
            ClipboardPayload::RichText { .. } => ClipboardKind::RichText,
        }
    }

    /// The plain-text rendering of the payload, when one exists.
    pub fn as_text(&self) -> Option<&str> {
        match &self.payload {
            ClipboardPayload::Text { text, .. } => Some(text),
            ClipboardPayload::File { path } => Some(path),
            ClipboardPayload::RichText { text, .. } => Some(text),
            ClipboardPayload::Image { .. } => None,
        }
    }

    /// Size of the payload as held in memory, used for the image size gate
    /// and for display.
    pub fn payload_len(&self) -> usize {
        match &self.payload {
            ClipboardPayload::Text { text, .. } => text.len(),
            ClipboardPayload::Image { bytes } => bytes.len(),
            ClipboardPayload::File { path } => path.len(),
            ClipboardPayload::RichText { text, .. } => text.len(),
        }
    }

    /// Content equivalence, used for sequential dedup and duplicate-pin
    /// detection.
    ///
    /// Same kind and same payload under type-specific comparison: ordinal
    /// text compare, byte-exact image compare, case-insensitive path
    /// compare for files, plain-text compare for rich text.
    pub fn is_equivalent_content(&self, other: &ClipboardItem) -> bool {
        match (&self.payload, &other.payload) {
            (
                ClipboardPayload::Text { kind: a, text: ta },
                ClipboardPayload::Text { kind: b, text: tb },
            ) => a == b && ta == tb,
            (ClipboardPayload::Image { bytes: a }, ClipboardPayload::Image { bytes: b }) => a == b,
            (ClipboardPayload::File { path: a }, ClipboardPayload::File { path: b }) => {
                a.eq_ignore_ascii_case(b)
            }
            (
                ClipboardPayload::RichText { text: a, .. },
                ClipboardPayload::RichText { text: b, .. },
            ) => a == b,
            _ => false,
        }
    }

    /// Same item with a refreshed capture timestamp; identity is preserved.
    pub fn refreshed_at(mut self, captured_at_ms: i64) -> Self {
        self.captured_at_ms = captured_at_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_item(s: &str) -> ClipboardItem {
        ClipboardItem::captured_text(s.to_string(), None, 1_000)
    }

    #[test]
    fn kind_follows_payload() {
        assert_eq!(text_item("hello world").kind(), ClipboardKind::Text);
        assert_eq!(
            text_item("https://example.com/a").kind(),
            ClipboardKind::Url
        );

        let img = ClipboardItem::new(
            ClipboardPayload::Image { bytes: vec![1, 2, 3] },
            None,
            1_000,
        );
        assert_eq!(img.kind(), ClipboardKind::Image);
    }

    #[test]
    fn equivalence_is_by_content_not_identity() {
        let a = text_item("same");
        let b = text_item("same");
        assert_ne!(a.id, b.id);
        assert!(a.is_equivalent_content(&b));
    }

    #[test]
    fn equivalence_requires_matching_kind() {
        let text = text_item("abc");
        let file = ClipboardItem::new(
            ClipboardPayload::File { path: "abc".to_string() },
            None,
            1_000,
        );
        assert!(!text.is_equivalent_content(&file));
    }

    #[test]
    fn file_paths_compare_case_insensitively() {
        let a = ClipboardItem::new(
            ClipboardPayload::File { path: "C:\\Users\\Me\\File.TXT".to_string() },
            None,
            1_000,
        );
        let b = ClipboardItem::new(
            ClipboardPayload::File { path: "c:\\users\\me\\file.txt".to_string() },
            None,
            2_000,
        );
        assert!(a.is_equivalent_content(&b));
    }

    #[test]
    fn rich_text_compares_plain_text_only() {
        let a = ClipboardItem::new(
            ClipboardPayload::RichText {
                text: "hello".to_string(),
                html: Some("<b>hello</b>".to_string()),
                rtf: None,
            },
            None,
            1_000,
        );
        let b = ClipboardItem::new(
            ClipboardPayload::RichText {
                text: "hello".to_string(),
                html: None,
                rtf: Some("{\\rtf1 hello}".to_string()),
            },
            None,
            2_000,
        );
        assert!(a.is_equivalent_content(&b));
    }

    #[test]
    fn refresh_keeps_identity() {
        let a = text_item("x");
        let id = a.id.clone();
        let refreshed = a.refreshed_at(9_999);
        assert_eq!(refreshed.id, id);
        assert_eq!(refreshed.captured_at_ms, 9_999);
    }

    #[test]
    fn item_serde_round_trip() {
        let item = ClipboardItem::new(
            ClipboardPayload::Image { bytes: vec![0, 255, 7] },
            Some("org.example.app".to_string()),
            42,
        );
        let json = serde_json::to_string(&item).unwrap();
        let back: ClipboardItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
