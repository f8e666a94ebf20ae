//! Application settings.
//!
//! A single process-wide record, sectioned the way the settings UI groups
//! it. Unknown or missing sections deserialize to defaults so older files
//! keep loading after upgrades.

mod shortcut;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub use shortcut::{Modifier, Shortcut, ShortcutParseError};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Hard maximum number of rolling history entries; the configured cap can
/// never exceed this.
pub const MAX_HISTORY_ITEMS: usize = 1_000;

/// Floor for the configured history cap when limiting is enabled.
pub const MIN_HISTORY_LIMIT: usize = 10;

/// Hard cap on pinned items. Pinning past it fails; pins are never evicted.
pub const MAX_PINNED_ITEMS: usize = 50;

/// Largest value accepted for the configured history cap.
pub const MAX_CONFIGURABLE_HISTORY: usize = 10_000;

/// Ceiling for the configured maximum persisted-image size.
pub const MAX_IMAGE_BYTES_CEILING: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionSettings {
    /// Master switch; when off, captures are observed but never retained.
    pub remember_history: bool,

    /// Whether the numeric cap below applies at all.
    pub limit_history: bool,

    /// Configured cap. Consumers must go through
    /// [`Settings::effective_history_limit`], never this raw value.
    pub max_history_items: usize,
}

impl Default for RetentionSettings {
    fn default() -> Self {
        Self {
            remember_history: true,
            limit_history: true,
            max_history_items: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSettings {
    pub capture_rich_text: bool,

    /// While on, captures are observed but neither retained nor persisted.
    pub incognito: bool,

    /// Source applications whose captures are dropped.
    #[serde(default)]
    pub excluded_app_ids: BTreeSet<String>,

    /// Maximum encoded byte length accepted for an image payload.
    pub max_image_bytes: usize,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            capture_rich_text: true,
            incognito: false,
            excluded_app_ids: BTreeSet::new(),
            max_image_bytes: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SecuritySettings {
    /// Encrypt the persisted history document. Plaintext never touches disk
    /// while this is on.
    pub encrypt_history: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionSettings {
    /// Delay before the screen-edge gesture opens the panel.
    pub edge_trigger_delay_ms: u64,

    /// Global hotkey, e.g. `Ctrl+Shift+V`. Validated on save.
    pub hotkey: String,

    pub auto_paste: bool,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            edge_trigger_delay_ms: 300,
            hotkey: "Ctrl+Shift+V".to_string(),
            auto_paste: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub retention: RetentionSettings,

    #[serde(default)]
    pub capture: CaptureSettings,

    #[serde(default)]
    pub security: SecuritySettings,

    #[serde(default)]
    pub interaction: InteractionSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            retention: RetentionSettings::default(),
            capture: CaptureSettings::default(),
            security: SecuritySettings::default(),
            interaction: InteractionSettings::default(),
        }
    }
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

impl Settings {
    /// The single source of truth the eviction algorithm consults.
    ///
    /// When limiting is enabled the configured cap is clamped into
    /// `[MIN_HISTORY_LIMIT, MAX_HISTORY_ITEMS]`; otherwise the hard
    /// maximum applies.
    pub fn effective_history_limit(&self) -> usize {
        if self.retention.limit_history {
            self.retention
                .max_history_items
                .clamp(MIN_HISTORY_LIMIT, MAX_HISTORY_ITEMS)
        } else {
            MAX_HISTORY_ITEMS
        }
    }

    /// Range-check numeric fields and the hotkey before the record is
    /// accepted. A failed validation leaves previously held settings
    /// untouched (the engine only applies a record that passed).
    pub fn validate(&self) -> Result<()> {
        if self.retention.max_history_items == 0
            || self.retention.max_history_items > MAX_CONFIGURABLE_HISTORY
        {
            return Err(EngineError::SettingsRangeInvalid(format!(
                "max_history_items must be in 1..={}, got {}",
                MAX_CONFIGURABLE_HISTORY, self.retention.max_history_items
            )));
        }
        if self.capture.max_image_bytes == 0
            || self.capture.max_image_bytes > MAX_IMAGE_BYTES_CEILING
        {
            return Err(EngineError::SettingsRangeInvalid(format!(
                "max_image_bytes must be in 1..={}, got {}",
                MAX_IMAGE_BYTES_CEILING, self.capture.max_image_bytes
            )));
        }
        if self.interaction.edge_trigger_delay_ms > 5_000 {
            return Err(EngineError::SettingsRangeInvalid(format!(
                "edge_trigger_delay_ms must be at most 5000, got {}",
                self.interaction.edge_trigger_delay_ms
            )));
        }
        self.interaction
            .hotkey
            .parse::<Shortcut>()
            .map_err(|_| EngineError::SettingsShortcutInvalid(self.interaction.hotkey.clone()))?;
        Ok(())
    }
}
