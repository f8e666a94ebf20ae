//! Opaque identifier newtypes.
//!
//! Every aggregate gets its own ID wrapper so that an item id can never be
//! passed where a pin id is expected. IDs are UUIDv4 strings.

mod id_macro;

use serde::{Deserialize, Serialize};

/// Identity of one captured clipboard item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Identity of one pinned item (independent of the item it snapshots).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinId(String);

/// Identity of one snippet template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(String);

id_macro::impl_id!(ItemId, PinId, SnippetId);
