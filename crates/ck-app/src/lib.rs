//! # ck-app
//!
//! The Clipboard State & Retention Engine and the operations built on top
//! of it. All state lives behind [`engine::ClipboardEngine`]; the
//! presentation layer reads snapshot views, subscribes to the change feed,
//! and issues commands. [`quick_actions::QuickActions`] composes the
//! engine's primitives into the one-item convenience operations.

pub mod engine;
pub mod quick_actions;

pub use engine::{ClipboardEngine, EngineDeps};
pub use quick_actions::QuickActions;
