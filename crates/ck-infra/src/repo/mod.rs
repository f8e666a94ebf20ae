//! File-backed persistence repositories.
//!
//! One JSON document per aggregate. Saves go through a temp-file-then-
//! rename, so a save either fully succeeds or leaves the prior durable
//! state intact.

mod document;
mod history;
mod pinned;
mod settings;
mod snippets;

pub use history::HistoryFileRepository;
pub use pinned::PinnedFileRepository;
pub use settings::SettingsFileRepository;
pub use snippets::SnippetFileRepository;
