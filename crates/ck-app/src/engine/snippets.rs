//! Snippet management.

use std::collections::BTreeMap;

use ck_core::{EngineError, Result, Snippet, SnippetId};

use super::ClipboardEngine;

impl ClipboardEngine {
    /// Insert a snippet, or replace the one with the same id.
    pub async fn save_snippet(&self, snippet: Snippet) -> Result<()> {
        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        let mut snippets = state.snippets.clone();
        match snippets.iter_mut().find(|s| s.id == snippet.id) {
            Some(existing) => *existing = snippet,
            None => snippets.push(snippet),
        }

        self.deps.snippet_repo.save(&snippets).await?;
        state.snippets = snippets;
        self.commit(&mut state, false);
        Ok(())
    }

    pub async fn delete_snippet(&self, id: &SnippetId) -> Result<()> {
        let mut state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        let mut snippets = state.snippets.clone();
        let before = snippets.len();
        snippets.retain(|s| &s.id != id);
        if snippets.len() == before {
            return Err(EngineError::SnippetNotFound(id.clone()));
        }

        self.deps.snippet_repo.save(&snippets).await?;
        state.snippets = snippets;
        self.commit(&mut state, false);
        Ok(())
    }

    /// Resolve a snippet's template against the supplied placeholder
    /// values.
    pub async fn resolve_snippet(
        &self,
        id: &SnippetId,
        values: &BTreeMap<String, String>,
    ) -> Result<String> {
        let state = self.lock_state().await;
        self.ensure_initialized(&state)?;

        let snippet = state
            .snippets
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| EngineError::SnippetNotFound(id.clone()))?;
        Ok(snippet.resolve(values))
    }
}
