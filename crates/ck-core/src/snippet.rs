//! Reusable text snippets with `{name}` placeholders.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ids::SnippetId;

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: SnippetId,
    pub name: String,
    pub template: String,
}

impl Snippet {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            id: SnippetId::new(),
            name: name.into(),
            template: template.into(),
        }
    }

    /// Placeholder names in order of first appearance, de-duplicated.
    pub fn placeholder_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for capture in PLACEHOLDER_REGEX.captures_iter(&self.template) {
            let name = &capture[1];
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Resolve placeholders by literal substring substitution. Placeholders
    /// without a supplied value remain verbatim.
    pub fn resolve(&self, values: &BTreeMap<String, String>) -> String {
        let mut resolved = self.template.clone();
        for (name, value) in values {
            resolved = resolved.replace(&format!("{{{}}}", name), value);
        }
        resolved
    }
}
