//! Global-hotkey shortcut value type.
//!
//! A shortcut is one or more modifiers plus a single key, written
//! `Ctrl+Shift+V`. Parsing is case-insensitive on the modifier names; the
//! key token is kept as written.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Super,
}

impl Modifier {
    fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Some(Modifier::Ctrl),
            "alt" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            "super" | "win" | "cmd" | "meta" => Some(Modifier::Super),
            _ => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Super => "Super",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("shortcut is not well-formed: {0:?}")]
pub struct ShortcutParseError(pub String);

impl FromStr for Shortcut {
    type Err = ShortcutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
        if tokens.len() < 2 || tokens.iter().any(|t| t.is_empty()) {
            return Err(ShortcutParseError(s.to_string()));
        }

        let (key_token, modifier_tokens) = tokens.split_last().expect("len checked above");

        let mut modifiers = Vec::with_capacity(modifier_tokens.len());
        for token in modifier_tokens {
            let modifier = Modifier::parse(token).ok_or_else(|| ShortcutParseError(s.to_string()))?;
            if modifiers.contains(&modifier) {
                return Err(ShortcutParseError(s.to_string()));
            }
            modifiers.push(modifier);
        }

        // The key must be a single printable token, not another modifier.
        if Modifier::parse(key_token).is_some() || !is_key_token(key_token) {
            return Err(ShortcutParseError(s.to_string()));
        }

        Ok(Shortcut {
            modifiers,
            key: key_token.to_string(),
        })
    }
}

fn is_key_token(token: &str) -> bool {
    if token.len() == 1 {
        return token.chars().all(|c| c.is_ascii_graphic());
    }
    // Function and navigation keys.
    matches!(
        token.to_ascii_lowercase().as_str(),
        "f1" | "f2" | "f3" | "f4" | "f5" | "f6" | "f7" | "f8" | "f9" | "f10" | "f11" | "f12"
            | "space" | "tab" | "insert" | "delete" | "home" | "end" | "pageup" | "pagedown"
            | "up" | "down" | "left" | "right" | "escape"
    )
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier)?;
        }
        write!(f, "{}", self.key)
    }
}
