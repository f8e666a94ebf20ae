//! Text-kind classification.
//!
//! Captured text is assigned a [`TextKind`] by matching against a fixed set
//! of patterns in priority order. The regexes are compiled once at first
//! use.

use lazy_static::lazy_static;
use regex::Regex;

use super::item::TextKind;

lazy_static! {
    static ref URL_REGEX: Regex = Regex::new(
        r"^(https?://)([-a-zA-Z0-9]+\.)+[a-zA-Z0-9]+([-a-zA-Z0-9@:%_\+.~#?&//=]*)$"
    )
    .unwrap();

    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@([A-Za-z0-9-]+\.)+[A-Za-z]{2,}$").unwrap();

    /// Loose international phone form: optional +, digits with common
    /// separators, at least seven digits overall.
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 ().\-]{5,18}[0-9]$").unwrap();

    /// Hex colors (#rgb, #rrggbb, #rrggbbaa) and rgb()/rgba() literals.
    static ref COLOR_REGEX: Regex = Regex::new(
        r"^(#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|rgba?\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*(,\s*(0|1|0?\.\d+)\s*)?\))$"
    )
    .unwrap();

    /// Common programming-language keywords and shapes.
    static ref CODE_REGEX: Regex = Regex::new(
        r"(\{|\}|function\s+\w+\s*\(|class\s+\w+|public\s+|private\s+|def\s+\w+|fn\s+\w+|impl|struct|enum|for\s+.*\{|if\s+.*\{|while\s+.*\{|match\s+.*\{)"
    )
    .unwrap();
}

/// Classify text content, checking the specific kinds in priority order and
/// falling back to plain text.
pub fn classify_text(content: &str) -> TextKind {
    let content = content.trim();
    if content.is_empty() {
        return TextKind::Plain;
    }

    if URL_REGEX.is_match(content) {
        TextKind::Url
    } else if EMAIL_REGEX.is_match(content) {
        TextKind::Email
    } else if !content.contains('\n') && PHONE_REGEX.is_match(content) {
        TextKind::Phone
    } else if COLOR_REGEX.is_match(content) {
        TextKind::Color
    } else if looks_like_json(content) {
        TextKind::Json
    } else if content.len() > 10 && CODE_REGEX.is_match(content) {
        TextKind::Code
    } else {
        TextKind::Plain
    }
}

/// JSON detection parses for real instead of pattern-matching; only object
/// and array roots count, so a bare number or quoted word stays plain text.
fn looks_like_json(content: &str) -> bool {
    if !(content.starts_with('{') || content.starts_with('[')) {
        return false;
    }
    serde_json::from_str::<serde_json::Value>(content).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_url() {
        assert_eq!(classify_text("https://www.example.com/page.html"), TextKind::Url);
        assert_eq!(
            classify_text("https://example.com/search?q=rust&lang=en"),
            TextKind::Url
        );
    }

    #[test]
    fn detects_email() {
        assert_eq!(classify_text("user.name+tag@example.co.uk"), TextKind::Email);
    }

    #[test]
    fn detects_phone() {
        assert_eq!(classify_text("+1 (555) 010-2345"), TextKind::Phone);
        assert_eq!(classify_text("0123456789"), TextKind::Phone);
    }

    #[test]
    fn detects_color() {
        assert_eq!(classify_text("#a1b2c3"), TextKind::Color);
        assert_eq!(classify_text("#fff"), TextKind::Color);
        assert_eq!(classify_text("rgb(12, 34, 56)"), TextKind::Color);
        assert_eq!(classify_text("rgba(12, 34, 56, 0.5)"), TextKind::Color);
    }

    #[test]
    fn detects_json() {
        assert_eq!(classify_text(r#"{"name": "value", "n": 3}"#), TextKind::Json);
        assert_eq!(classify_text("[1, 2, 3]"), TextKind::Json);
        // Malformed JSON falls through to other kinds.
        assert_ne!(classify_text(r#"{"name": unquoted}"#), TextKind::Json);
    }

    #[test]
    fn detects_code() {
        let rust = "fn main() {\n    println!(\"Hello, World!\");\n}";
        assert_eq!(classify_text(rust), TextKind::Code);

        let js = "function greet(name) {\n    return name;\n}";
        assert_eq!(classify_text(js), TextKind::Code);
    }

    #[test]
    fn plain_text_falls_through() {
        assert_eq!(
            classify_text("This is just a plain sentence without any special format."),
            TextKind::Plain
        );
    }

    #[test]
    fn empty_content_is_plain() {
        assert_eq!(classify_text(""), TextKind::Plain);
        assert_eq!(classify_text("   "), TextKind::Plain);
    }
}
