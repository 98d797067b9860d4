use std::fmt;

/// The value a single chip represents (e.g., an email address).
///
/// Immutable after construction: a `TokenView` is bound to exactly one
/// `Token` for its entire lifetime and exposes it read-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    display_text: String,
}

impl Token {
    pub fn new(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
        }
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text)
    }
}
