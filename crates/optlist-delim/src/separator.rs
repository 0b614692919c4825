//! Column separator handling for pasted delimited text.

use serde::{Deserialize, Serialize};

/// Longest accepted separator, in characters.
pub const MAX_SEPARATOR_LEN: usize = 10;

/// A column separator of one to ten characters.
///
/// Operators type separators literally, so the common control characters are
/// accepted in escaped form: `\t`, `\n`, and `\r` (case-insensitive). Blank
/// input falls back to the tab default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Separator(String);

impl Separator {
    /// The tab separator used when nothing else is configured.
    pub fn tab() -> Self {
        Self("\t".to_string())
    }

    /// Parses operator input into a separator.
    ///
    /// Escaped control characters are decoded; anything else is taken
    /// literally and truncated to [`MAX_SEPARATOR_LEN`] characters.
    pub fn parse(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "\\t" => return Self("\t".to_string()),
            "\\n" => return Self("\n".to_string()),
            "\\r" => return Self("\r".to_string()),
            _ => {}
        }
        let literal: String = input.chars().take(MAX_SEPARATOR_LEN).collect();
        if literal.is_empty() {
            Self::tab()
        } else {
            Self(literal)
        }
    }

    /// The raw separator text used for splitting and joining.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The separator in escaped form, suitable for echoing to an operator.
    pub fn display_escaped(&self) -> String {
        match self.0.as_str() {
            "\t" => "\\t".to_string(),
            "\n" => "\\n".to_string(),
            "\r" => "\\r".to_string(),
            other => other.to_string(),
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::tab()
    }
}
