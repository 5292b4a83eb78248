//! # Pattern Definitions
//!
//! A [`PatternDef`] names one kind of token and carries the regex source that
//! recognizes it. Definitions are kept in an ordered list: the compiled scanner
//! tries them left to right at every position, so a definition that is a
//! prefix of a longer one must come after it.
//!
//! Three shapes are accepted:
//!
//! * [`PatternDef::keyword`]: a bare literal that doubles as its own name (`"+"`)
//! * [`PatternDef::literal`]: a named literal, escaped before compilation
//! * [`PatternDef::regex`]: a named regex source used as-is

use regex::Regex;

use super::token::{TokenizerError, TokenizerResult};

/// Name of the definition whose matches are dropped from the token sequence.
pub const WHITESPACE: &str = "whitespace";

/// Name handed to the unknown-span handler.
pub const UNKNOWN: &str = "unknown";

/// Whitespace pattern injected when no definition is named [`WHITESPACE`].
pub const DEFAULT_WHITESPACE_PATTERN: &str = r"\s+";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDef {
    name: String,
    source: String,
}

impl PatternDef {
    /// A literal whose text is also its token name.
    pub fn keyword(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            source: regex::escape(&text),
            name: text,
        }
    }

    /// A named literal. Regex metacharacters in `text` match themselves.
    pub fn literal(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            source: regex::escape(text),
        }
    }

    /// A named regex source.
    pub fn regex(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: pattern.into(),
        }
    }

    pub(crate) fn default_whitespace(pattern: &str) -> Self {
        Self::regex(WHITESPACE, pattern)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_whitespace(&self) -> bool {
        self.name == WHITESPACE
    }

    /// Checks the definition on its own so a broken source is reported at
    /// definition time, not on the first tokenize call.
    pub(crate) fn validate(&self) -> TokenizerResult<()> {
        if self.name.is_empty() {
            return Err(TokenizerError::InvalidPattern {
                name: self.name.clone(),
                message: "pattern name must not be empty".to_string(),
            });
        }
        if self.name == UNKNOWN {
            return Err(TokenizerError::InvalidPattern {
                name: self.name.clone(),
                message: format!("`{}` is reserved for unmatched spans", UNKNOWN),
            });
        }
        if self.source.is_empty() {
            return Err(TokenizerError::InvalidPattern {
                name: self.name.clone(),
                message: "pattern source must not be empty".to_string(),
            });
        }
        Regex::new(&self.source)
            .map(|_| ())
            .map_err(|e| TokenizerError::InvalidPattern {
                name: self.name.clone(),
                message: e.to_string(),
            })
    }
}

impl From<&str> for PatternDef {
    fn from(text: &str) -> Self {
        PatternDef::keyword(text)
    }
}

impl From<String> for PatternDef {
    fn from(text: String) -> Self {
        PatternDef::keyword(text)
    }
}
