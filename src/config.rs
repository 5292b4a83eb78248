use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::tokenizer::{
    pattern::DEFAULT_WHITESPACE_PATTERN,
    token::{TokenizerError, TokenizerResult},
};

/// Tokenizer settings, usually read from JSON:
///
/// ```json
/// {
///   "keep_whitespace": false,
///   "definitions": ["+", { "name": "number", "pattern": "[0-9]+" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub keep_whitespace: bool,

    #[serde(default = "default_whitespace")]
    pub whitespace: String,

    #[serde(default)]
    pub definitions: Vec<PatternConfig>,
}

/// One pattern definition. A bare string is a literal named after itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternConfig {
    Keyword(String),
    Literal { name: String, literal: String },
    Pattern { name: String, pattern: String },
}

fn default_whitespace() -> String {
    DEFAULT_WHITESPACE_PATTERN.to_string()
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            keep_whitespace: false,
            whitespace: default_whitespace(),
            definitions: Vec::new(),
        }
    }
}

impl TokenizerConfig {
    pub fn from_json(json: &str) -> TokenizerResult<Self> {
        serde_json::from_str(json).map_err(|e| TokenizerError::Config {
            message: e.to_string(),
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> TokenizerResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TokenizerError::Config {
            message: format!("{}: {}", path.display(), e),
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| TokenizerError::Config {
            message: format!("{}: {}", path.display(), e),
        })
    }
}
