use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::{
    pattern::{PatternDef, DEFAULT_WHITESPACE_PATTERN},
    scanner::Scanner,
};
use crate::analyzer::state::ParseState;
use crate::config::{PatternConfig, TokenizerConfig};

/// A named, positioned slice of the input.
///
/// `position` is the byte offset of `text` in the tokenized string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub name: String,
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(name: impl Into<String>, text: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            position,
        }
    }

    /// Byte offset just past the token.
    pub fn end(&self) -> usize {
        self.position + self.text.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenizerError {
    #[error("Invalid pattern `{name}`: {message}")]
    InvalidPattern { name: String, message: String },
    #[error("Pattern `{name}` matched an empty string at position {position}")]
    EmptyMatch { name: String, position: usize },
    #[error("Unknown token {text:?} at position {position}")]
    UnknownSpan { text: String, position: usize },
    #[error("Config error: {message}")]
    Config { message: String },
}

pub type TokenizerResult<T> = Result<T, TokenizerError>;

/// Receives `(name, text, position)` for every span no definition matched.
pub type UnknownHandler = Box<dyn Fn(&str, &str, usize) -> TokenizerResult<Token>>;

fn reject_unknown(_name: &str, text: &str, position: usize) -> TokenizerResult<Token> {
    Err(TokenizerError::UnknownSpan {
        text: text.to_string(),
        position,
    })
}

/// Builds a [`ParseState`] out of raw text using an ordered list of
/// [`PatternDef`]s.
///
/// The scanner is compiled on the first tokenize call after the definitions
/// change and reused until they change again.
pub struct Tokenizer {
    definitions: Vec<PatternDef>,
    whitespace_pattern: String,
    keep_whitespace: bool,
    on_unknown: UnknownHandler,
    scanner: Option<Scanner>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("definitions", &self.definitions)
            .field("whitespace_pattern", &self.whitespace_pattern)
            .field("keep_whitespace", &self.keep_whitespace)
            .field("compiled", &self.scanner.is_some())
            .finish_non_exhaustive()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
            whitespace_pattern: DEFAULT_WHITESPACE_PATTERN.to_string(),
            keep_whitespace: false,
            on_unknown: Box::new(reject_unknown),
            scanner: None,
        }
    }

    /// Creates a tokenizer from an ordered list of definitions, validating
    /// each one.
    pub fn with_definitions<I, D>(definitions: I) -> TokenizerResult<Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<PatternDef>,
    {
        let mut tokenizer = Self::new();
        for def in definitions {
            tokenizer.define(def)?;
        }
        Ok(tokenizer)
    }

    pub fn from_config(config: &TokenizerConfig) -> TokenizerResult<Self> {
        let mut tokenizer = Self::new().keep_whitespace(config.keep_whitespace);
        tokenizer.whitespace_pattern = config.whitespace.clone();
        PatternDef::default_whitespace(&tokenizer.whitespace_pattern).validate()?;
        for def in &config.definitions {
            tokenizer.define(match def {
                PatternConfig::Keyword(text) => PatternDef::keyword(text.as_str()),
                PatternConfig::Literal { name, literal } => PatternDef::literal(name, literal),
                PatternConfig::Pattern { name, pattern } => PatternDef::regex(name, pattern),
            })?;
        }
        Ok(tokenizer)
    }

    /// Adds a definition, or replaces the one with the same name in place.
    ///
    /// The source is checked immediately; a broken pattern never reaches the
    /// scanner.
    pub fn define(&mut self, def: impl Into<PatternDef>) -> TokenizerResult<&mut Self> {
        let def = def.into();
        def.validate().inspect_err(|e| tracing::error!("{}", e))?;

        match self.definitions.iter().position(|d| d.name() == def.name()) {
            Some(i) if self.definitions[i] == def => return Ok(self),
            Some(i) => self.definitions[i] = def,
            None => self.definitions.push(def),
        }
        self.scanner = None;
        Ok(self)
    }

    pub fn keep_whitespace(mut self, keep: bool) -> Self {
        self.keep_whitespace = keep;
        self
    }

    pub fn with_unknown_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &str, usize) -> TokenizerResult<Token> + 'static,
    {
        self.on_unknown = Box::new(handler);
        self
    }

    pub fn definitions(&self) -> &[PatternDef] {
        &self.definitions
    }

    /// Whether a compiled scanner is cached for the current definitions.
    pub fn is_compiled(&self) -> bool {
        self.scanner.is_some()
    }

    /// The definitions the scanner is built from: the user's, in order, plus
    /// the whitespace definition when none was given.
    fn effective_definitions(&self) -> Vec<PatternDef> {
        let mut definitions = self.definitions.clone();
        if !definitions.iter().any(PatternDef::is_whitespace) {
            definitions.push(PatternDef::default_whitespace(&self.whitespace_pattern));
        }
        definitions
    }

    /// Scans `input` into a token list.
    #[tracing::instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    pub fn scan(&mut self, input: &str) -> TokenizerResult<Vec<Token>> {
        let scanner = match self.scanner.take() {
            Some(scanner) => scanner,
            None => Scanner::compile(&self.effective_definitions())?,
        };
        let result = scanner.scan(input, self.keep_whitespace, self.on_unknown.as_ref());
        self.scanner = Some(scanner);

        let tokens = result?;
        tracing::debug!(tokens = tokens.len(), "tokenized input");
        Ok(tokens)
    }

    /// Scans `input` and returns a fresh [`ParseState`] positioned at the
    /// first token.
    pub fn tokenize(&mut self, input: &str) -> TokenizerResult<ParseState> {
        self.scan(input).map(ParseState::new)
    }
}
