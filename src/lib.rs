//! # descent: a recursive-descent parsing engine
//!
//! `descent` builds parsers directly out of small composable functions that
//! all operate on one shared, mutable [`ParseState`](analyzer::ParseState).
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source Text → Tokenizer → ParseState → Grammar (parsers) → Syntax Forest
//! ```
//!
//! ### Stage 1: Tokenization
//!
//! The [`tokenizer`] module merges an ordered list of named patterns into a
//! single scanner. Whitespace is dropped by default and spans no pattern
//! matches are handed to a replaceable handler.
//!
//! ### Stage 2: Parsing
//!
//! The [`analyzer`] module provides the primitives (`match_token`, `eat`,
//! `peek`, `not`, `end_of_input`, `cut`) and combinators (`bt`, `many`,
//! `node`, `cnode`, ...) grammar authors compose into rules. Matched tokens and
//! built nodes accumulate on the state's stack, which is the resulting forest.
//!
//! ## Failure Channels
//!
//! * **No match**: `Ok(false)`, recovered from by enclosing alternatives
//! * **Commit abort**: [`ParseError::Committed`](analyzer::ParseError::Committed)
//!   once a failure would backtrack across a `cut`
//! * **Configuration errors**: broken patterns, empty matches and
//!   non-consuming repetition, reported distinctly from both
//!
//! ## Configuration
//!
//! [`config::TokenizerConfig`] describes a pattern set in JSON and
//! [`Tokenizer::from_config`](tokenizer::Tokenizer::from_config) builds from it.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod parser;
pub mod tokenizer;

// Re-exports
pub use analyzer::{ParseError, ParseResult, ParseState, Parser};
pub use error::*;
pub use parser::parse;
pub use tokenizer::{PatternDef, Token, Tokenizer, TokenizerError};
