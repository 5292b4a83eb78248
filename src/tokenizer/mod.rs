//! # Tokenizer Component
//!
//! The tokenizer turns raw text into the flat token sequence the analyzer
//! consumes.
//!
//! ## Component Structure
//!
//! * [`pattern`]: named pattern definitions (keywords, literals, regexes)
//! * [`scanner`]: the single-pass scanner compiled from a definition list
//! * [`token`]: [`Token`](token::Token), [`Tokenizer`](token::Tokenizer) and
//!   [`TokenizerError`](token::TokenizerError)
//!
//! ## Scanning
//!
//! 1. **Input**: raw text
//! 2. **Processing**: one pass of the compiled scanner; whitespace matches are
//!    dropped unless retained, unmatched gaps go to the unknown-span handler
//! 3. **Output**: a fresh [`ParseState`](crate::analyzer::state::ParseState)
//!
//! ## Usage Example
//!
//! ```rust
//! use descent::tokenizer::{PatternDef, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::with_definitions([
//!     PatternDef::regex("number", "[0-9]+"),
//!     PatternDef::literal("plus", "+"),
//! ])?;
//! let state = tokenizer.tokenize("1 + 2")?;
//! assert_eq!(state.tokens().len(), 3);
//! # Ok::<(), descent::tokenizer::TokenizerError>(())
//! ```

pub mod pattern;
pub mod scanner;
pub mod token;

pub use pattern::{PatternDef, DEFAULT_WHITESPACE_PATTERN, UNKNOWN, WHITESPACE};
pub use token::{Token, Tokenizer, TokenizerError, TokenizerResult, UnknownHandler};
