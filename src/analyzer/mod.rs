//! # Analyzer (Parser) System
//!
//! The analyzer turns the token sequence held in a
//! [`ParseState`](state::ParseState) into a syntax forest using composable
//! parser functions.
//!
//! ## Core Components
//!
//! * **Parser Trait**: the parsing contract ([`core`])
//! * **Parse State**: tokens, cursor, element stack and cut marker ([`state`])
//! * **Combinators**: primitives, backtracking, repetition and node building
//!   ([`combinators`], constructed through [`prelude`])
//!
//! ## Outcomes
//!
//! Every parser returns `Ok(true)` on a match and `Ok(false)` on an ordinary
//! failure, which enclosing alternatives recover from. `Err` ends the parse
//! attempt: either a cut forbade backtracking, or the grammar itself is
//! broken.
//!
//! ## Usage Example
//!
//! ```rust
//! use descent::analyzer::prelude::*;
//! use descent::tokenizer::{PatternDef, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::with_definitions([
//!     PatternDef::regex("number", "[0-9]+"),
//!     PatternDef::literal("plus", "+"),
//! ])?;
//! let mut state = tokenizer.tokenize("1 + 2")?;
//!
//! let sum = node(
//!     "sum",
//!     rule(|s| {
//!         Ok(match_token("number").parse(s)?
//!             && many(bt(rule(|s| {
//!                 Ok(match_token("plus").parse(s)? && match_token("number").parse(s)?)
//!             })))
//!             .parse(s)?)
//!     }),
//! );
//! assert!(sum.parse(&mut state)?);
//! assert_eq!(state.stack()[0].to_string(), "(sum 1 + 2)");
//! # Ok::<(), descent::Error>(())
//! ```

pub mod combinators;
pub mod core;
pub mod prelude;
pub mod state;

pub use self::core::ParseError;
pub use self::core::ParseResult;
pub use self::core::Parser;
pub use state::ParseState;
