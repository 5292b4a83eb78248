//! # Core Parser Definitions
//!
//! This module defines the parser interface and the error channel that sits
//! beside ordinary match failure.

use thiserror::Error;

use super::state::ParseState;

/// Parser trait defines the core parsing interface.
///
/// A parser works on the shared [`ParseState`] in place.
///
/// # Returns
///
/// * `Ok(true)` - matched; the state may have advanced
/// * `Ok(false)` - no match; primitives leave the state untouched, composite
///   parsers are expected to be wrapped in `bt` (or `node`) so they do too
/// * `Err(error)` - the whole parse attempt is over, see [`ParseError`]
pub trait Parser {
    fn parse(&self, state: &mut ParseState) -> ParseResult;
}

/// Plain functions and closures are parsers, which is how recursive rules are
/// written.
impl<F> Parser for F
where
    F: Fn(&mut ParseState) -> ParseResult,
{
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        self(state)
    }
}

pub type ParseResult = Result<bool, ParseError>;

/// Errors that terminate a parse attempt.
///
/// Ordinary match failure is `Ok(false)`, never one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A failure tried to backtrack to or before an active cut.
    ///
    /// `offset` is the byte offset in the input of the token at the cut, or
    /// the end of the input when the cut sits past the last token.
    #[error(
        "Committed at `{label}` (token {cut_position}, offset {offset}): cannot backtrack to token {checkpoint}, stopped at token {cursor}"
    )]
    Committed {
        label: String,
        cut_position: usize,
        offset: usize,
        checkpoint: usize,
        cursor: usize,
    },
    /// A repeated parser succeeded without consuming input.
    #[error("Repetition made no progress at token {cursor}")]
    NoProgress { cursor: usize },
}

impl ParseError {
    /// True for grammar defects, false for the commit abort.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ParseError::NoProgress { .. })
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            ParseError::Committed { label, .. } => Some(label),
            ParseError::NoProgress { .. } => None,
        }
    }

    /// Byte offset of the cut for a commit abort.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Committed { offset, .. } => Some(*offset),
            ParseError::NoProgress { .. } => None,
        }
    }

    pub fn get_position(&self) -> usize {
        match self {
            ParseError::Committed { cut_position, .. } => *cut_position,
            ParseError::NoProgress { cursor } => *cursor,
        }
    }
}

/// An action's veto of a node the grammar matched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct Rejection {
    pub reason: String,
}

impl Rejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
