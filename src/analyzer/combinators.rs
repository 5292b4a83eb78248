//! # Parser Combinators
//!
//! Building blocks grammar authors compose into recursive-descent parsers.
//! Each combinator is a small struct implementing [`Parser`]; the constructor
//! functions in [`prelude`](super::prelude) are the usual way to build them.
//!
//! ## Combinator Types
//!
//! * **Primitives**: `Peek`, `Match`, `Not`, `Eat`, `Any`, `Skip`, `EndOfInput`, `Cut`
//! * **Backtracking**: `Backtrack`, `Sequence`, `Choice`, `Optional`
//! * **Repetition**: `Many`, `Many1`
//! * **Tree construction**: `NodeRule` with its action chain
//! * **Utilities**: `Lazy`, `Trace`

use std::fmt;

use tracing::{debug, trace};

use super::core::{ParseError, ParseResult, Parser, Rejection};
use super::state::{Node, ParseState};

/// Peek: Succeeds without consuming if the current token has the given name
#[derive(Clone, Debug)]
pub struct Peek {
    name: String,
}

impl Peek {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Parser for Peek {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        Ok(state.peek(&self.name))
    }
}

/// Match: Pushes the current token if it has the given name
#[derive(Clone, Debug)]
pub struct Match {
    name: String,
}

impl Match {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Parser for Match {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        Ok(state.peek(&self.name) && state.consume_keep())
    }
}

/// Not: Pushes the current token if it exists and does not have the given name
#[derive(Clone, Debug)]
pub struct Not {
    name: String,
}

impl Not {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Parser for Not {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        Ok(!state.peek(&self.name) && state.consume_keep())
    }
}

/// Eat: Skips the current token if it has the given name
#[derive(Clone, Debug)]
pub struct Eat {
    name: String,
}

impl Eat {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Parser for Eat {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        Ok(state.peek(&self.name) && state.consume_skip())
    }
}

/// Any: Pushes whatever token is current
#[derive(Clone, Debug, Default)]
pub struct Any;

impl Parser for Any {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        Ok(state.consume_keep())
    }
}

/// Skip: Skips whatever token is current
#[derive(Clone, Debug, Default)]
pub struct Skip;

impl Parser for Skip {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        Ok(state.consume_skip())
    }
}

/// EndOfInput: Succeeds only once every token has been consumed
#[derive(Clone, Debug, Default)]
pub struct EndOfInput;

impl Parser for EndOfInput {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        Ok(state.is_at_end())
    }
}

/// Cut: Commits the parse at the current cursor; always succeeds
#[derive(Clone, Debug)]
pub struct Cut {
    label: String,
}

impl Cut {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Parser for Cut {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        state.set_cut(self.label.clone());
        Ok(true)
    }
}

/// Backtrack: Restores the state to where it was if the inner parser fails
///
/// The restore honors the cut marker: rolling back to or before a cut turns
/// the failure into [`ParseError::Committed`].
#[derive(Clone, Debug)]
pub struct Backtrack<P> {
    parser: P,
}

impl<P> Backtrack<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: Parser> Parser for Backtrack<P> {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        let checkpoint = state.checkpoint();
        if self.parser.parse(state)? {
            state.discard(checkpoint);
            return Ok(true);
        }
        state.restore(checkpoint)?;
        Ok(false)
    }
}

/// Sequence: Runs every parser in order; backtracks if any of them fails
pub struct Sequence {
    parsers: Vec<Box<dyn Parser>>,
}

impl Sequence {
    pub fn new(parsers: Vec<Box<dyn Parser>>) -> Self {
        Self { parsers }
    }
}

impl Parser for Sequence {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        let checkpoint = state.checkpoint();
        for parser in &self.parsers {
            if !parser.parse(state)? {
                state.restore(checkpoint)?;
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Choice: Tries each parser in order and succeeds with the first match
///
/// Alternatives must leave the state untouched when they fail, i.e. be
/// primitives or backtracking combinators.
pub struct Choice {
    parsers: Vec<Box<dyn Parser>>,
}

impl Choice {
    pub fn new(parsers: Vec<Box<dyn Parser>>) -> Self {
        Self { parsers }
    }
}

impl Parser for Choice {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        for parser in &self.parsers {
            if parser.parse(state)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Optional: Runs the inner parser once; succeeds either way
#[derive(Clone, Debug)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: Parser> Parser for Optional<P> {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        self.parser.parse(state)?;
        Ok(true)
    }
}

/// Runs `parser` until it fails, returning the number of matches.
///
/// A match that leaves the cursor where it was is a grammar defect: the loop
/// would never end.
fn repeat<P: Parser>(parser: &P, state: &mut ParseState) -> Result<usize, ParseError> {
    let mut count = 0;
    loop {
        let before = state.cursor();
        if !parser.parse(state)? {
            break;
        }
        if state.cursor() <= before {
            let err = ParseError::NoProgress { cursor: before };
            tracing::error!("{}", err);
            return Err(err);
        }
        count += 1;
    }
    trace!(
        target: "descent::many",
        iterations = count,
        cursor = state.cursor(),
        "repetition stopped"
    );
    Ok(count)
}

/// Many: Applies a backtracking parser zero or more times
///
/// Always succeeds unless the inner parser matches without consuming, which
/// is reported as [`ParseError::NoProgress`].
#[derive(Clone, Debug)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: Parser> Parser for Many<P> {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        repeat(&self.parser, state)?;
        Ok(true)
    }
}

/// Many1: Like Many, but requires at least one match
#[derive(Clone, Debug)]
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: Parser> Parser for Many1<P> {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        let checkpoint = state.checkpoint();
        if repeat(&self.parser, state)? > 0 {
            return Ok(true);
        }
        state.restore(checkpoint)?;
        Ok(false)
    }
}

/// Validates or rewrites a node once its rule has matched.
pub type Action = Box<dyn Fn(Node) -> Result<Node, Rejection>>;

/// NodeRule: Wraps what a parser pushed into a named node
///
/// Backtracks like [`Backtrack`]. On a match, if more than `min_children`
/// elements were pushed, they are replaced by one [`Node`] which then runs
/// through the action chain in registration order. Any action may reject
/// the node, and the match is then undone as a failure.
pub struct NodeRule<P> {
    name: String,
    parser: P,
    min_children: usize,
    actions: Vec<Action>,
}

impl<P> NodeRule<P> {
    pub fn new(name: impl Into<String>, parser: P, min_children: usize) -> Self {
        Self {
            name: name.into(),
            parser,
            min_children,
            actions: Vec::new(),
        }
    }

    /// Appends an action to the chain.
    pub fn action<F>(mut self, f: F) -> Self
    where
        F: Fn(Node) -> Result<Node, Rejection> + 'static,
    {
        self.actions.push(Box::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<P> fmt::Debug for NodeRule<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRule")
            .field("name", &self.name)
            .field("min_children", &self.min_children)
            .field("actions", &self.actions.len())
            .finish_non_exhaustive()
    }
}

impl<P: Parser> Parser for NodeRule<P> {
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        let checkpoint = state.checkpoint();
        if !self.parser.parse(state)? {
            state.restore(checkpoint)?;
            return Ok(false);
        }
        if state.pushed_since(&checkpoint) <= self.min_children {
            return Ok(true);
        }

        let mut node = state.take_node(&checkpoint, &self.name);
        // A veto past the cut aborts with the children still on the stack.
        let children = (!self.actions.is_empty() && state.is_committed_past(&checkpoint))
            .then(|| node.children.clone());
        for action in &self.actions {
            match action(node) {
                Ok(next) => node = next,
                Err(rejection) => {
                    debug!(node = %self.name, reason = %rejection, "action rejected node");
                    for child in children.into_iter().flatten() {
                        state.push(child);
                    }
                    state.restore(checkpoint)?;
                    return Ok(false);
                }
            }
        }
        state.push(node);
        Ok(true)
    }
}

/// Lazy: Builds the inner parser on every call
///
/// Lets rules refer to themselves, directly or through other rules.
#[derive(Clone)]
pub struct Lazy<F> {
    f: F,
}

impl<F> Lazy<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        (self.f)().parse(state)
    }
}

/// Trace: Hands the live state to a diagnostic callback; always succeeds
#[derive(Clone)]
pub struct Trace<F> {
    f: F,
}

impl<F> Trace<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Parser for Trace<F>
where
    F: Fn(&ParseState),
{
    fn parse(&self, state: &mut ParseState) -> ParseResult {
        (self.f)(state);
        Ok(true)
    }
}
