//! Constructor functions for every combinator, plus the types a grammar
//! author needs alongside them.

pub use super::combinators::*;
pub use super::core::{ParseError, ParseResult, Parser, Rejection};
pub use super::state::{Checkpoint, CutMarker, Element, Node, ParseState};

/// Turns a closure into a parser rule, fixing its signature so the argument
/// and return types need no annotations.
pub fn rule<F>(f: F) -> F
where
    F: Fn(&mut ParseState) -> ParseResult,
{
    f
}

pub fn peek(name: impl Into<String>) -> Peek {
    Peek::new(name)
}

pub fn match_token(name: impl Into<String>) -> Match {
    Match::new(name)
}

pub fn not(name: impl Into<String>) -> Not {
    Not::new(name)
}

pub fn eat(name: impl Into<String>) -> Eat {
    Eat::new(name)
}

pub fn any() -> Any {
    Any
}

pub fn skip() -> Skip {
    Skip
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}

pub fn cut(label: impl Into<String>) -> Cut {
    Cut::new(label)
}

pub fn bt<P: Parser>(parser: P) -> Backtrack<P> {
    Backtrack::new(parser)
}

pub fn seq(parsers: Vec<Box<dyn Parser>>) -> Sequence {
    Sequence::new(parsers)
}

pub fn alt(parsers: Vec<Box<dyn Parser>>) -> Choice {
    Choice::new(parsers)
}

pub fn opt<P: Parser>(parser: P) -> Optional<P> {
    Optional::new(parser)
}

pub fn many<P: Parser>(parser: P) -> Many<P> {
    Many::new(parser)
}

pub fn many1<P: Parser>(parser: P) -> Many1<P> {
    Many1::new(parser)
}

/// Builds a node from whatever `parser` pushes, even a single element.
pub fn node<P: Parser>(name: impl Into<String>, parser: P) -> NodeRule<P> {
    NodeRule::new(name, parser, 0)
}

/// Builds a node only if `parser` pushes more than `min_children` elements.
pub fn node_min<P: Parser>(
    name: impl Into<String>,
    parser: P,
    min_children: usize,
) -> NodeRule<P> {
    NodeRule::new(name, parser, min_children)
}

/// Builds a node only when `parser` pushes two or more elements; a single
/// element passes through unwrapped.
pub fn cnode<P: Parser>(name: impl Into<String>, parser: P) -> NodeRule<P> {
    NodeRule::new(name, parser, 1)
}

pub fn action<P, F>(rule: NodeRule<P>, f: F) -> NodeRule<P>
where
    P: Parser,
    F: Fn(Node) -> Result<Node, Rejection> + 'static,
{
    rule.action(f)
}

pub fn lazy<F, P>(f: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(f)
}

pub fn trace<F>(f: F) -> Trace<F>
where
    F: Fn(&ParseState),
{
    Trace::new(f)
}
