//! # Parse State
//!
//! The one mutable record every parser works on: the token sequence, a cursor
//! into it, the element stack that doubles as scratch space and as the
//! emerging syntax forest, and the optional cut marker.
//!
//! The stack grows only by appends and shrinks only back to a length that a
//! [`Checkpoint`] recorded.

use std::fmt;

use serde::Serialize;

use super::core::ParseError;
use crate::tokenizer::token::Token;

/// A labeled group of elements built by a node rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub name: String,
    pub children: Vec<Element>,
}

impl Node {
    pub fn new(name: impl Into<String>, children: Vec<Element>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

/// An entry on the parse stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Element {
    Token(Token),
    Node(Node),
}

impl Element {
    pub fn name(&self) -> &str {
        match self {
            Element::Token(token) => &token.name,
            Element::Node(node) => &node.name,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Element::Token(token) => Some(token),
            Element::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Element::Node(node) => Some(node),
            Element::Token(_) => None,
        }
    }
}

impl From<Token> for Element {
    fn from(token: Token) -> Self {
        Element::Token(token)
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

/// Renders tokens as their text and nodes as s-expressions: `(expr 12 + 7)`.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Token(token) => write!(f, "{}", token),
            Element::Node(node) => write!(f, "{}", node),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.name)?;
        for child in &self.children {
            write!(f, " {}", child)?;
        }
        write!(f, ")")
    }
}

/// Saved `(cursor, stack length)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    cursor: usize,
    stack_len: usize,
}

impl Checkpoint {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn stack_len(&self) -> usize {
        self.stack_len
    }
}

/// Token index past which the parse may no longer backtrack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CutMarker {
    pub label: String,
    pub cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseState {
    tokens: Vec<Token>,
    cursor: usize,
    stack: Vec<Element>,
    cut: Option<CutMarker>,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            cursor: 0,
            stack: Vec::new(),
            cut: None,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn stack(&self) -> &[Element] {
        &self.stack
    }

    pub fn cut_marker(&self) -> Option<&CutMarker> {
        self.cut.as_ref()
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor == self.tokens.len()
    }

    /// Consumes the state, returning the stack as the resulting forest.
    pub fn into_forest(self) -> Vec<Element> {
        self.stack
    }

    /// True iff the current token exists and is named `name`.
    pub fn peek(&self, name: &str) -> bool {
        self.current_token().is_some_and(|token| token.name == name)
    }

    /// Pushes the current token onto the stack and advances.
    pub fn consume_keep(&mut self) -> bool {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.stack.push(Element::Token(token.clone()));
                self.cursor += 1;
                true
            }
            None => false,
        }
    }

    /// Advances past the current token without pushing it.
    pub fn consume_skip(&mut self) -> bool {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Commits the parse at the current cursor. Replaces any earlier marker.
    pub fn set_cut(&mut self, label: impl Into<String>) {
        let marker = CutMarker {
            label: label.into(),
            cursor: self.cursor,
        };
        tracing::trace!(label = %marker.label, cursor = marker.cursor, "cut");
        self.cut = Some(marker);
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.stack.push(element.into());
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            cursor: self.cursor,
            stack_len: self.stack.len(),
        }
    }

    /// Number of elements pushed since `checkpoint` was taken.
    pub fn pushed_since(&self, checkpoint: &Checkpoint) -> usize {
        self.stack.len().saturating_sub(checkpoint.stack_len)
    }

    /// Drops `checkpoint` once the speculative parse it guarded has matched.
    ///
    /// Nothing is undone; in debug builds this only checks that the cursor did
    /// not move backwards.
    pub fn discard(&self, checkpoint: Checkpoint) {
        debug_assert!(checkpoint.cursor <= self.cursor);
    }

    /// Whether restoring to `checkpoint` would retract past the cut marker.
    pub fn is_committed_past(&self, checkpoint: &Checkpoint) -> bool {
        self.cut
            .as_ref()
            .is_some_and(|cut| cut.cursor >= checkpoint.cursor)
    }

    /// Byte offset of the token at `index`, or the end of the last token.
    pub fn offset_of(&self, index: usize) -> usize {
        match self.tokens.get(index) {
            Some(token) => token.position,
            None => self.tokens.last().map(Token::end).unwrap_or_default(),
        }
    }

    /// Rolls the state back to `checkpoint`.
    ///
    /// Fails with [`ParseError::Committed`] instead when a cut marker sits at
    /// or after the checkpoint's cursor; the state is then left untouched so
    /// the caller can inspect where parsing stopped.
    pub fn restore(&mut self, checkpoint: Checkpoint) -> Result<(), ParseError> {
        if let Some(cut) = self.cut.as_ref().filter(|_| self.is_committed_past(&checkpoint)) {
            let err = ParseError::Committed {
                label: cut.label.clone(),
                cut_position: cut.cursor,
                offset: self.offset_of(cut.cursor),
                checkpoint: checkpoint.cursor,
                cursor: self.cursor,
            };
            tracing::debug!("{}", err);
            return Err(err);
        }
        debug_assert!(checkpoint.stack_len <= self.stack.len());
        self.cursor = checkpoint.cursor;
        self.stack.truncate(checkpoint.stack_len);
        Ok(())
    }

    /// Removes everything pushed since `checkpoint` and wraps it in a node.
    pub fn take_node(&mut self, checkpoint: &Checkpoint, name: &str) -> Node {
        let children = self.stack.split_off(checkpoint.stack_len.min(self.stack.len()));
        Node::new(name, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state() -> ParseState {
        ParseState::new(vec![
            Token::new("a", "a", 0),
            Token::new("b", "b", 1),
            Token::new("c", "c", 2),
        ])
    }

    #[test]
    fn test_primitives() {
        let mut state = state();
        assert!(state.peek("a"));
        assert!(!state.peek("b"));
        assert!(state.consume_keep());
        assert!(state.consume_skip());
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.stack().len(), 1);
        assert!(state.consume_keep());
        assert!(state.is_at_end());
        assert!(!state.consume_keep());
        assert!(!state.consume_skip());
        assert!(!state.peek("c"));
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_restore_without_cut() {
        let mut state = state();
        let cp = state.checkpoint();
        state.consume_keep();
        state.consume_keep();
        state.restore(cp).unwrap();
        assert_eq!(state.cursor(), 0);
        assert!(state.stack().is_empty());
    }

    #[test]
    fn test_restore_past_cut_aborts() {
        let mut state = state();
        let cp = state.checkpoint();
        state.consume_keep();
        state.set_cut("after-a");
        state.consume_keep();
        let err = state.restore(cp).unwrap_err();
        assert_eq!(
            err,
            ParseError::Committed {
                label: "after-a".to_string(),
                cut_position: 1,
                offset: 1,
                checkpoint: 0,
                cursor: 2,
            }
        );
        // Nothing was rolled back.
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.stack().len(), 2);
    }

    #[test]
    fn test_restore_after_cut_is_allowed() {
        let mut state = state();
        state.consume_keep();
        state.set_cut("first");
        state.consume_keep();
        let cp = state.checkpoint();
        state.consume_keep();
        state.restore(cp).unwrap();
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_offset_past_last_token() {
        let mut state = state();
        assert_eq!(state.offset_of(1), 1);
        while state.consume_skip() {}
        state.set_cut("end");
        let err = state.restore(Checkpoint { cursor: 0, stack_len: 0 }).unwrap_err();
        assert_eq!(err.offset(), Some(3));
    }

    #[test]
    fn test_last_cut_wins() {
        let mut state = state();
        state.set_cut("one");
        state.consume_skip();
        state.set_cut("two");
        assert_eq!(
            state.cut_marker(),
            Some(&CutMarker {
                label: "two".to_string(),
                cursor: 1
            })
        );
    }

    #[test]
    fn test_take_node_and_display() {
        let mut state = state();
        state.consume_keep();
        let cp = state.checkpoint();
        state.consume_keep();
        state.consume_keep();
        let node = state.take_node(&cp, "bc");
        state.push(node);
        assert_eq!(state.stack().len(), 2);
        assert_eq!(state.stack()[1].to_string(), "(bc b c)");
        assert_eq!(state.stack()[1].name(), "bc");
    }

    #[test]
    fn test_forest_serializes() {
        let node = Node::new("x", vec![Token::new("n", "1", 0).into()]);
        let json = serde_json::to_value(Element::Node(node)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "x",
                "children": [{ "name": "n", "text": "1", "position": 0 }]
            })
        );
    }
}
