mod common;

use descent::tokenizer::{PatternDef, Token, Tokenizer, TokenizerError, WHITESPACE};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use common::arithmetic_tokenizer;

fn letters() -> Tokenizer {
    Tokenizer::with_definitions(["a", "b"]).unwrap()
}

#[test]
fn it_filters_whitespace_keeping_offsets() {
    let tokens = letters().scan("a  b").unwrap();
    assert_eq!(tokens, vec![Token::new("a", "a", 0), Token::new("b", "b", 3)]);
}

#[test]
fn it_retains_whitespace_when_asked() {
    let tokens = letters().keep_whitespace(true).scan("a  b").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new("a", "a", 0),
            Token::new(WHITESPACE, "  ", 1),
            Token::new("b", "b", 3),
        ]
    );
}

#[test]
fn it_prefers_earlier_definitions() {
    // Longer pattern first: the arrow wins wherever it can.
    let mut longest_first =
        Tokenizer::with_definitions([PatternDef::literal("arrow", "->"), "-".into(), ">".into()])
            .unwrap();
    let tokens = longest_first.scan("->-").unwrap();
    let names: Vec<_> = tokens.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["arrow", "-"]);

    // Shorter prefix first: the arrow never gets a chance.
    let mut shortest_first =
        Tokenizer::with_definitions(["-".into(), ">".into(), PatternDef::literal("arrow", "->")])
            .unwrap();
    let tokens = shortest_first.scan("->-").unwrap();
    let names: Vec<_> = tokens.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["-", ">", "-"]);
}

#[test]
fn it_tokenizes_arithmetic() {
    let state = arithmetic_tokenizer().tokenize("12 + 7").unwrap();
    assert_eq!(
        state.tokens(),
        &[
            Token::new("number", "12", 0),
            Token::new("plus", "+", 3),
            Token::new("number", "7", 5),
        ]
    );
    assert_eq!(state.cursor(), 0);
}

#[test]
fn it_reports_unknown_span() {
    let err = arithmetic_tokenizer().tokenize("12 @ 7").unwrap_err();
    assert_eq!(
        err,
        TokenizerError::UnknownSpan {
            text: "@".to_string(),
            position: 3
        }
    );
    assert_eq!(err.to_string(), "Unknown token \"@\" at position 3");
}

#[test]
fn it_reports_leading_unknown_span() {
    let err = arithmetic_tokenizer().scan("x1").unwrap_err();
    assert_eq!(
        err,
        TokenizerError::UnknownSpan {
            text: "x".to_string(),
            position: 0
        }
    );
}

#[test]
fn it_rejects_zero_length_matches() {
    let mut tokenizer = Tokenizer::with_definitions([PatternDef::regex("digits", "[0-9]*")]).unwrap();
    let err = tokenizer.scan("a").unwrap_err();
    assert_eq!(
        err,
        TokenizerError::EmptyMatch {
            name: "digits".to_string(),
            position: 0
        }
    );
}

#[test]
fn it_rejects_invalid_pattern_at_definition_time() {
    let result = Tokenizer::with_definitions([PatternDef::regex("open", "(abc")]);
    assert!(matches!(
        result,
        Err(TokenizerError::InvalidPattern { name, .. }) if name == "open"
    ));
}

#[test]
fn it_tokenizes_empty_input() {
    assert!(arithmetic_tokenizer().scan("").unwrap().is_empty());
    assert!(arithmetic_tokenizer().scan("   ").unwrap().is_empty());
}

#[test]
fn it_counts_offsets_in_bytes() {
    let mut tokenizer = Tokenizer::with_definitions([PatternDef::regex("word", r"\w+")]).unwrap();
    let tokens = tokenizer.scan("héllo wörld").unwrap();
    assert_eq!(tokens[1], Token::new("word", "wörld", 7));
    assert_eq!(tokens[1].end(), 13);
}

proptest! {
    #[test]
    fn tokenizing_twice_is_identical(input in "[0-9+\\- ]{0,40}") {
        let mut tokenizer = arithmetic_tokenizer();
        let first = tokenizer.scan(&input).unwrap();
        let second = tokenizer.scan(&input).unwrap();
        prop_assert_eq!(&first, &second);

        // A fresh tokenizer over the same definitions agrees too.
        let third = arithmetic_tokenizer().scan(&input).unwrap();
        prop_assert_eq!(first, third);
    }

    #[test]
    fn tokens_point_back_into_input(input in "[0-9+\\- ]{0,40}") {
        let tokens = arithmetic_tokenizer().scan(&input).unwrap();
        for token in tokens {
            prop_assert_eq!(&input[token.position..token.end()], token.text.as_str());
        }
    }
}
