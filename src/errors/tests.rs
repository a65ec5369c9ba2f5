//! Unit tests for error handling.
//!
//! This module contains tests for error names, messages and tips.

use crate::errors::errors::{ErrorTip, ParseError};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_unexpected_token_message() {
    let error = ParseError::unexpected_token(TokenKind::Assignment, TokenKind::Integer, "5");

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_unexpected_token_keeps_literal() {
    let error = ParseError::unexpected_token(TokenKind::Identifier, TokenKind::Integer, "838383");

    match error {
        ParseError::UnexpectedToken { literal, .. } => assert_eq!(literal, "838383"),
        other => panic!("expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = ParseError::NoPrefixParseFn {
        kind: TokenKind::Semicolon,
        literal: ";".to_string(),
    };

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(error.to_string(), "no prefix parse function for ; found");
}

#[test]
fn test_integer_parse_message() {
    let error = ParseError::IntegerParse {
        literal: "99999999999999999999".to_string(),
    };

    assert_eq!(error.get_error_name(), "IntegerParse");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_nesting_too_deep_message() {
    let error = ParseError::NestingTooDeep { limit: 8 };

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "expression nesting exceeds the limit of 8");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let error = ParseError::unexpected_token(TokenKind::CloseParen, TokenKind::EOF, "");
    let tip = error.get_tip().to_string();

    assert!(tip.contains("expected `)`"));
    assert_eq!(ErrorTip::None.to_string(), "");
}
