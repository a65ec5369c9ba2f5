use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A syntax error recorded while parsing.
///
/// Errors are collected by the parser rather than aborting it; the `Display`
/// output is the human-readable message handed to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken {
        expected: TokenKind,
        got: TokenKind,
        literal: String,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind, literal: String },
    #[error("could not parse {literal:?} as integer")]
    IntegerParse { literal: String },
    #[error("expression nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
}

impl ParseError {
    pub fn unexpected_token(expected: TokenKind, got: TokenKind, literal: &str) -> Self {
        ParseError::UnexpectedToken {
            expected,
            got,
            literal: literal.to_string(),
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ParseError::IntegerParse { .. } => "IntegerParse",
            ParseError::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ParseError::UnexpectedToken { expected, literal, .. } => {
                ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, expected `{}` here",
                    literal, expected
                ))
            }
            ParseError::NoPrefixParseFn { literal, .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                literal
            )),
            ParseError::IntegerParse { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ParseError::NestingTooDeep { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
