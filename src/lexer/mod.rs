//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization driven by anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - String escapes, comments and whitespace
//! - The `TokenSource` seam the parser reads from

pub mod lexer;
pub mod tokens;
