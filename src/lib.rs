#![allow(clippy::module_inception)]

//! Front end for a small expression language: a pull-based tokenizer and a
//! Pratt parser that builds an AST while collecting, rather than stopping
//! on, syntax errors.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;
