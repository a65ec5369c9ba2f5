//! Error types for the front end.
//!
//! This module defines the syntax errors the parser collects:
//!
//! - Unexpected-token errors carrying the expected and actual kinds
//! - Missing prefix parse functions for tokens that cannot start an expression
//! - Integer literals that do not fit
//! - Nesting past the configured depth limit

pub mod errors;

#[cfg(test)]
mod tests;
