//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser pulls tokens on demand through a [`TokenSource`], keeping only
//! the current token and one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind, TokenSource},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Default cap on expression nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// A parser is single-use: it owns its token source, its lookup tables and
/// the errors collected during one parse.
pub struct Parser {
    /// Where tokens are pulled from
    source: Box<dyn TokenSource>,
    /// The token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors collected so far, in the order they were found
    errors: Vec<ParseError>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Maximum expression nesting depth
    max_depth: usize,
    /// Current expression nesting depth
    depth: usize,
}

impl Parser {
    /// Creates a new Parser reading from `source`.
    ///
    /// The lookup tables are populated and the cursor is primed so that both
    /// the current and the peek token are valid before any parsing happens.
    pub fn new(source: impl TokenSource + 'static) -> Self {
        let mut parser = Parser {
            source: Box::new(source),
            current: Token::eof(),
            peek: Token::eof(),
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            depth: 0,
        };
        create_token_lookups(&mut parser);

        parser.peek = parser.source.next_token();
        parser.advance();
        parser
    }

    /// Creates a parser over source text using the built-in [`Lexer`].
    pub fn from_source(source: &str) -> Self {
        Parser::new(Lexer::new(source))
    }

    /// Sets the maximum expression nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the lookahead into the current slot and pulls a new lookahead.
    ///
    /// Once `EOF` has been seen the source is not asked again.
    pub fn advance(&mut self) {
        let next = if self.peek.is(TokenKind::EOF) {
            Token::eof()
        } else {
            self.source.next_token()
        };

        self.current = mem::replace(&mut self.peek, next);
        trace!(kind = %self.current.kind, literal = %self.current.literal, "advance");
    }

    /// Expects the lookahead token to be of the given kind.
    ///
    /// On a match the parser advances onto it. Otherwise nothing is consumed
    /// and an unexpected-token error is returned for the caller to propagate.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_is(expected_kind) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(
                expected_kind,
                self.peek.kind,
                &self.peek.literal,
            ))
        }
    }

    /// Binding power of the lookahead token; `Lowest` for non-operators.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek.kind)
    }

    /// Binding power of the current token; `Lowest` for non-operators.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Enters one level of expression nesting, failing past the limit.
    pub(crate) fn enter_nesting(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Records an error that cost the parser a statement.
    pub(crate) fn record_error(&mut self, error: ParseError) {
        debug!(error = %error, "dropping statement");
        self.errors.push(error);
    }

    /// Errors collected so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Errors collected so far, as human-readable messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Parses statements until `EOF`.
    ///
    /// Always yields a program. Statements that fail to parse are left out
    /// and their errors recorded; parsing carries on with the next token.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => self.record_error(error),
            }
            self.advance();
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Consumes the parser, returning the collected errors.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance
/// and parses all statements until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Program, possibly partial
/// - Every error collected along the way (empty on a clean parse)
pub fn parse(source: impl TokenSource + 'static) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Tokenizes and parses source text in one step.
pub fn parse_source(source: &str) -> (Program, Vec<ParseError>) {
    parse(Lexer::new(source))
}
