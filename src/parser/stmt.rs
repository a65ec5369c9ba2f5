use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

// Statement routines start on the statement's first token and stop on its
// last one (the `;` when present); the caller advances past it.

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        token: parser.current_token().clone(),
        value: parser.current_token().literal.clone(),
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(StmtWrapper::new(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(StmtWrapper::new(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(StmtWrapper::new(ExpressionStmt { token, expression }))
}

/// Parses `{ ... }` starting on the opening brace, stopping on the closing one.
///
/// Statements inside the block fail independently, exactly as they do at the
/// top level. Running into `EOF` before the closing brace fails the block.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, ParseError> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_is(TokenKind::CloseCurly) {
        if parser.current_is(TokenKind::EOF) {
            return Err(ParseError::unexpected_token(
                TokenKind::CloseCurly,
                TokenKind::EOF,
                &parser.current_token().literal,
            ));
        }

        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => parser.record_error(error),
        }
        parser.advance();
    }

    Ok(BlockStmt { token, statements })
}
