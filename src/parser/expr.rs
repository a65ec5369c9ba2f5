use tracing::trace;

use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{
            BooleanExpr, CallExpr, FnExpr, Identifier, IfExpr, InfixExpr, IntegerExpr, PrefixExpr,
            StringExpr,
        },
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

// Expression routines start on the expression's first token and stop on its
// last one, leaving whatever follows in the peek slot.

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, ParseError> {
    parser.enter_nesting()?;
    let result = parse_expr_with_power(parser, bp);
    parser.leave_nesting();
    result
}

fn parse_expr_with_power(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, ParseError> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            return Err(ParseError::NoPrefixParseFn {
                kind: token_kind,
                literal: parser.current_token().literal.clone(),
            })
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the current level, fold it into lhs
    while !parser.peek_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let led = match parser.get_led_lookup().get(&parser.peek_token_kind()) {
            Some(led) => *led,
            None => return Ok(left),
        };

        parser.advance();
        trace!(operator = %parser.current_token().kind, "led");

        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let token = parser.current_token().clone();

    Ok(ExprWrapper::new(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(ExprWrapper::new(IntegerExpr { token, value })),
        Err(_) => Err(ParseError::IntegerParse {
            literal: token.literal,
        }),
    }
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let token = parser.current_token().clone();

    Ok(ExprWrapper::new(StringExpr {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    Ok(ExprWrapper::new(BooleanExpr {
        token: parser.current_token().clone(),
        value: parser.current_is(TokenKind::True),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(ExprWrapper::new(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right,
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Result<ExprWrapper, ParseError> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    // Same power on the right keeps equal-precedence chains left-associative
    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left,
        right,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    // if (<condition>) { ... } else { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(ExprWrapper::new(IfExpr {
        token,
        condition,
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    // fn(<params>) { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_fn_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(ExprWrapper::new(FnExpr {
        token,
        parameters,
        body,
    }))
}

fn parse_fn_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, ParseError> {
    let mut parameters = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(parameters);
    }

    loop {
        parser.expect_peek(TokenKind::Identifier)?;
        let token = parser.current_token().clone();
        parameters.push(Identifier {
            value: token.literal.clone(),
            token,
        });

        if !parser.peek_is(TokenKind::Comma) {
            break;
        }
        parser.advance();
    }

    parser.expect_peek(TokenKind::CloseParen)?;
    Ok(parameters)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    function: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, ParseError> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Ok(ExprWrapper::new(CallExpr {
        token,
        function,
        arguments,
    }))
}

fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<ExprWrapper>, ParseError> {
    let mut arguments = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(arguments);
    }

    parser.advance();
    arguments.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;
    Ok(arguments)
}
