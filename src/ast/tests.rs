//! Unit tests for the AST module.
//!
//! Nodes are built by hand here so rendering is checked independently of the parser.

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    ast::{Expr, ExprType, ExprWrapper, Node, Program, Stmt, StmtType, StmtWrapper},
    expressions::{
        BooleanExpr, CallExpr, FnExpr, Identifier, IfExpr, InfixExpr, IntegerExpr, PrefixExpr,
        StringExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

fn ident(name: &str) -> Identifier {
    Identifier {
        token: Token::new(TokenKind::Identifier, name),
        value: name.to_string(),
    }
}

fn int(value: i64) -> ExprWrapper {
    ExprWrapper::new(IntegerExpr {
        token: Token::new(TokenKind::Integer, value.to_string()),
        value,
    })
}

fn block(statements: Vec<StmtWrapper>) -> BlockStmt {
    BlockStmt {
        token: Token::new(TokenKind::OpenCurly, "{"),
        statements,
    }
}

fn expression_stmt(expression: ExprWrapper) -> StmtWrapper {
    StmtWrapper::new(ExpressionStmt {
        token: Token::new(TokenKind::Identifier, expression.token_literal()),
        expression,
    })
}

#[test]
fn test_program_render() {
    let program = Program {
        statements: vec![StmtWrapper::new(LetStmt {
            token: Token::new(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: ExprWrapper::new(ident("anotherVar")),
        })],
    };

    assert_eq!(program.render(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_empty_program() {
    let program = Program::new();

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.render(), "");
}

#[test]
fn test_program_render_separates_statements() {
    let program = Program {
        statements: vec![
            StmtWrapper::new(ReturnStmt {
                token: Token::new(TokenKind::Return, "return"),
                value: int(5),
            }),
            expression_stmt(ExprWrapper::new(ident("x"))),
            expression_stmt(ExprWrapper::new(ident("y"))),
        ],
    };

    assert_eq!(program.len(), 3);
    assert_eq!(program.render(), "return 5; x; y");
    assert_eq!(program.token_literal(), "return");
}

#[test]
fn test_block_render_closes_inner_expression_statements() {
    let negated = ExprWrapper::new(PrefixExpr {
        token: Token::new(TokenKind::Dash, "-"),
        operator: "-".to_string(),
        right: ExprWrapper::new(ident("b")),
    });
    let body = block(vec![
        expression_stmt(ExprWrapper::new(ident("a"))),
        expression_stmt(negated),
    ]);

    assert_eq!(body.render(), "{ a; (-b) }");
}

#[test]
fn test_prefix_and_infix_render() {
    let prefix = ExprWrapper::new(PrefixExpr {
        token: Token::new(TokenKind::Dash, "-"),
        operator: "-".to_string(),
        right: ExprWrapper::new(ident("a")),
    });
    let infix = InfixExpr {
        token: Token::new(TokenKind::Star, "*"),
        left: prefix,
        operator: "*".to_string(),
        right: int(2),
    };

    assert_eq!(infix.render(), "((-a) * 2)");
    assert_eq!(infix.token_literal(), "*");
}

#[test]
fn test_string_render_escapes() {
    let string = StringExpr {
        token: Token::new(TokenKind::String, "say \"hi\"\n"),
        value: "say \"hi\"\n".to_string(),
    };

    assert_eq!(string.render(), r#""say \"hi\"\n""#);
}

#[test]
fn test_if_render() {
    let condition = ExprWrapper::new(BooleanExpr {
        token: Token::new(TokenKind::True, "true"),
        value: true,
    });
    let if_expr = IfExpr {
        token: Token::new(TokenKind::If, "if"),
        condition,
        consequence: block(vec![expression_stmt(ExprWrapper::new(ident("x")))]),
        alternative: Some(block(vec![])),
    };

    assert_eq!(if_expr.render(), "if (true) { x } else { }");
}

#[test]
fn test_fn_and_call_render() {
    let function = FnExpr {
        token: Token::new(TokenKind::Fn, "fn"),
        parameters: vec![ident("x"), ident("y")],
        body: block(vec![StmtWrapper::new(ReturnStmt {
            token: Token::new(TokenKind::Return, "return"),
            value: ExprWrapper::new(ident("x")),
        })]),
    };
    assert_eq!(function.render(), "fn(x, y) { return x; }");

    let call = CallExpr {
        token: Token::new(TokenKind::OpenParen, "("),
        function: ExprWrapper::new(ident("add")),
        arguments: vec![int(1), int(2)],
    };
    assert_eq!(call.render(), "add(1, 2)");
}

#[test]
fn test_wrapper_downcast_and_types() {
    let stmt = expression_stmt(int(7));

    assert_eq!(stmt.get_stmt_type(), StmtType::ExpressionStmt);
    let inner = stmt.downcast_ref::<ExpressionStmt>().unwrap();
    assert_eq!(inner.expression.get_expr_type(), ExprType::Integer);
    assert_eq!(inner.expression.downcast_ref::<IntegerExpr>().unwrap().value, 7);
    assert!(stmt.downcast_ref::<LetStmt>().is_none());
    assert_eq!(stmt.to_string(), "7");
}
