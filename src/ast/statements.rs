use std::{any::Any, slice::Iter};

use crate::lexer::tokens::Token;

use super::{
    ast::{render_statements, ExprWrapper, Node, Stmt, StmtType, StmtWrapper},
    expressions::Identifier,
};

/// Let Statement
/// Binds the value of an expression to a name: `let <name> = <value>;`
#[derive(Debug)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: ExprWrapper,
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        format!(
            "{} {} = {};",
            self.token_literal(),
            self.name.render(),
            self.value.render()
        )
    }
}

impl Stmt for LetStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Return Statement
#[derive(Debug)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: ExprWrapper,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        format!("{} {};", self.token_literal(), self.value.render())
    }
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Expression Statement
/// An expression standing on its own, e.g. a bare call.
#[derive(Debug)]
pub struct ExpressionStmt {
    /// First token of the expression
    pub token: Token,
    pub expression: ExprWrapper,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        self.expression.render()
    }
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Block Statement
/// A braced statement list; the body of `if` branches and function literals.
#[derive(Debug)]
pub struct BlockStmt {
    pub token: Token,
    pub statements: Vec<StmtWrapper>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        if self.statements.is_empty() {
            return String::from("{ }");
        }

        format!("{{ {} }}", render_statements(&self.statements))
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
