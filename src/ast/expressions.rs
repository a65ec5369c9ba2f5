use std::any::Any;

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, ExprType, ExprWrapper, Node},
    statements::BlockStmt,
};

// LITERALS

/// Identifier
/// A name, used both as an expression and as the target of a `let`.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        self.value.clone()
    }
}

impl Expr for Identifier {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Identifier
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Integer Expression
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        self.token.literal.clone()
    }
}

impl Expr for IntegerExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Integer
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// String Expression
/// `value` holds the unescaped contents, without quotes.
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub token: Token,
    pub value: String,
}

impl Node for StringExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        let mut rendered = String::with_capacity(self.value.len() + 2);
        rendered.push('"');
        for ch in self.value.chars() {
            match ch {
                '\\' => rendered.push_str("\\\\"),
                '"' => rendered.push_str("\\\""),
                '\n' => rendered.push_str("\\n"),
                '\t' => rendered.push_str("\\t"),
                '\r' => rendered.push_str("\\r"),
                _ => rendered.push(ch),
            }
        }
        rendered.push('"');
        rendered
    }
}

impl Expr for StringExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::String
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Boolean Expression
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Node for BooleanExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        self.token.literal.clone()
    }
}

impl Expr for BooleanExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// COMPLEX

/// Prefix Expression
/// A unary operator applied to its operand: `-x`, `!x`.
#[derive(Debug)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        format!("({}{})", self.operator, self.right.render())
    }
}

impl Expr for PrefixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Infix Expression
/// A binary operator between two operands. `token` is the operator token.
#[derive(Debug)]
pub struct InfixExpr {
    pub token: Token,
    pub left: ExprWrapper,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        format!(
            "({} {} {})",
            self.left.render(),
            self.operator,
            self.right.render()
        )
    }
}

impl Expr for InfixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Infix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// If Expression
#[derive(Debug)]
pub struct IfExpr {
    pub token: Token,
    pub condition: ExprWrapper,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Node for IfExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        let mut rendered = format!(
            "if ({}) {}",
            self.condition.render(),
            self.consequence.render()
        );

        if let Some(alternative) = &self.alternative {
            rendered.push_str(" else ");
            rendered.push_str(&alternative.render());
        }

        rendered
    }
}

impl Expr for IfExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::If
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Function Literal
#[derive(Debug)]
pub struct FnExpr {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
}

impl Node for FnExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(|param| param.render())
            .collect::<Vec<String>>()
            .join(", ");

        format!(
            "{}({}) {}",
            self.token_literal(),
            parameters,
            self.body.render()
        )
    }
}

impl Expr for FnExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Fn
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Call Expression
/// `token` is the opening parenthesis.
#[derive(Debug)]
pub struct CallExpr {
    pub token: Token,
    pub function: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
}

impl Node for CallExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self) -> String {
        let arguments = self
            .arguments
            .iter()
            .map(|arg| arg.render())
            .collect::<Vec<String>>()
            .join(", ");

        format!("{}({})", self.function.render(), arguments)
    }
}

impl Expr for CallExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
