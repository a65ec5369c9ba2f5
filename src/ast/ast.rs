use std::{
    any::Any,
    fmt::{Debug, Display},
    ops::Deref,
    slice::Iter,
};

/// Node Trait
///
/// The capability every AST node shares.
pub trait Node: Debug {
    /// Returns the literal text of the node's leading token.
    fn token_literal(&self) -> &str;
    /// Renders the node back to canonical source text.
    ///
    /// Sub-expressions are parenthesised so the output re-parses to the same tree.
    fn render(&self) -> String;
}

/// Statement Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StmtType {
    LetStmt,
    ReturnStmt,
    ExpressionStmt,
    BlockStmt,
}

/// Statement Trait
///
/// Defines the behavior of all statement types in the AST.
pub trait Stmt: Node {
    /// Returns the type of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
}

/// Statement Wrapper
///
/// Owns any statement kind behind a box, with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt>);

impl StmtWrapper {
    pub fn new<T: Stmt + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Deref for StmtWrapper {
    type Target = Box<dyn Stmt>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Node for StmtWrapper {
    fn token_literal(&self) -> &str {
        self.0.token_literal()
    }
    fn render(&self) -> String {
        self.0.render()
    }
}

impl Stmt for StmtWrapper {
    fn get_stmt_type(&self) -> StmtType {
        self.0.get_stmt_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
}

/// Renders a statement list separated by single spaces.
///
/// Every expression statement except the last is closed with `;`, otherwise a
/// following `(...)` would re-parse as a call on it.
pub fn render_statements(statements: &[StmtWrapper]) -> String {
    let last = statements.len().saturating_sub(1);

    statements
        .iter()
        .enumerate()
        .map(|(i, stmt)| match stmt.get_stmt_type() {
            StmtType::ExpressionStmt if i < last => format!("{};", stmt.render()),
            _ => stmt.render(),
        })
        .collect::<Vec<String>>()
        .join(" ")
}

impl Display for StmtWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Identifier,
    Integer,
    String,
    Boolean,
    Prefix,
    Infix,
    If,
    Fn,
    Call,
}

pub trait Expr: Node {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
}

/// Expression Wrapper
///
/// Owns any expression kind behind a box, with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Deref for ExprWrapper {
    type Target = Box<dyn Expr>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Node for ExprWrapper {
    fn token_literal(&self) -> &str {
        self.0.token_literal()
    }
    fn render(&self) -> String {
        self.0.render()
    }
}

impl Expr for ExprWrapper {
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
}

impl Display for ExprWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Program
///
/// The root of every parse. Statements are kept in source order; an empty
/// program is valid.
#[derive(Debug, Default)]
pub struct Program {
    pub statements: Vec<StmtWrapper>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }

    fn render(&self) -> String {
        render_statements(&self.statements)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
