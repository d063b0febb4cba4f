use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{
        BinaryExpr, BooleanExpr, CallExpr, FnExpr, IfExpr, NumberExpr, PrefixExpr, SymbolExpr,
    },
    statements::{ExpressionStmt, ReturnStmt, VarDeclStmt},
};

/// Capability set shared by every tree node: report the literal text of the
/// token that introduced the node, and report the node's source extent.
///
/// Rendering a node back to source-equivalent text is done through
/// [`Display`], which every node also implements.
pub trait Node {
    fn token_literal(&self) -> &str;
    fn get_span(&self) -> &Span;
}

/// Statement Types
///
/// The closed family of statement variants in the AST. Exhaustive matching
/// over this enum is how downstream consumers (evaluator, rendering) walk
/// the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        match self {
            Stmt::VarDecl(stmt) => stmt.token_literal(),
            Stmt::Return(stmt) => stmt.token_literal(),
            Stmt::Expression(stmt) => stmt.token_literal(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Stmt::VarDecl(stmt) => stmt.get_span(),
            Stmt::Return(stmt) => stmt.get_span(),
            Stmt::Expression(stmt) => stmt.get_span(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::VarDecl(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Expression(stmt) => stmt.fmt(f),
        }
    }
}

/// Expression Types
///
/// The closed family of expression variants in the AST.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Symbol(SymbolExpr),
    Number(NumberExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    If(IfExpr),
    Fn(FnExpr),
    Call(CallExpr),
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        match self {
            Expr::Symbol(expr) => expr.token_literal(),
            Expr::Number(expr) => expr.token_literal(),
            Expr::Boolean(expr) => expr.token_literal(),
            Expr::Prefix(expr) => expr.token_literal(),
            Expr::Binary(expr) => expr.token_literal(),
            Expr::If(expr) => expr.token_literal(),
            Expr::Fn(expr) => expr.token_literal(),
            Expr::Call(expr) => expr.token_literal(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Expr::Symbol(expr) => expr.get_span(),
            Expr::Number(expr) => expr.get_span(),
            Expr::Boolean(expr) => expr.get_span(),
            Expr::Prefix(expr) => expr.get_span(),
            Expr::Binary(expr) => expr.get_span(),
            Expr::If(expr) => expr.get_span(),
            Expr::Fn(expr) => expr.get_span(),
            Expr::Call(expr) => expr.get_span(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Symbol(expr) => expr.fmt(f),
            Expr::Number(expr) => expr.fmt(f),
            Expr::Boolean(expr) => expr.fmt(f),
            Expr::Prefix(expr) => expr.fmt(f),
            Expr::Binary(expr) => expr.fmt(f),
            Expr::If(expr) => expr.fmt(f),
            Expr::Fn(expr) => expr.fmt(f),
            Expr::Call(expr) => expr.fmt(f),
        }
    }
}

/// The root of a parsed tree: an ordered sequence of top-level statements.
///
/// Owned by the caller once `parse` returns; the parser keeps no reference
/// to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for statement in &self.statements {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", statement)?;
            first = false;
        }
        Ok(())
    }
}
