//! Statement nodes for the Jay AST.

use crate::token::Span;

use super::expr::{Expr, Ident};

/// The kind of a statement in the Jay language.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// A variable binding: `let <name> = <expr>;`.
    ///
    /// The name is always present; a `let` without a valid identifier
    /// fails to parse and is dropped from the program with an error.
    Let {
        /// The name being bound.
        name: Ident,
        /// The bound expression.
        value: Expr,
    },

    /// A return statement: `return <expr>;`.
    Return(Expr),

    /// A bare expression in statement position, with an optional
    /// trailing semicolon.
    Expr(Expr),
}

/// A statement in the Jay language with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    /// Renders this statement.
    ///
    /// `let` and `return` statements render with a trailing semicolon;
    /// expression statements render as their expression alone.
    pub fn render(&self) -> String {
        match &self.kind {
            StmtKind::Let { name, value } => {
                format!("let {} = {};", name.name, value.render())
            }
            StmtKind::Return(value) => format!("return {};", value.render()),
            StmtKind::Expr(expr) => expr.render(),
        }
    }
}

/// A braced sequence of statements.
///
/// Blocks appear as `if` arms and function bodies. A block never appears
/// bare in statement position; the parser only builds one behind `{`.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements in this block, in source order.
    pub statements: Vec<Stmt>,
    /// The source location of this block, from `{` to `}`.
    pub span: Span,
}

impl Block {
    /// Creates a new block with the given statements and span.
    pub fn new(statements: Vec<Stmt>, span: Span) -> Self {
        Block { statements, span }
    }

    /// Renders the block body: the concatenation of its statements'
    /// renders, without braces (the parent node supplies those).
    pub fn render(&self) -> String {
        self.statements.iter().map(Stmt::render).collect()
    }
}
