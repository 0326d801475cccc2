//! Abstract Syntax Tree definitions for the Jay language.
//!
//! This module defines the data structures that represent parsed Jay
//! programs. The AST is produced by the [`crate::parser`] and handed to
//! callers as a [`Program`].
//!
//! # Structure
//!
//! The AST is a pure tree: every child node is owned exclusively by its
//! parent (`Box`/`Vec`, no back-pointers, no shared subtrees), and nodes are
//! never mutated after construction.
//!
//! - [`Program`] - The root node, an ordered sequence of statements
//! - [`Stmt`] - `let`, `return`, and expression statements
//! - [`Block`] - A braced statement sequence (`if` arms, function bodies)
//! - [`Expr`] - Expressions, from literals up to `if`/`fn`/call forms
//! - [`Ident`] - A bare name, used for `let` targets and parameters
//!
//! Each node includes source location information
//! ([`Span`](crate::token::Span)) and supports `render()`, which produces a
//! fully parenthesized, unambiguous form designed to make precedence and
//! associativity visible in tests.
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens

mod expr;
mod program;
mod stmt;


pub use expr::{Expr, ExprKind, Ident};
pub use program::Program;
pub use stmt::{Block, Stmt, StmtKind};
