//! Top-level program structure for the Jay AST.

use super::stmt::Stmt;

/// The root node of a Jay program's AST.
///
/// A `Program` is the ordered sequence of statements the parser recognized.
/// Statements that failed to parse are omitted, so a program accompanied by
/// a non-empty error list may be partial; callers must consult
/// [`Parser::errors`](crate::parser::Parser::errors) before treating the
/// tree as well-formed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The statements in this program.
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Renders the program: the concatenation of its statements' renders,
    /// in order, with no separators.
    pub fn render(&self) -> String {
        self.statements.iter().map(Stmt::render).collect()
    }
}
