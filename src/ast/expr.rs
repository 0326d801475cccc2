//! Expression nodes for the Jay AST.

use crate::token::Span;

use super::stmt::Block;

/// A bare name with its source location.
///
/// Used where the grammar demands an identifier rather than an arbitrary
/// expression: `let` targets and function parameters. Identifier
/// *expressions* are [`ExprKind::Identifier`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    /// The identifier text.
    pub name: String,
    /// The source location of the identifier.
    pub span: Span,
}

impl Ident {
    /// Creates a new identifier node.
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }
}

/// The kind of an expression in the Jay language.
///
/// This enum represents the different types of expressions without source
/// location information. Use [`Expr`] for the full AST node with span
/// information.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// A variable reference.
    Identifier(String),

    /// An integer literal value.
    ///
    /// The value is the signed 64-bit reading of the digit run; lexemes
    /// that overflow `i64` are reported by the parser and never reach
    /// the AST.
    IntegerLiteral(i64),

    /// A boolean literal (`true` or `false`).
    BooleanLiteral(bool),

    /// A prefix (unary) operator application: `!x`, `-x`.
    Prefix {
        /// The operator text (`"!"` or `"-"`).
        op: String,
        /// The operand.
        rhs: Box<Expr>,
    },

    /// An infix (binary) operator application: `a + b`, `a == b`, ...
    Infix {
        /// The operator text (`"+"`, `"-"`, `"*"`, `"/"`, `"<"`, `">"`,
        /// `"=="`, `"!="`).
        op: String,
        /// The left operand.
        lhs: Box<Expr>,
        /// The right operand.
        rhs: Box<Expr>,
    },

    /// A conditional expression: `if (cond) { ... } else { ... }`.
    ///
    /// The `else` arm is optional; the consequence is not.
    If {
        /// The condition expression.
        condition: Box<Expr>,
        /// The block evaluated when the condition holds.
        consequence: Block,
        /// The optional `else` block.
        alternative: Option<Block>,
    },

    /// A function literal: `fn(x, y) { ... }`.
    Function {
        /// The parameter list, possibly empty.
        params: Vec<Ident>,
        /// The function body.
        body: Block,
    },

    /// A call expression: `callee(arg, ...)`.
    ///
    /// The callee is any expression, typically an identifier or a function
    /// literal.
    Call {
        /// The expression being called.
        callee: Box<Expr>,
        /// The argument list, possibly empty.
        args: Vec<Expr>,
    },
}

/// An expression in the Jay language with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source location of this expression.
    pub span: Span,
}

impl Expr {
    /// Creates a new expression with the given kind and span.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Renders this expression as a fully parenthesized string.
    ///
    /// Every operator application is wrapped in parentheses, so the
    /// output is unambiguous and re-parses to an equal tree:
    ///
    /// - `Prefix` renders as `(<op><rhs>)`
    /// - `Infix` renders as `(<lhs> <op> <rhs>)`
    /// - `If` renders as `if(<cond>){<consequence>}else{<alternative>}`,
    ///   with the `else{}` part present even when the alternative is
    ///   absent (a quirk kept from the reference behavior)
    /// - `Function` renders as `fn(<params>){<body>}` with the parameter
    ///   names concatenated without separators
    /// - `Call` renders as `<callee>(<args>)` with the rendered arguments
    ///   concatenated without separators
    pub fn render(&self) -> String {
        match &self.kind {
            ExprKind::Identifier(name) => name.clone(),
            ExprKind::IntegerLiteral(value) => value.to_string(),
            ExprKind::BooleanLiteral(value) => value.to_string(),
            ExprKind::Prefix { op, rhs } => format!("({}{})", op, rhs.render()),
            ExprKind::Infix { op, lhs, rhs } => {
                format!("({} {} {})", lhs.render(), op, rhs.render())
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                let alt = alternative.as_ref().map(Block::render).unwrap_or_default();
                format!(
                    "if({}){{{}}}else{{{}}}",
                    condition.render(),
                    consequence.render(),
                    alt
                )
            }
            ExprKind::Function { params, body } => {
                let mut out = String::from("fn(");
                for param in params {
                    out.push_str(&param.name);
                }
                out.push_str("){");
                out.push_str(&body.render());
                out.push('}');
                out
            }
            ExprKind::Call { callee, args } => {
                let mut out = callee.render();
                out.push('(');
                for arg in args {
                    out.push_str(&arg.render());
                }
                out.push(')');
                out
            }
        }
    }
}
