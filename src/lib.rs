//! The Jay language front-end library.
//!
//! This library provides the front-end of the Jay interpreter: lexical
//! analysis, Pratt parsing, and the AST with its parenthesized renderer.
//! Evaluation and code generation are out of scope.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (pull-model tokenization)
//! - [`parser`] - Pratt (operator-precedence) parser
//! - [`ast`] - Abstract Syntax Tree definitions and rendering
//!
//! # Example
//!
//! ```
//! use jay::lexer::Lexer;
//! use jay::parser::Parser;
//!
//! let source = "let result = add(five, ten);";
//!
//! let mut parser = Parser::new(Lexer::new(source));
//! let program = parser.parse();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.render(), "let result = add(fiveten);");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;
