//! Token kinds for the Jay lexer.
//!
//! This module defines the [`TokenKind`] enum representing all possible
//! token types in the Jay language, together with the keyword table.

/// The kind of token recognized by the lexer.
///
/// This is a plain tag: the text of a token lives in
/// [`Token::lexeme`](super::Token), so kinds stay `Copy` and can key the
/// parser's precedence and dispatch tables directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A byte that starts no token. The lexeme carries the offending text.
    Illegal,

    /// End of input. Emitted forever once the input is exhausted.
    Eof,

    /// An identifier (variable name, function name, etc.).
    ///
    /// Identifiers start with an ASCII letter or underscore and continue
    /// with ASCII letters, digits, and underscores.
    Ident,

    /// An integer literal: a run of ASCII digits. Unary sign is not part
    /// of the literal; it is parsed as a prefix operator.
    Int,

    /// A single equals sign `=`.
    Assign,

    /// A plus sign `+`.
    Plus,

    /// A minus sign `-`.
    Minus,

    /// A bang (exclamation mark) `!`.
    Bang,

    /// An asterisk `*`.
    Asterisk,

    /// A forward slash `/`.
    Slash,

    /// Less than `<`.
    Lt,

    /// Greater than `>`.
    Gt,

    /// Double equals `==`.
    Eq,

    /// Not equals `!=`.
    NotEq,

    /// A comma `,`.
    Comma,

    /// A semicolon `;`.
    Semicolon,

    /// A left parenthesis `(`.
    LParen,

    /// A right parenthesis `)`.
    RParen,

    /// A left brace `{`.
    LBrace,

    /// A right brace `}`.
    RBrace,

    /// The `let` keyword.
    Let,

    /// The `fn` keyword.
    Function,

    /// The `if` keyword.
    If,

    /// The `else` keyword.
    Else,

    /// The `return` keyword.
    Return,

    /// The `true` literal.
    True,

    /// The `false` literal.
    False,
}

impl TokenKind {
    /// Returns the canonical name of this kind as it appears in parser
    /// error messages (`IDENT`, `ASSIGN`, `NOT_EQ`, ...).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Bang => "BANG",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Let => "LET",
            TokenKind::Function => "FUNCTION",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
        }
    }

    /// Looks up the kind for an identifier-shaped lexeme.
    ///
    /// Keywords are matched case-sensitively; anything else is an
    /// [`Ident`](TokenKind::Ident).
    pub fn keyword_or_ident(text: &str) -> TokenKind {
        match text {
            "let" => TokenKind::Let,
            "fn" => TokenKind::Function,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => TokenKind::Ident,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
