//! Tokens produced by the [`Scanner`](crate::Scanner) and consumed by the
//! [`Parser`](crate::Parser).

use crate::Seq;
use std::fmt;

/// A row/column location in the source, used only for diagnostics.
///
/// Rows start at 1. Columns count characters from 1; a position with
/// column 0 sits just after a newline, before the first character of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// What a token is, together with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare identifier in key position, e.g. `max_conn`.
    Field(String),
    Equals,
    Newline,
    Comma,
    BlockOpen,
    BlockClose,
    ArrayOpen,
    ArrayClose,
    /// A quoted string, without its quotes.
    String(String),
    Bool(bool),
    Int(i64),
}

impl TokenKind {
    /// Short human-readable description used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Field(name) => format!("field name '{}'", name),
            TokenKind::Equals => "'='".to_string(),
            TokenKind::Newline => "newline".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::BlockOpen => "'{'".to_string(),
            TokenKind::BlockClose => "'}'".to_string(),
            TokenKind::ArrayOpen => "'['".to_string(),
            TokenKind::ArrayClose => "']'".to_string(),
            TokenKind::String(_) => "string".to_string(),
            TokenKind::Bool(b) => format!("boolean '{}'", b),
            TokenKind::Int(i) => format!("integer '{}'", i),
        }
    }
}

/// A token and the span of source it was read from.
///
/// `start` is the position of the first character, `end` the position of
/// the last. Single-character tokens have `start == end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: Position,
    pub end: Position,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, start: Position, end: Position) -> Self {
        Token { kind, start, end }
    }
}

/// The scanner's output, in source order.
pub type TokenStream = Seq<Token>;
