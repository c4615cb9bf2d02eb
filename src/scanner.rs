//! RAON lexer.
//!
//! [`Scanner`] walks the source one character at a time, tracking row and
//! column, and turns it into a [`TokenStream`]. The whole buffer is scanned
//! before parsing begins.
//!
//! ```rust
//! use raon::{Scanner, TokenKind};
//!
//! let tokens = Scanner::new("port = 8080 # listen here").lex().unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::Field("port".into()), TokenKind::Equals, TokenKind::Int(8080)]
//! );
//! ```

use crate::seq::copy_text;
use crate::{Error, Position, Result, Token, TokenKind, TokenStream};

/// Turns RAON source text into tokens.
///
/// A scanner is used once: [`Scanner::lex`] runs it to the end of input.
pub struct Scanner<'a> {
    source: &'a str,
    /// Byte offset of the next unconsumed character. Before the first
    /// [`Scanner::advance`] this is 0, so `peek` sees the first character.
    next: usize,
    row: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            next: 0,
            row: 1,
            column: 0,
        }
    }

    /// Returns the next unconsumed character without consuming it.
    ///
    /// `None` at the end of input. A NUL character also ends the input.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.source[self.next..].chars().next().filter(|&ch| ch != '\0')
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.source[self.next..].chars();
        chars.next()?;
        chars.next().filter(|&ch| ch != '\0')
    }

    /// Consumes one character, updating row and column. No-op at end of input.
    pub fn advance(&mut self) {
        let Some(ch) = self.peek() else {
            return;
        };
        self.next += ch.len_utf8();
        if ch == '\n' {
            self.row += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Position of the last consumed character.
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }

    /// Position the character returned by [`Scanner::peek`] occupies.
    fn next_position(&self) -> Position {
        Position::new(self.row, self.column + 1)
    }

    /// Skips a `#` comment up to, but not including, the next newline.
    pub fn skip_comment(&mut self) {
        if self.peek() != Some('#') {
            return;
        }
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Scans a base-10 integer literal, optionally preceded by `-`.
    ///
    /// Returns `Ok(None)` without consuming anything if the input does not
    /// start with a digit (or `-` and a digit).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] if the literal does not fit in an `i64`.
    pub fn scan_number(&mut self) -> Result<Option<Token>> {
        let negative = match (self.peek(), self.peek_second()) {
            (Some('-'), Some(second)) if second.is_ascii_digit() => true,
            (Some(first), _) if first.is_ascii_digit() => false,
            _ => return Ok(None),
        };

        let start = self.next_position();
        let begin = self.next;
        if negative {
            self.advance();
        }
        while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
            self.advance();
        }

        let text = &self.source[begin..self.next];
        let value = text.parse::<i64>().map_err(|_| {
            Error::lex(
                start.row,
                start.column,
                &format!("integer literal '{}' is out of range", text),
            )
        })?;
        Ok(Some(Token::new(TokenKind::Int(value), start, self.position())))
    }

    /// Scans a double-quoted string. Characters between the quotes are kept
    /// verbatim; there are no escape sequences.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] if the input ends before the closing quote.
    pub fn scan_string(&mut self) -> Result<Option<Token>> {
        if self.peek() != Some('"') {
            return Ok(None);
        }
        let start = self.next_position();
        self.advance(); // consume opening quote
        let begin = self.next;

        loop {
            match self.peek() {
                Some('"') => {
                    let text = copy_text(&self.source[begin..self.next])?;
                    self.advance(); // consume closing quote
                    return Ok(Some(Token::new(
                        TokenKind::String(text),
                        start,
                        self.position(),
                    )));
                }
                Some(_) => self.advance(),
                None => {
                    return Err(Error::lex(start.row, start.column, "unterminated string"));
                }
            }
        }
    }

    /// Scans a field name or a `true`/`false` literal.
    ///
    /// Identifiers start with an ASCII letter and continue with letters,
    /// digits, `_`, or `-`.
    pub fn scan_identifier(&mut self) -> Result<Option<Token>> {
        if !matches!(self.peek(), Some(ch) if ch.is_ascii_alphabetic()) {
            return Ok(None);
        }
        let start = self.next_position();
        let begin = self.next;
        while matches!(self.peek(), Some(ch) if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
        {
            self.advance();
        }

        let kind = match &self.source[begin..self.next] {
            "true" => TokenKind::Bool(true),
            "false" => TokenKind::Bool(false),
            text => TokenKind::Field(copy_text(text)?),
        };
        Ok(Some(Token::new(kind, start, self.position())))
    }

    /// Scans the whole input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] at the first character that starts no token, or
    /// for a malformed literal, and [`Error::Resource`] if the stream cannot
    /// grow. Tokens scanned before the failure are dropped.
    pub fn lex(mut self) -> Result<TokenStream> {
        let mut tokens = TokenStream::new();

        loop {
            self.skip_comment();
            let Some(ch) = self.peek() else {
                break;
            };

            if ch == '\n' {
                let at = self.next_position();
                self.advance();
                tokens.push(Token::new(TokenKind::Newline, at, at))?;
                continue;
            }

            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            if let Some(token) = self.scan_identifier()? {
                tracing::trace!(kind = ?token.kind, at = %token.start, "token");
                tokens.push(token)?;
                continue;
            }

            if let Some(token) = self.scan_number()? {
                tracing::trace!(kind = ?token.kind, at = %token.start, "token");
                tokens.push(token)?;
                continue;
            }

            if let Some(token) = self.scan_string()? {
                tracing::trace!(kind = ?token.kind, at = %token.start, "token");
                tokens.push(token)?;
                continue;
            }

            let at = self.next_position();
            let Some(kind) = symbol(ch) else {
                return Err(Error::lex(
                    at.row,
                    at.column,
                    &format!("unexpected character {:?}", ch),
                ));
            };
            self.advance();
            tokens.push(Token::new(kind, at, at))?;
        }

        tracing::debug!(tokens = tokens.len(), "scanned source");
        Ok(tokens)
    }
}

fn symbol(ch: char) -> Option<TokenKind> {
    match ch {
        '=' => Some(TokenKind::Equals),
        '{' => Some(TokenKind::BlockOpen),
        '}' => Some(TokenKind::BlockClose),
        '[' => Some(TokenKind::ArrayOpen),
        ']' => Some(TokenKind::ArrayClose),
        ',' => Some(TokenKind::Comma),
        _ => None,
    }
}
