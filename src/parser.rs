//! Recursive-descent parser over a [`TokenStream`].
//!
//! The grammar, with newlines skipped between items:
//!
//! ```text
//! document   := { newline | entry } EOF
//! block      := '{' { newline | entry } '}'
//! array      := '[' { newline | value } ']'
//! entry      := FIELD '=' value
//! value      := STRING | BOOL | INT | block | array
//! ```
//!
//! A value may be followed by one `,` or newline, so entries and array
//! elements can be separated by either, and a trailing separator before a
//! closing bracket is optional.
//!
//! Every production either returns a complete node or an error. Nodes built
//! before a failure are owned by the failing production's locals and are
//! dropped when it returns.

use crate::seq::copy_text;
use crate::{
    Array, Block, Document, Entry, Error, ParseOptions, Position, Result, Token, TokenKind,
    TokenStream, Value,
};

/// Builds a [`Document`] from a borrowed token stream.
///
/// # Examples
///
/// ```rust
/// use raon::{scan, Parser, Value};
///
/// let tokens = scan("retry = [1, 2, 5]").unwrap();
/// let doc = Parser::new(&tokens).parse().unwrap();
///
/// let retry = doc.get("retry").and_then(Value::as_array).unwrap();
/// assert_eq!(retry.len(), 3);
/// ```
pub struct Parser<'t> {
    tokens: &'t [Token],
    cursor: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'t> Parser<'t> {
    #[must_use]
    pub fn new(tokens: &'t TokenStream) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    #[must_use]
    pub fn with_options(tokens: &'t TokenStream, options: ParseOptions) -> Self {
        Parser {
            tokens: tokens.as_slice(),
            cursor: 0,
            depth: 0,
            options,
        }
    }

    /// Returns the token at the cursor, or `None` once the stream is exhausted.
    #[must_use]
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.cursor)
    }

    /// Moves the cursor forward by one, stopping at the end of the stream.
    pub fn advance(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
    }

    fn end_position(&self) -> Position {
        self.tokens
            .last()
            .map_or(Position::new(1, 0), |token| token.end)
    }

    fn eof(&self, expected: &str) -> Error {
        let at = self.end_position();
        Error::unexpected_eof(at.row, at.column, expected)
    }

    fn unexpected(token: &Token, expected: &str) -> Error {
        Error::syntax(
            token.start.row,
            token.start.column,
            expected,
            &token.kind.describe(),
        )
    }

    fn descend(&mut self, at: Position) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(Error::depth_limit(at.row, at.column, self.options.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    /// Parses a scalar, block, or array, plus one trailing `,` or newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] if the token at the cursor cannot start a
    /// value, [`Error::UnexpectedEof`] if there is none, or any error from a
    /// nested block or array.
    pub fn parse_value(&mut self) -> Result<Value> {
        let Some(token) = self.peek() else {
            return Err(self.eof("value"));
        };

        let value = match &token.kind {
            TokenKind::String(text) => {
                let value = Value::String(copy_text(text)?);
                self.advance();
                value
            }
            TokenKind::Int(i) => {
                self.advance();
                Value::Int(*i)
            }
            TokenKind::Bool(b) => {
                self.advance();
                Value::Bool(*b)
            }
            TokenKind::BlockOpen => Value::Block(self.parse_block()?),
            TokenKind::ArrayOpen => Value::Array(self.parse_array()?),
            _ => return Err(Self::unexpected(token, "value")),
        };

        if matches!(
            self.peek().map(|t| &t.kind),
            Some(TokenKind::Comma | TokenKind::Newline)
        ) {
            self.advance();
        }
        Ok(value)
    }

    /// Parses `[ ... ]`. The first element fixes the array's element type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for an element whose type differs from
    /// the first element's, and [`Error::UnexpectedEof`] for an unclosed array.
    pub fn parse_array(&mut self) -> Result<Array> {
        let Some(open) = self.peek() else {
            return Err(self.eof("'['"));
        };
        if open.kind != TokenKind::ArrayOpen {
            return Err(Self::unexpected(open, "'['"));
        }
        self.descend(open.start)?;
        tracing::trace!(depth = self.depth, at = %open.start, "array");
        self.advance();

        let result = self.array_elements();
        self.depth -= 1;
        result
    }

    fn array_elements(&mut self) -> Result<Array> {
        let mut array = Array::new();
        loop {
            let Some(token) = self.peek() else {
                return Err(self.eof("']'"));
            };
            match token.kind {
                TokenKind::Newline => self.advance(),
                TokenKind::ArrayClose => {
                    self.advance();
                    return Ok(array);
                }
                _ => {
                    let value = self.parse_value()?;
                    let found = value.value_type();
                    match array.element_type() {
                        Some(expected) if expected != found => {
                            return Err(Error::type_mismatch(
                                token.start.row,
                                token.start.column,
                                expected,
                                found,
                            ));
                        }
                        _ => array.push(value)?,
                    }
                }
            }
        }
    }

    /// Parses `{ ... }`.
    ///
    /// # Errors
    ///
    /// Returns the first entry error, or [`Error::UnexpectedEof`] if the
    /// stream ends before the closing brace.
    pub fn parse_block(&mut self) -> Result<Block> {
        let Some(open) = self.peek() else {
            return Err(self.eof("'{'"));
        };
        if open.kind != TokenKind::BlockOpen {
            return Err(Self::unexpected(open, "'{'"));
        }
        self.descend(open.start)?;
        tracing::trace!(depth = self.depth, at = %open.start, "block");
        self.advance();

        let result = self.block_entries();
        self.depth -= 1;
        result
    }

    fn block_entries(&mut self) -> Result<Block> {
        let mut block = Block::new();
        loop {
            let Some(token) = self.peek() else {
                return Err(self.eof("'}'"));
            };
            match token.kind {
                TokenKind::Newline => self.advance(),
                TokenKind::BlockClose => {
                    self.advance();
                    return Ok(block);
                }
                _ => block.push(self.parse_entry()?)?,
            }
        }
    }

    /// Parses `FIELD = value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] if the field name or `=` is missing, or the
    /// error from the value.
    pub fn parse_entry(&mut self) -> Result<Entry> {
        let Some(token) = self.peek() else {
            return Err(self.eof("field name"));
        };
        let TokenKind::Field(name) = &token.kind else {
            return Err(Self::unexpected(token, "field name"));
        };
        let name = copy_text(name)?;
        self.advance();

        match self.peek() {
            Some(token) if token.kind == TokenKind::Equals => self.advance(),
            Some(token) => return Err(Self::unexpected(token, "'='")),
            None => return Err(self.eof("'='")),
        }

        let value = self.parse_value()?;
        Ok(Entry { name, value })
    }

    /// Parses entries until the stream is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the first error from any entry. No partial document is returned.
    pub fn parse(&mut self) -> Result<Document> {
        let mut document = Document::new();
        while let Some(token) = self.peek() {
            if token.kind == TokenKind::Newline {
                self.advance();
                continue;
            }
            document.push(self.parse_entry()?)?;
        }

        tracing::debug!(entries = document.len(), "parsed document");
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scanner, ValueType};

    fn parse(source: &str) -> Result<Document> {
        let tokens = Scanner::new(source).lex()?;
        Parser::new(&tokens).parse()
    }

    #[test]
    fn test_peek_and_advance_clamp() {
        let tokens = Scanner::new("a").lex().unwrap();
        let mut parser = Parser::new(&tokens);
        assert!(parser.peek().is_some());
        parser.advance();
        assert!(parser.peek().is_none());
        parser.advance();
        assert!(parser.peek().is_none());
    }

    #[test]
    fn test_empty_sources() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n\n# nothing\n").unwrap().is_empty());
    }

    #[test]
    fn test_scalar_entry() {
        let doc = parse("debug = true").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("debug"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_value_consumes_one_separator() {
        let tokens = Scanner::new("1,\n").lex().unwrap();
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.parse_value().unwrap(), Value::Int(1));
        assert_eq!(parser.peek().map(|t| &t.kind), Some(&TokenKind::Newline));
    }

    #[test]
    fn test_block_followed_by_entry_on_same_line() {
        let doc = parse("a = { x = 1 }, b = 2").unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("b"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_empty_block_and_array() {
        let doc = parse("a = {}\nb = []").unwrap();
        assert!(doc.get("a").and_then(Value::as_block).unwrap().is_empty());
        let b = doc.get("b").and_then(Value::as_array).unwrap();
        assert!(b.is_empty());
        assert_eq!(b.element_type(), None);
    }

    #[test]
    fn test_array_type_mismatch_position() {
        let err = parse("a = [1, \"x\"]").unwrap_err();
        assert_eq!(
            err,
            Error::type_mismatch(1, 9, ValueType::Int, ValueType::String)
        );
    }

    #[test]
    fn test_missing_equals() {
        let err = parse("a 1").unwrap_err();
        assert_eq!(err, Error::syntax(1, 3, "'='", "integer '1'"));
    }

    #[test]
    fn test_value_where_field_expected() {
        let err = parse("\"a\" = 1").unwrap_err();
        assert!(matches!(err, Error::Syntax { .. }));
    }

    #[test]
    fn test_unclosed_block_is_eof() {
        let err = parse("x = {").unwrap_err();
        assert_eq!(err, Error::unexpected_eof(1, 5, "'}'"));
    }

    #[test]
    fn test_unclosed_array_is_eof() {
        let err = parse("x = [1, 2").unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { .. }));
    }

    #[test]
    fn test_missing_value_at_end() {
        let err = parse("x =").unwrap_err();
        assert_eq!(err, Error::unexpected_eof(1, 3, "value"));
    }

    #[test]
    fn test_stray_closer_at_top_level() {
        assert!(parse("a = 1\n}").is_err());
        assert!(parse("a = 1\n]").is_err());
    }

    #[test]
    fn test_depth_limit() {
        let tokens = Scanner::new("a = [[[1]]]").lex().unwrap();

        let options = ParseOptions::new().with_max_depth(2);
        let err = Parser::with_options(&tokens, options).parse().unwrap_err();
        assert_eq!(err, Error::depth_limit(1, 7, 2));

        let options = ParseOptions::new().with_max_depth(3);
        assert!(Parser::with_options(&tokens, options).parse().is_ok());

        let tokens = Scanner::new("a = 1").lex().unwrap();
        let options = ParseOptions::new().with_max_depth(0);
        assert!(Parser::with_options(&tokens, options).parse().is_ok());
    }
}
