//! Error types for RAON scanning, parsing, and deserialization.
//!
//! Every failure aborts the whole operation: a failed scan yields no token
//! stream and a failed parse yields no document.
//!
//! ## Error Categories
//!
//! - **Lex Errors**: unrecognized characters, unterminated strings, integer
//!   literals that do not fit in an `i64`
//! - **Syntax Errors**: a token of the wrong kind where a production needs a
//!   specific one, or an array element whose type differs from the array's
//! - **End of Input**: the token stream ran out while a block, array, or
//!   entry was still open
//! - **Resource Errors**: backing storage could not be grown
//!
//! ## Examples
//!
//! ```rust
//! use raon::{parse_str, Error};
//!
//! let result = parse_str("x = \"abc");
//! assert!(matches!(result, Err(Error::Lex { .. })));
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use crate::value::ValueType;
use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while reading RAON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while reading the source
    #[error("IO error: {0}")]
    Io(String),

    /// A character sequence that does not start any token, or a malformed literal
    #[error("Lex error at line {line}, column {col}: {msg}")]
    Lex { line: usize, col: usize, msg: String },

    /// A token of the wrong kind for the current production
    #[error("Syntax error at line {line}, column {col}: expected {expected}, found {found}")]
    Syntax {
        line: usize,
        col: usize,
        expected: String,
        found: String,
    },

    /// Array element whose type disagrees with the array's element type
    #[error("Type mismatch at line {line}, column {col}: array of {expected} cannot hold {found}")]
    TypeMismatch {
        line: usize,
        col: usize,
        expected: ValueType,
        found: ValueType,
    },

    /// Same as [`Error::TypeMismatch`], raised by [`crate::Array::push`] where no
    /// source position exists
    #[error("array of {expected} cannot hold {found}")]
    ElementType {
        expected: ValueType,
        found: ValueType,
    },

    /// The token stream ended inside an open production
    #[error("Unexpected end of input at line {line}, column {col}: expected {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// Blocks and arrays nested deeper than the configured limit
    #[error("Nesting limit of {limit} exceeded at line {line}, column {col}")]
    DepthLimit { line: usize, col: usize, limit: usize },

    /// Storage for tokens, text, or document nodes could not be obtained
    #[error("Resource exhausted: {0}")]
    Resource(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a lex error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use raon::Error;
    ///
    /// let err = Error::lex(3, 7, "unexpected character ';'");
    /// assert!(err.to_string().contains("line 3, column 7"));
    /// ```
    pub fn lex(line: usize, col: usize, msg: &str) -> Self {
        Error::Lex {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a syntax error naming what the production wanted and what it got.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use raon::Error;
    ///
    /// let err = Error::syntax(1, 3, "'='", "integer");
    /// assert!(err.to_string().contains("expected '='"));
    /// ```
    pub fn syntax(line: usize, col: usize, expected: &str, found: &str) -> Self {
        Error::Syntax {
            line,
            col,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn type_mismatch(line: usize, col: usize, expected: ValueType, found: ValueType) -> Self {
        Error::TypeMismatch {
            line,
            col,
            expected,
            found,
        }
    }

    pub fn unexpected_eof(line: usize, col: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    pub fn depth_limit(line: usize, col: usize, limit: usize) -> Self {
        Error::DepthLimit { line, col, limit }
    }

    pub fn resource(msg: &str) -> Self {
        Error::Resource(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for failures to obtain storage.
    ///
    /// These are never the result of malformed input.
    #[must_use]
    pub const fn is_resource(&self) -> bool {
        matches!(self, Error::Resource(_))
    }

    /// Returns the `(line, column)` the error was detected at, if it has one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use raon::parse_str;
    ///
    /// let err = parse_str("a = 1\nb = ;").unwrap_err();
    /// assert_eq!(err.position(), Some((2, 5)));
    /// ```
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Lex { line, col, .. }
            | Error::Syntax { line, col, .. }
            | Error::TypeMismatch { line, col, .. }
            | Error::UnexpectedEof { line, col, .. }
            | Error::DepthLimit { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Error::Resource(err.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::syntax(10, 5, "field name", "'}'");
        assert_eq!(
            err.to_string(),
            "Syntax error at line 10, column 5: expected field name, found '}'"
        );

        let err = Error::type_mismatch(2, 9, ValueType::Int, ValueType::String);
        assert_eq!(
            err.to_string(),
            "Type mismatch at line 2, column 9: array of int cannot hold string"
        );
    }

    #[test]
    fn test_resource_class() {
        assert!(Error::resource("token stream").is_resource());
        assert!(!Error::lex(1, 1, "bad").is_resource());
        assert_eq!(Error::resource("x").position(), None);
    }

    #[test]
    fn test_try_reserve_maps_to_resource() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert!(Error::from(err).is_resource());
    }
}
