//! # raon
//!
//! A reader for RAON, a small declarative configuration language.
//!
//! ## What is RAON?
//!
//! RAON documents are lists of `field = value` pairs. A value is a string,
//! an integer, a boolean, a nested block of more pairs, or an array of values
//! that all have the same type:
//!
//! ```text
//! name = "hydra"
//! port = 8080
//! debug = true
//! limits = {
//!   max_conn = 100
//!   retry = [1, 2, 5]
//! }
//! # a line comment
//! tags = ["a", "b", "c"]
//! ```
//!
//! See the [`grammar`] module for the full format.
//!
//! ## Pipeline
//!
//! Reading happens in two passes. [`scan`] turns the whole source into a
//! [`TokenStream`], then [`parse`] walks the tokens by recursive descent and
//! builds a [`Document`]. The first error aborts either pass, and nothing
//! built before it is returned.
//!
//! ```rust
//! use raon::{parse, scan, Value};
//!
//! let tokens = scan("port = 8080\ntags = [\"a\", \"b\"]").unwrap();
//! let doc = parse(&tokens).unwrap();
//!
//! assert_eq!(doc.get("port"), Some(&Value::Int(8080)));
//! assert_eq!(doc.get("tags").and_then(Value::as_array).map(|a| a.len()), Some(2));
//! ```
//!
//! ## Typed Access
//!
//! Parsed documents can be deserialized into your own types with serde:
//!
//! ```rust
//! use raon::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server {
//!     name: String,
//!     port: u16,
//!     debug: bool,
//! }
//!
//! let server: Server = from_str("name = \"hydra\", port = 8080, debug = true").unwrap();
//! assert_eq!(server.port, 8080);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Every node of a document is owned by exactly one parent
//! - Storage growth is checked: running out of memory is reported as
//!   [`Error::Resource`] rather than aborting

pub mod de;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod options;
pub mod parser;
pub mod scanner;
pub mod seq;
pub mod token;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use options::ParseOptions;
pub use parser::Parser;
pub use scanner::Scanner;
pub use seq::Seq;
pub use token::{Position, Token, TokenKind, TokenStream};
pub use value::{Array, Block, Document, Entry, Value, ValueType};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io;

/// Scans RAON source into tokens.
///
/// # Examples
///
/// ```rust
/// use raon::{scan, TokenKind};
///
/// let tokens = scan("a = 1").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2].kind, TokenKind::Int(1));
/// ```
///
/// # Errors
///
/// Returns [`Error::Lex`] for an unrecognized character, an unterminated
/// string, or an out-of-range integer.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn scan(source: &str) -> Result<TokenStream> {
    Scanner::new(source).lex().map_err(|err| {
        tracing::debug!(%err, "scan failed");
        err
    })
}

/// Parses a token stream into a document.
///
/// The stream is only borrowed; the document holds its own copies of all text.
///
/// # Errors
///
/// Returns an error at the first token that does not fit the grammar, at the
/// first array element whose type differs from the array's, or if the stream
/// ends inside a block, array, or entry.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(tokens: &TokenStream) -> Result<Document> {
    parse_with_options(tokens, &ParseOptions::default())
}

/// Parses a token stream with custom options.
///
/// # Errors
///
/// As [`parse`], plus [`Error::DepthLimit`] when blocks and arrays nest
/// deeper than `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(tokens: &TokenStream, options: &ParseOptions) -> Result<Document> {
    Parser::with_options(tokens, options.clone())
        .parse()
        .map_err(|err| {
            tracing::debug!(%err, "parse failed");
            err
        })
}

/// Scans and parses RAON source in one step.
///
/// # Examples
///
/// ```rust
/// use raon::parse_str;
///
/// let doc = parse_str("a = 1, b = 2").unwrap();
/// assert_eq!(doc.len(), 2);
/// ```
///
/// # Errors
///
/// Returns the scan or parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(source: &str) -> Result<Document> {
    let tokens = scan(source)?;
    parse(&tokens)
}

/// Deserialize an instance of type `T` from an already parsed document.
///
/// # Errors
///
/// Returns an error if the document's shape does not match `T`.
pub fn from_document<T>(document: Document) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::from_document(document))
}

/// Deserialize an instance of type `T` from a string of RAON text.
///
/// # Examples
///
/// ```rust
/// use raon::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x = 1\ny = 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid RAON or cannot be deserialized
/// to type `T`. Scan and parse errors carry line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_document(parse_str(s)?)
}

/// Deserialize an instance of type `T` from bytes of RAON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid RAON, or
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserialize an instance of type `T` from an I/O stream of RAON.
///
/// The stream is read to the end before scanning starts.
///
/// # Examples
///
/// ```rust
/// use raon::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x = 1\ny = 2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not valid
/// RAON, or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Limits {
        max_conn: u32,
        retry: Vec<i64>,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Config {
        name: String,
        port: u16,
        debug: bool,
        limits: Limits,
        tags: Vec<String>,
    }

    const SAMPLE: &str = r#"name = "hydra"
port = 8080
debug = true
limits = {
  max_conn = 100
  retry = [1, 2, 5]
}
# a line comment
tags = ["a", "b", "c"]
"#;

    #[test]
    fn test_scan_then_parse_sample() {
        let tokens = scan(SAMPLE).unwrap();
        let doc = parse(&tokens).unwrap();
        drop(tokens);

        assert_eq!(doc.len(), 5);
        assert_eq!(doc.get("name"), Some(&Value::from("hydra")));
        assert_eq!(doc.get_path("limits.max_conn"), Some(&Value::Int(100)));
    }

    #[test]
    fn test_from_str_sample() {
        let config: Config = from_str(SAMPLE).unwrap();
        assert_eq!(
            config,
            Config {
                name: "hydra".to_string(),
                port: 8080,
                debug: true,
                limits: Limits {
                    max_conn: 100,
                    retry: vec![1, 2, 5],
                },
                tags: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            }
        );
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let result: Result<Config> = from_slice(&[0xff, 0xfe]);
        assert!(matches!(result, Err(Error::Custom(_))));
    }

    #[test]
    fn test_parse_with_options_depth() {
        let tokens = scan("a = { b = [1] }").unwrap();
        let options = ParseOptions::new().with_max_depth(1);
        assert!(matches!(
            parse_with_options(&tokens, &options),
            Err(Error::DepthLimit { limit: 1, .. })
        ));
    }
}
