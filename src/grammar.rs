//! RAON Format Reference
//!
//! This module documents the RAON configuration format as read by this
//! library.
//!
//! # Overview
//!
//! A RAON document is a list of `field = value` entries. Values are strings,
//! integers, booleans, blocks of further entries, or arrays of values that
//! all share one type.
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
//! # Lexical Structure
//!
//! | Token | Syntax | Example |
//! |-------|--------|---------|
//! | Field name | ASCII letter, then letters, digits, `_`, `-` | `max_conn`, `retry-after` |
//! | String | `"` ... `"`, verbatim | `"hello, world"` |
//! | Integer | optional `-`, then decimal digits, fits `i64` | `8080`, `-1` |
//! | Boolean | `true` or `false` | `debug = true` |
//! | Symbols | `=` `{` `}` `[` `]` `,` | |
//! | Newline | `\n` | |
//!
//! - Whitespace other than newlines separates tokens and is otherwise ignored.
//! - `#` starts a comment running to the end of the line, anywhere outside a
//!   string literal.
//! - Strings have no escape sequences. A string may span lines; it ends at
//!   the next `"`.
//! - `true` and `false` are only booleans when they are the whole identifier:
//!   `trueish` is a field name.
//! - A NUL character ends the input.
//!
//! Any other character is a lex error, as are an unterminated string and an
//! integer outside the `i64` range.
//!
//! # Grammar
//!
//! ```text
//! document   := { newline | entry } EOF
//! block      := '{' { newline | entry } '}'
//! array      := '[' { newline | value } ']'
//! entry      := FIELD '=' value
//! value      := STRING | BOOL | INT | block | array
//! ```
//!
//! Each value may be followed by a single `,` or newline. Entries and array
//! elements can therefore be separated by either:
//!
//! ```text
//! a = 1, b = 2
//! ```
//!
//! parses to the same document as
//!
//! ```text
//! a = 1
//! b = 2
//! ```
//!
//! A trailing separator before `}` or `]` is optional.
//!
//! # Arrays
//!
//! The first element fixes the array's type. A later element of another type
//! is an error:
//!
//! ```text
//! ok  = [1, 2, 3]
//! bad = [1, "x"]
//! ```
//!
//! Arrays of arrays only compare the outer tag, so `[[1], ["x"]]` is accepted.
//!
//! # Duplicate Fields
//!
//! Entry order is kept, and a field name may appear more than once in the same
//! block. Both entries are kept; nothing is overwritten.
//!
//! # Errors
//!
//! Reading stops at the first error. There is no recovery and no partial
//! document: a source with one bad entry yields nothing.
//!
//! # Limitations
//!
//! - No floats, nulls, dates, or escape sequences
//! - Field names are bare identifiers; they cannot be quoted
//! - Block comments are not supported

// This module contains only documentation; no implementation code
