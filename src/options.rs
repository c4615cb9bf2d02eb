//! Configuration options for RAON parsing.
//!
//! ## Examples
//!
//! ```rust
//! use raon::{parse_with_options, scan, ParseOptions};
//!
//! let tokens = scan("a = { b = { c = 1 } }").unwrap();
//!
//! let options = ParseOptions::new().with_max_depth(1);
//! assert!(parse_with_options(&tokens, &options).is_err());
//!
//! let options = ParseOptions::new().with_max_depth(2);
//! assert!(parse_with_options(&tokens, &options).is_ok());
//! ```

/// Default limit on how deeply blocks and arrays may nest.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use raon::ParseOptions;
///
/// let options = ParseOptions::new();
/// assert_eq!(options.max_depth, 128);
///
/// let options = ParseOptions::new().with_max_depth(16);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of blocks and arrays that may enclose a value. With a
    /// depth of 0 only scalar values are accepted.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
