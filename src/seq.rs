//! Append-only growable sequence used for token streams, blocks, and arrays.
//!
//! [`Seq`] wraps a `Vec` but owns its growth policy: it starts with room for
//! [`INITIAL_CAPACITY`] items and doubles its capacity whenever an append
//! finds it full. Growth goes through `try_reserve_exact`, so running out of
//! memory surfaces as [`Error::Resource`](crate::Error::Resource) instead of aborting the process.
//!
//! There is no removal. A sequence is written once while a scan or parse
//! builds it and read many times afterwards; dropping it drops every item.
//!
//! ## Examples
//!
//! ```rust
//! use raon::Seq;
//!
//! let mut seq = Seq::new();
//! for i in 0..100 {
//!     seq.push(i).unwrap();
//! }
//!
//! assert_eq!(seq.len(), 100);
//! assert_eq!(seq[70], 70);
//! assert!(seq.capacity() >= 128);
//! ```

use crate::Result;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::ops::Index;

/// Number of items a fresh [`Seq`] has room for.
pub const INITIAL_CAPACITY: usize = 64;

/// An ordered, append-only sequence with amortized O(1) push.
///
/// # Examples
///
/// ```rust
/// use raon::Seq;
///
/// let mut seq = Seq::new();
/// seq.push("first").unwrap();
/// seq.push("second").unwrap();
///
/// let items: Vec<_> = seq.iter().copied().collect();
/// assert_eq!(items, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Seq<T>(Vec<T>);

impl<T> Seq<T> {
    /// Creates an empty sequence with room for [`INITIAL_CAPACITY`] items.
    #[must_use]
    pub fn new() -> Self {
        Seq(Vec::with_capacity(INITIAL_CAPACITY))
    }

    /// Appends an item, doubling the capacity first if the sequence is full.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resource`](crate::Error::Resource) if the backing storage cannot be grown. The
    /// item is dropped and the sequence is left unchanged.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.0.len() == self.0.capacity() {
            let additional = self.0.capacity().max(INITIAL_CAPACITY);
            self.0.try_reserve_exact(additional)?;
        }
        self.0.push(item);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of items the sequence can hold before it grows again.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.0.last()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns an iterator over the items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Consumes the sequence, returning the items as a `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

/// Copies `text` into a freshly allocated `String`.
///
/// Token and document text is always copied rather than shared, and the
/// allocation is checked like every other growth in the crate.
pub(crate) fn copy_text(text: &str) -> Result<String> {
    let mut owned = String::new();
    owned.try_reserve_exact(text.len())?;
    owned.push_str(text);
    Ok(owned)
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Seq<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Seq(items)
    }
}

impl<T> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Serialize> Serialize for Seq<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}
