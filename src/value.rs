//! Document tree for parsed RAON.
//!
//! A [`Document`] is an ordered sequence of [`Entry`] values, each pairing a
//! field name with a [`Value`]. Values nest: a [`Block`] holds more entries
//! and an [`Array`] holds values that all share one [`ValueType`].
//!
//! The tree owns everything it contains. There are no back references, so
//! dropping a document releases every entry, block, and array below it.
//!
//! ## Core Types
//!
//! - [`Value`]: string, integer, boolean, block, or array
//! - [`Entry`]: a field name and its value
//! - [`Block`]: an ordered list of entries; duplicate names are kept
//! - [`Array`]: a homogeneous list of values
//!
//! ## Usage Patterns
//!
//! ### Looking Up Fields
//!
//! ```rust
//! use raon::parse_str;
//!
//! let doc = parse_str("name = \"hydra\"\nlimits = { max_conn = 100 }").unwrap();
//!
//! assert_eq!(doc.get("name").and_then(|v| v.as_str()), Some("hydra"));
//! assert_eq!(doc.get_path("limits.max_conn").and_then(|v| v.as_i64()), Some(100));
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use raon::Value;
//! use std::convert::TryFrom;
//!
//! let value = Value::from(8080);
//! let port: i64 = i64::try_from(value).unwrap();
//! assert_eq!(port, 8080);
//! ```

use crate::{Error, Result, Seq};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// The type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Int,
    Bool,
    Block,
    Array,
}

impl ValueType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Int => "int",
            ValueType::Bool => "bool",
            ValueType::Block => "block",
            ValueType::Array => "array",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any value that can appear on the right of `=`.
///
/// # Examples
///
/// ```rust
/// use raon::{Value, ValueType};
///
/// let port = Value::Int(8080);
/// let name = Value::String("hydra".to_string());
///
/// assert!(port.is_int());
/// assert_eq!(name.value_type(), ValueType::String);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    Block(Block),
    Array(Array),
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Int(_) => ValueType::Int,
            Value::Bool(_) => ValueType::Bool,
            Value::Block(_) => ValueType::Block,
            Value::Array(_) => ValueType::Array,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, Value::Block(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use raon::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Value::Block(block) => Some(block),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }
}

/// A field name paired with its value.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub name: String,
    pub value: Value,
}

impl Entry {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Entry {
            name: name.into(),
            value,
        }
    }
}

/// A homogeneous list of values.
///
/// The first value pushed fixes the element type; every later value must
/// have the same [`ValueType`]. An empty array has no element type yet.
///
/// # Examples
///
/// ```rust
/// use raon::{Array, Value, ValueType};
///
/// let mut retry = Array::new();
/// retry.push(Value::from(1)).unwrap();
/// retry.push(Value::from(2)).unwrap();
///
/// assert_eq!(retry.element_type(), Some(ValueType::Int));
/// assert!(retry.push(Value::from("five")).is_err());
/// assert_eq!(retry.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Array {
    element_type: Option<ValueType>,
    values: Seq<Value>,
}

impl Array {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an array from `values`, checking that they all share one type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementType`] at the first value whose type differs
    /// from the first value's.
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        let mut array = Array::new();
        for value in values {
            array.push(value)?;
        }
        Ok(array)
    }

    /// The type every element shares, or `None` while the array is empty.
    #[must_use]
    pub const fn element_type(&self) -> Option<ValueType> {
        self.element_type
    }

    /// Returns `true` if a value of type `value_type` may be pushed.
    #[must_use]
    pub fn accepts(&self, value_type: ValueType) -> bool {
        self.element_type.map_or(true, |expected| expected == value_type)
    }

    /// Appends `value`.
    ///
    /// A rejected value is dropped here; the array keeps what it already had.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementType`] if `value` has a different type from the
    /// array's elements, or [`Error::Resource`] if the array cannot grow.
    pub fn push(&mut self, value: Value) -> Result<()> {
        let found = value.value_type();
        if let Some(expected) = self.element_type {
            if expected != found {
                return Err(Error::ElementType { expected, found });
            }
        }
        self.values.push(value)?;
        self.element_type = Some(found);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    #[must_use]
    pub fn values(&self) -> &Seq<Value> {
        &self.values
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// An ordered list of entries.
///
/// Entry order is source order, and a name may appear more than once:
/// [`Block::get`] finds the first, [`Block::get_all`] yields every one.
///
/// # Examples
///
/// ```rust
/// use raon::parse_str;
///
/// let doc = parse_str("host = \"a\"\nhost = \"b\"").unwrap();
///
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.get("host").and_then(|v| v.as_str()), Some("a"));
/// let hosts: Vec<_> = doc.get_all("host").filter_map(|v| v.as_str()).collect();
/// assert_eq!(hosts, vec!["a", "b"]);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Block {
    entries: Seq<Entry>,
}

/// The top-level block of a RAON source.
pub type Document = Block;

impl Block {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Block {
            entries: Seq::from(entries),
        }
    }

    /// Appends an entry. Entries with an existing name are kept alongside it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resource`] if the block cannot grow.
    pub fn push(&mut self, entry: Entry) -> Result<()> {
        self.entries.push(entry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value of the first entry named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    /// Returns the values of every entry named `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    /// Follows a dot-separated path of field names through nested blocks.
    ///
    /// Each segment resolves to the first entry with that name.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut value = self.get(segments.next()?)?;
        for segment in segments {
            value = value.as_block()?.get(segment)?;
        }
        Some(value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &Seq<Entry> {
        &self.entries
    }
}

impl IntoIterator for Block {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Block(block) => block.serialize(serializer),
            Value::Array(array) => array.serialize(serializer),
        }
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for entry in self {
            map.serialize_entry(&entry.name, &entry.value)?;
        }
        map.end()
    }
}

impl Serialize for Array {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(Error::custom(format!(
                "expected int, found {}",
                other.value_type()
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(Error::custom(format!(
                "expected bool, found {}",
                other.value_type()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::custom(format!(
                "expected string, found {}",
                other.value_type()
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Block> for Value {
    fn from(value: Block) -> Self {
        Value::Block(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}
