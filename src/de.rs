//! Typed access to parsed RAON through serde.
//!
//! [`Deserializer`] walks an owned [`Value`] tree: blocks are visited as
//! maps, arrays as sequences, and scalars as `str`, `i64`, or `bool`. It adds
//! no checks to parsing itself; a document that parses is handed to serde
//! unchanged, and serde reports fields of the wrong shape.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use raon::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Limits { max_conn: u32, retry: Vec<u8> }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Config { name: String, port: u16, limits: Limits }
//!
//! let source = "name = \"hydra\"\nport = 8080\nlimits = {\n  max_conn = 100\n  retry = [1, 2, 5]\n}";
//! let config: Config = from_str(source).unwrap();
//!
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.limits.retry, vec![1, 2, 5]);
//! ```
//!
//! ## Enums
//!
//! Unit variants are written as strings; other variants as a block with a
//! single entry named after the variant:
//!
//! ```rust
//! use raon::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! #[serde(rename_all = "lowercase")]
//! enum Mode { Fast, Safe { retries: u8 } }
//!
//! #[derive(Deserialize)]
//! struct Config { a: Mode, b: Mode }
//!
//! let config: Config = from_str("a = \"fast\"\nb = { safe = { retries = 3 } }").unwrap();
//! assert_eq!(config.a, Mode::Fast);
//! assert_eq!(config.b, Mode::Safe { retries: 3 });
//! ```

use crate::{Array, Block, Document, Entry, Error, Result, Value};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// A serde deserializer that consumes a parsed [`Value`].
pub struct Deserializer {
    value: Value,
}

impl Deserializer {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Deserializer { value }
    }

    /// Deserializes the top-level entries of `document` as a map.
    #[must_use]
    pub fn from_document(document: Document) -> Self {
        Deserializer::new(Value::Block(document))
    }
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_string(s),
            Value::Int(i) => visitor.visit_i64(i),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Block(block) => visitor.visit_map(MapDeserializer::new(block)),
            Value::Array(array) => visitor.visit_seq(SeqDeserializer::new(array)),
        }
    }

    // RAON has no null: a field that is present is always `Some`, and absent
    // fields are left to serde's `Option` defaulting.
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Block(block) => {
                let mut entries = block.into_iter();
                match (entries.next(), entries.next()) {
                    (Some(entry), None) => visitor.visit_enum(EnumDeserializer::new(entry)),
                    _ => Err(Error::custom(
                        "expected a block with exactly one entry naming the variant",
                    )),
                }
            }
            other => Err(Error::custom(format!(
                "expected string or block for enum, found {}",
                other.value_type()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(array: Array) -> Self {
        SeqDeserializer {
            iter: array.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(Deserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: std::vec::IntoIter<Entry>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(block: Block) -> Self {
        MapDeserializer {
            iter: block.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(Entry { name, value }) => {
                self.value = Some(value);
                seed.deserialize(Deserializer::new(Value::String(name)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(Deserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl EnumDeserializer {
    fn new(entry: Entry) -> Self {
        EnumDeserializer {
            variant: entry.name,
            value: entry.value,
        }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(Deserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Err(Error::custom(
            "unit variants are written as a string, not a block",
        ))
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(Deserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Array(array) => visitor.visit_seq(SeqDeserializer::new(array)),
            _ => Err(Error::custom("expected array for tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Block(block) => visitor.visit_map(MapDeserializer::new(block)),
            _ => Err(Error::custom("expected block for struct variant")),
        }
    }
}
