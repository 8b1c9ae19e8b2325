//! The structured value model
//!
//! [`Value`] is the tagged union the serializer walks: scalar leaves,
//! ordered sequences, ordered key→value mappings, record-like entities,
//! generic field-bearing objects, and aggregate collection wrappers.
//! Insertion order is observable everywhere and is preserved through
//! serialization.

use indexmap::IndexMap;
use std::fmt;

/// A scalar leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// UTF-8 text
    String(String),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A mapping key: either an explicit name or a positional index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MapKey {
    /// Explicit string key, used verbatim as an element name
    Name(String),
    /// Positional key; the element name is synthesized during conversion
    Index(u64),
}

impl MapKey {
    /// The explicit name, if this key has one
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Index(_) => None,
        }
    }

    /// True for positional (numeric) keys
    pub fn is_positional(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for MapKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for MapKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<u64> for MapKey {
    fn from(index: u64) -> Self {
        Self::Index(index)
    }
}

impl From<usize> for MapKey {
    fn from(index: usize) -> Self {
        Self::Index(index as u64)
    }
}

/// An insertion-ordered map of unique keys to values
///
/// Named and positional keys may be mixed in one mapping; a mapping whose
/// keys are purely the sequence `0..n` classifies as a sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: IndexMap<MapKey, Value>,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insert an entry, replacing (in place) any entry with the same key
    pub fn insert(&mut self, key: impl Into<MapKey>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style insert
    pub fn entry(mut self, key: impl Into<MapKey>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value by key
    pub fn get(&self, key: &MapKey) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a value by explicit name
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.entries.get(&MapKey::Name(name.to_string()))
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&MapKey, &Value)> {
        self.entries.iter()
    }

    /// True when any key is positional
    pub fn has_positional_entries(&self) -> bool {
        self.entries.keys().any(MapKey::is_positional)
    }

    /// True when the keys are exactly the indexes `0..len` in order
    pub fn is_purely_sequential(&self) -> bool {
        !self.entries.is_empty()
            && self
                .entries
                .keys()
                .enumerate()
                .all(|(i, key)| *key == MapKey::Index(i as u64))
    }
}

impl<K: Into<MapKey>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

/// A named entity with an attribute-name→value map
///
/// The class name is the exact type key used by per-type resolution
/// overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    class_name: String,
    attributes: IndexMap<String, Value>,
}

impl Record {
    /// Create an empty record of the given class
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Builder-style attribute insert
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Insert or replace an attribute
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// The exact type key of this record
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Iterate attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// An opaque entity exposing a fixed, ordered set of named fields
#[derive(Debug, Clone, PartialEq)]
pub struct GenericObject {
    type_name: String,
    fields: IndexMap<String, Value>,
}

impl GenericObject {
    /// Create an empty object of the given type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field insert
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Build an object from any [`Reflect`] implementor
    pub fn from_reflect(source: &dyn Reflect) -> Self {
        let mut object = Self::new(source.type_name());
        for (name, value) in source.fields() {
            object.fields.insert(name, value);
        }
        object
    }

    /// The exact type key of this object
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Iterate fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Capability contract for structural reflection
///
/// Any type convertible through the generic object path must expose an
/// enumerable, ordered list of (name, value) pairs. This is the only seam
/// where field enumeration happens; the rest of the serializer sees a
/// plain [`GenericObject`].
pub trait Reflect {
    /// The exact type key for resolution overrides
    fn type_name(&self) -> &str;

    /// The exposed fields, in declaration order
    fn fields(&self) -> Vec<(String, Value)>;
}

/// An ordered collection wrapper around a sequence or mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    inner: Box<Value>,
}

impl Aggregate {
    /// Wrap a sequence of items
    pub fn from_sequence(items: Vec<Value>) -> Self {
        Self {
            inner: Box::new(Value::Sequence(items)),
        }
    }

    /// Wrap a mapping
    pub fn from_mapping(entries: Mapping) -> Self {
        Self {
            inner: Box::new(Value::Mapping(entries)),
        }
    }

    /// The wrapped sequence or mapping value
    pub fn inner(&self) -> &Value {
        &self.inner
    }

    /// Clone the wrapped value out for re-dispatch
    pub fn materialize(&self) -> Value {
        (*self.inner).clone()
    }
}

/// A structured in-memory value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Scalar leaf
    Scalar(Scalar),
    /// Ordered list of values
    Sequence(Vec<Value>),
    /// Ordered key→value map
    Mapping(Mapping),
    /// Named entity with attributes
    Record(Record),
    /// Generic field-bearing object
    Object(GenericObject),
    /// Ordered collection wrapper
    Aggregate(Aggregate),
}

impl Value {
    /// Build a sequence from anything convertible to values
    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Build an object value from any [`Reflect`] implementor
    pub fn from_reflect(source: &dyn Reflect) -> Self {
        Self::Object(GenericObject::from_reflect(source))
    }

    /// True for everything except scalar leaves
    pub fn is_composite(&self) -> bool {
        !matches!(self, Self::Scalar(_))
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Scalar(Scalar::Int(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Scalar(Scalar::Int(i64::from(i)))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Scalar(Scalar::Float(x))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<GenericObject> for Value {
    fn from(object: GenericObject) -> Self {
        Self::Object(object)
    }
}

impl From<Aggregate> for Value {
    fn from(aggregate: Aggregate) -> Self {
        Self::Aggregate(aggregate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_canonical_text() {
        assert_eq!(Scalar::Int(50).to_string(), "50");
        assert_eq!(Scalar::String("test".into()).to_string(), "test");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
        assert_eq!(Scalar::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_mapping_preserves_insertion_order() {
        let mapping = Mapping::new()
            .entry("b", 1)
            .entry("a", 2)
            .entry(0u64, "positional");

        let keys: Vec<String> = mapping.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["b", "a", "0"]);
        assert!(mapping.has_positional_entries());
        assert!(!mapping.is_purely_sequential());
    }

    #[test]
    fn test_mapping_replace_keeps_position() {
        let mut mapping = Mapping::new().entry("a", 1).entry("b", 2);
        let previous = mapping.insert("a", 3);

        assert_eq!(previous, Some(Value::from(1)));
        let keys: Vec<String> = mapping.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(mapping.get_named("a"), Some(&Value::from(3)));
    }

    #[test]
    fn test_purely_sequential_detection() {
        let sequential: Mapping = [(0u64, "a"), (1u64, "b")].into_iter().collect();
        assert!(sequential.is_purely_sequential());

        let sparse: Mapping = [(0u64, "a"), (2u64, "b")].into_iter().collect();
        assert!(!sparse.is_purely_sequential());

        assert!(!Mapping::new().is_purely_sequential());
    }

    #[test]
    fn test_record_builder() {
        let record = Record::new("my.app.User")
            .attr("name", "ada")
            .attr("age", 36);

        assert_eq!(record.class_name(), "my.app.User");
        let names: Vec<&str> = record.attributes().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["name", "age"]);
    }

    #[test]
    fn test_reflect_to_object() {
        struct Point {
            x: i64,
            y: i64,
        }

        impl Reflect for Point {
            fn type_name(&self) -> &str {
                "geometry.Point"
            }

            fn fields(&self) -> Vec<(String, Value)> {
                vec![("x".into(), self.x.into()), ("y".into(), self.y.into())]
            }
        }

        let value = Value::from_reflect(&Point { x: 1, y: 2 });
        let Value::Object(object) = value else {
            panic!("expected an object value");
        };
        assert_eq!(object.type_name(), "geometry.Point");
        let fields: Vec<&str> = object.fields().map(|(k, _)| k).collect();
        assert_eq!(fields, vec!["x", "y"]);
    }

    #[test]
    fn test_aggregate_materialize() {
        let aggregate = Aggregate::from_sequence(vec![Value::from(1), Value::from(2)]);
        assert_eq!(
            aggregate.materialize(),
            Value::Sequence(vec![Value::from(1), Value::from(2)])
        );
    }
}
