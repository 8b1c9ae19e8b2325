//! Runtime shape classification
//!
//! A value is classified exactly once per dispatch; the resulting
//! [`Classification`] is what the resolution chain and the naming rules
//! consume, so no repeated type tests happen during recursion.

use crate::value::{Scalar, Value};

/// The sub-kind of a scalar leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Text
    String,
    /// Integer
    Int,
    /// Anything else (floats, booleans)
    Other,
}

impl ScalarKind {
    /// The label used when synthesizing an element name for a positional
    /// scalar
    pub fn label(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Other => "other",
        }
    }
}

/// The category of a value's runtime shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Record-like entity
    Record,
    /// Ordered collection wrapper
    Aggregate,
    /// Plain positional container
    Sequence,
    /// Plain keyed container
    Mapping,
    /// Generic field-bearing object
    Object,
    /// Scalar leaf; never independently convertible
    Scalar(ScalarKind),
}

impl Category {
    /// The pluralized category key used for resolution-table lookups, or
    /// `None` for scalars
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Record => Some("models"),
            Self::Aggregate => Some("collections"),
            Self::Sequence | Self::Mapping => Some("arrays"),
            Self::Object => Some("objects"),
            Self::Scalar(_) => None,
        }
    }

    /// The singular label used when synthesizing an element name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Record => "model",
            Self::Aggregate => "collection",
            Self::Sequence | Self::Mapping => "array",
            Self::Object => "object",
            Self::Scalar(kind) => kind.label(),
        }
    }

    /// True for categories the dispatcher accepts at the top level
    pub fn is_convertible(&self) -> bool {
        self.key().is_some()
    }
}

/// The result of classifying one value
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The value's category
    pub category: Category,
    /// The concrete type name, present for records and objects only
    pub exact_type_key: Option<String>,
}

/// Classify a value's runtime shape
///
/// Checked in strict order: record, aggregate, sequence/mapping (a
/// mapping whose keys are purely sequential indexes starting at zero is
/// a sequence), object, scalar.
pub fn classify(value: &Value) -> Classification {
    match value {
        Value::Record(record) => Classification {
            category: Category::Record,
            exact_type_key: Some(record.class_name().to_string()),
        },
        Value::Aggregate(_) => Classification {
            category: Category::Aggregate,
            exact_type_key: None,
        },
        Value::Sequence(_) => Classification {
            category: Category::Sequence,
            exact_type_key: None,
        },
        Value::Mapping(mapping) => Classification {
            category: if mapping.is_purely_sequential() {
                Category::Sequence
            } else {
                Category::Mapping
            },
            exact_type_key: None,
        },
        Value::Object(object) => Classification {
            category: Category::Object,
            exact_type_key: Some(object.type_name().to_string()),
        },
        Value::Scalar(scalar) => Classification {
            category: Category::Scalar(match scalar {
                Scalar::String(_) => ScalarKind::String,
                Scalar::Int(_) => ScalarKind::Int,
                Scalar::Float(_) | Scalar::Bool(_) => ScalarKind::Other,
            }),
            exact_type_key: None,
        },
    }
}
