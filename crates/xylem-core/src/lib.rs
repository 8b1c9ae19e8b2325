//! # Xylem Core
//!
//! Serializes arbitrary structured in-memory values into a hierarchical
//! XML-shaped node tree, using pluggable type-specific converters
//! selected through a deterministic, overridable resolution chain.
//!
//! A value's runtime shape is classified once, the resolution chain picks
//! a converter (per-exact-type override, per-category override, custom
//! before defaults), and the converter recursively decomposes the value
//! into named markup nodes, re-entering the dispatcher for every nested
//! composite so overrides apply at any depth.
//!
//! ## Quick Start
//!
//! ```rust
//! use xylem_core::{Mapping, Value, XmlSerializer};
//!
//! let serializer = XmlSerializer::with_defaults();
//! let value = Value::from(Mapping::new().entry("greeting", "hello"));
//!
//! let tree = serializer.convert(&value).unwrap();
//! assert_eq!(tree.find("greeting").unwrap().text(), Some("hello"));
//! ```

#![warn(clippy::all)]

pub mod classify;
pub mod convert;
pub mod error;
pub mod inflect;
pub mod node;
pub mod registry;
pub mod resolve;
pub mod serializer;
pub mod value;

pub use classify::{classify, Category, Classification, ScalarKind};
pub use convert::{
    AggregateConverter, ConvertContext, Converter, GenericObjectConverter, MappingConverter,
    RecordConverter,
};
pub use error::{XmlError, XmlResult};
pub use node::Node;
pub use registry::{names, ConverterRegistration, ConverterRegistry};
pub use resolve::{ResolutionTable, TableEntry};
pub use serializer::XmlSerializer;
pub use value::{Aggregate, GenericObject, MapKey, Mapping, Record, Reflect, Scalar, Value};
