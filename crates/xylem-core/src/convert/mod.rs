//! The converter contract and the shared decomposition algorithm
//!
//! Every converter implements [`Converter`]; composite child values are
//! never flattened locally but re-enter the dispatcher through
//! [`ConvertContext::recurse`], so per-type and per-category overrides
//! are honored at every nesting level.

mod aggregate;
mod mapping;
mod object;
mod record;

pub use aggregate::AggregateConverter;
pub use mapping::MappingConverter;
pub use object::GenericObjectConverter;
pub use record::RecordConverter;

use crate::classify::{classify, Category};
use crate::error::XmlResult;
use crate::inflect::singularize;
use crate::node::Node;
use crate::serializer::XmlSerializer;
use crate::value::{MapKey, Value};

/// Decomposes one value category into markup nodes
pub trait Converter: Send + Sync + std::fmt::Debug {
    /// Self-check: can this converter handle the value? Used for
    /// diagnostics; the dispatch path relies on resolution instead.
    fn can_convert(&self, value: &Value, category: Category) -> bool;

    /// Decompose `value` into children of `node`
    ///
    /// Fails with [`crate::XmlError::CantConvert`] when the value's
    /// runtime shape does not match this converter's expectation.
    fn convert(&self, cx: ConvertContext<'_>, value: &Value, node: &mut Node) -> XmlResult<()>;
}

/// Per-invocation context handed to converters
///
/// Carries the dispatcher handle for re-entry and the current key hint:
/// the singular item name threaded down from an enclosing collection
/// element, used to name positionally keyed composite children.
#[derive(Clone, Copy)]
pub struct ConvertContext<'a> {
    serializer: &'a XmlSerializer,
    key_hint: Option<&'a str>,
}

impl<'a> ConvertContext<'a> {
    pub(crate) fn new(serializer: &'a XmlSerializer, key_hint: Option<&'a str>) -> Self {
        Self {
            serializer,
            key_hint,
        }
    }

    /// The item name threaded down from the enclosing element, if any
    pub fn key_hint(&self) -> Option<&str> {
        self.key_hint
    }

    /// Re-enter the dispatcher for a nested composite value
    pub fn recurse(
        &self,
        value: &Value,
        node: &mut Node,
        key_hint: Option<&str>,
    ) -> XmlResult<()> {
        self.serializer.dispatch(value, node, key_hint)
    }
}

/// How one decomposed entry is keyed
pub(crate) enum EntryKey<'a> {
    /// Explicit key, used verbatim as the element name
    Named(&'a str),
    /// Positional key; the element name is synthesized
    Positional,
}

impl<'a> From<&'a MapKey> for EntryKey<'a> {
    fn from(key: &'a MapKey) -> Self {
        match key.as_name() {
            Some(name) => Self::Named(name),
            None => Self::Positional,
        }
    }
}

/// The decomposition algorithm shared by the mapping, record, and
/// generic object converters.
///
/// For each entry: named keys become element names verbatim. Positional
/// scalars are named after their scalar kind; positional composites take
/// the key hint when one is in force, falling back to their category
/// label. Scalar children become leaves carrying their canonical text;
/// composite children get a fresh element and re-enter the dispatcher
/// with an updated hint (see [`child_hint`]).
pub(crate) fn decompose<'v>(
    cx: ConvertContext<'_>,
    entries: impl IntoIterator<Item = (EntryKey<'v>, &'v Value)>,
    node: &mut Node,
) -> XmlResult<()> {
    for (key, child) in entries {
        let effective = match key {
            EntryKey::Named(name) => name.to_string(),
            EntryKey::Positional => match cx.key_hint() {
                Some(hint) if child.is_composite() => hint.to_string(),
                _ => classify(child).category.label().to_string(),
            },
        };

        if let Value::Scalar(scalar) = child {
            node.append_child(effective).set_text(scalar.to_string());
            continue;
        }

        let hint = child_hint(cx.key_hint(), &effective, child);
        let child_node = node.append_child(effective);
        cx.recurse(child, child_node, hint.as_deref())?;
    }

    Ok(())
}

/// The key hint for descending into a composite child named `effective`.
///
/// Normally the hint becomes the singular form of the effective name, so
/// the items of a plural-keyed collection are addressable in the
/// singular. A mapping that mixes positional entries among named keys is
/// the exception: its positional members still belong to the enclosing
/// collection context, so the inherited hint stays in force.
fn child_hint(inherited: Option<&str>, effective: &str, child: &Value) -> Option<String> {
    match child {
        Value::Mapping(mapping) if mapping.has_positional_entries() => {
            inherited.map(str::to_string)
        }
        Value::Aggregate(aggregate) => child_hint(inherited, effective, aggregate.inner()),
        _ => Some(singularize(effective)),
    }
}
