//! Aggregate conversion
//!
//! An aggregate cannot flatten itself; it materializes its wrapped
//! sequence or mapping and hands the result back to the dispatcher, so
//! the inner value goes through resolution like any other.

use super::{ConvertContext, Converter};
use crate::classify::Category;
use crate::error::{XmlError, XmlResult};
use crate::node::Node;
use crate::value::Value;

/// Converts ordered collection wrappers by delegation
#[derive(Debug)]
pub struct AggregateConverter;

impl Converter for AggregateConverter {
    fn can_convert(&self, value: &Value, category: Category) -> bool {
        matches!(value, Value::Aggregate(_)) && category == Category::Aggregate
    }

    fn convert(&self, cx: ConvertContext<'_>, value: &Value, node: &mut Node) -> XmlResult<()> {
        let Value::Aggregate(aggregate) = value else {
            return Err(XmlError::cant_convert("value is not an aggregate"));
        };

        let inner = aggregate.materialize();
        cx.recurse(&inner, node, cx.key_hint())
    }
}
