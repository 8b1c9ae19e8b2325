//! Generic object conversion

use super::{decompose, ConvertContext, Converter, EntryKey};
use crate::classify::Category;
use crate::error::{XmlError, XmlResult};
use crate::node::Node;
use crate::value::Value;

/// Converts generic field-bearing objects
///
/// Records, aggregates, sequences and mappings have dedicated converters
/// and are rejected outright here.
#[derive(Debug)]
pub struct GenericObjectConverter;

impl Converter for GenericObjectConverter {
    fn can_convert(&self, value: &Value, category: Category) -> bool {
        matches!(value, Value::Object(_)) && category == Category::Object
    }

    fn convert(&self, cx: ConvertContext<'_>, value: &Value, node: &mut Node) -> XmlResult<()> {
        let object = match value {
            Value::Object(object) => object,
            Value::Record(_) => {
                return Err(XmlError::cant_convert(
                    "records can not be used with the generic object converter; use the record converter instead",
                ));
            }
            Value::Aggregate(_) => {
                return Err(XmlError::cant_convert(
                    "aggregates can not be used with the generic object converter; use the aggregate converter instead",
                ));
            }
            Value::Sequence(_) | Value::Mapping(_) => {
                return Err(XmlError::cant_convert(
                    "containers can not be used with the generic object converter; use the mapping converter instead",
                ));
            }
            Value::Scalar(_) => {
                return Err(XmlError::cant_convert("value is not an object"));
            }
        };

        decompose(
            cx,
            object
                .fields()
                .map(|(name, child)| (EntryKey::Named(name), child)),
            node,
        )
    }
}
