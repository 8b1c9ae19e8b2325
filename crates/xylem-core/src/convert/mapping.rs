//! Sequence and mapping conversion

use super::{decompose, ConvertContext, Converter, EntryKey};
use crate::classify::Category;
use crate::error::{XmlError, XmlResult};
use crate::node::Node;
use crate::value::Value;

/// Converts plain positional and keyed containers
#[derive(Debug)]
pub struct MappingConverter;

impl Converter for MappingConverter {
    fn can_convert(&self, value: &Value, category: Category) -> bool {
        matches!(value, Value::Sequence(_) | Value::Mapping(_))
            && matches!(category, Category::Sequence | Category::Mapping)
    }

    fn convert(&self, cx: ConvertContext<'_>, value: &Value, node: &mut Node) -> XmlResult<()> {
        match value {
            Value::Sequence(items) => {
                decompose(cx, items.iter().map(|item| (EntryKey::Positional, item)), node)
            }
            Value::Mapping(mapping) => decompose(
                cx,
                mapping.iter().map(|(key, child)| (EntryKey::from(key), child)),
                node,
            ),
            _ => Err(XmlError::cant_convert("value is not a sequence or mapping")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;

    #[test]
    fn test_can_convert_matches_shape() {
        let converter = MappingConverter;
        assert!(converter.can_convert(&Value::sequence([1, 2]), Category::Sequence));
        assert!(!converter.can_convert(&Value::from(Record::new("x")), Category::Record));
        assert!(!converter.can_convert(&Value::from(5), Category::Sequence));
    }
}
