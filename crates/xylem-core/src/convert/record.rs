//! Record conversion

use super::{decompose, ConvertContext, Converter, EntryKey};
use crate::classify::Category;
use crate::error::{XmlError, XmlResult};
use crate::node::Node;
use crate::value::Value;

/// Converts record-like entities by decomposing their attributes
#[derive(Debug)]
pub struct RecordConverter;

impl Converter for RecordConverter {
    fn can_convert(&self, value: &Value, category: Category) -> bool {
        matches!(value, Value::Record(_)) && category == Category::Record
    }

    fn convert(&self, cx: ConvertContext<'_>, value: &Value, node: &mut Node) -> XmlResult<()> {
        let Value::Record(record) = value else {
            return Err(XmlError::cant_convert("value is not a record"));
        };

        decompose(
            cx,
            record
                .attributes()
                .map(|(name, child)| (EntryKey::Named(name), child)),
            node,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;

    #[test]
    fn test_rejects_non_records() {
        let converter = RecordConverter;
        assert!(converter.can_convert(&Value::from(Record::new("x")), Category::Record));
        assert!(!converter.can_convert(&Value::sequence([1]), Category::Sequence));
    }
}
