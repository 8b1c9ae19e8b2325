//! The serializer/dispatcher
//!
//! Orchestrates classification → resolution → converter invocation, and
//! is the re-entry point converters call back into for nested composite
//! values. Owns its registry and its override tables explicitly; there
//! is no ambient state.

use tracing::debug;
use xylem_config::XmlConfig;

use crate::classify::classify;
use crate::convert::ConvertContext;
use crate::error::{XmlError, XmlResult};
use crate::node::Node;
use crate::registry::ConverterRegistry;
use crate::resolve::{resolve, ResolutionTable, TableEntry};
use crate::value::Value;

/// Converts structured values into markup trees
pub struct XmlSerializer {
    registry: ConverterRegistry,
    custom: ResolutionTable,
    defaults: ResolutionTable,
    template: String,
}

impl XmlSerializer {
    /// Build a serializer from an explicit registry and configuration
    ///
    /// The defaults table is seeded from the registry's built-in
    /// category-key map, then the configured `converters.defaults`
    /// entries compete under the table's priority rule. The custom table
    /// comes from `converters.custom` alone.
    pub fn new(registry: ConverterRegistry, config: &XmlConfig) -> Self {
        let mut defaults = ResolutionTable::new();
        for (key, identifier) in registry.default_converters() {
            defaults.insert(key.clone(), TableEntry::new(identifier.clone(), 0));
        }
        for (key, spec) in &config.converters.defaults {
            defaults.insert(key.clone(), TableEntry::from(spec));
        }

        Self {
            registry,
            custom: ResolutionTable::from_specs(&config.converters.custom),
            defaults,
            template: config.xml.template_string.clone(),
        }
    }

    /// A serializer with the built-in converters and default configuration
    pub fn with_defaults() -> Self {
        Self::new(ConverterRegistry::with_builtins(), &XmlConfig::default())
    }

    /// The owned registry
    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Mutable access to the registry; registrations are visible to
    /// subsequent resolutions immediately
    pub fn registry_mut(&mut self) -> &mut ConverterRegistry {
        &mut self.registry
    }

    /// Insert a custom-table override
    pub fn insert_custom(&mut self, key: impl Into<String>, entry: TableEntry) {
        self.custom.insert(key, entry);
    }

    /// Insert a defaults-table entry
    pub fn insert_default(&mut self, key: impl Into<String>, entry: TableEntry) {
        self.defaults.insert(key, entry);
    }

    /// Remove a custom-table override
    pub fn remove_custom(&mut self, key: &str) -> Option<TableEntry> {
        self.custom.remove(key)
    }

    /// Remove a defaults-table entry
    pub fn remove_default(&mut self, key: &str) -> Option<TableEntry> {
        self.defaults.remove(key)
    }

    /// The converter identifier the resolution chain picks for a value
    pub fn resolve_converter_for(&self, value: &Value) -> XmlResult<String> {
        resolve(value, &self.custom, &self.defaults, &self.registry)
    }

    /// Convert a value into a fresh tree rooted at the configured template
    pub fn convert(&self, value: &Value) -> XmlResult<Node> {
        let mut node = Node::from_template(&self.template)?;
        self.convert_into(value, &mut node)?;
        Ok(node)
    }

    /// Convert a value into an existing node
    ///
    /// Fails with [`XmlError::CantConvert`] when the value's category is
    /// not convertible at the top level (bare scalars).
    pub fn convert_into(&self, value: &Value, node: &mut Node) -> XmlResult<()> {
        if !classify(value).category.is_convertible() {
            return Err(XmlError::cant_convert(
                "the value you passed can not be converted",
            ));
        }
        self.dispatch(value, node, None)
    }

    /// Resolve and invoke the converter for a value; the re-entry point
    /// for nested composite values
    pub(crate) fn dispatch(
        &self,
        value: &Value,
        node: &mut Node,
        key_hint: Option<&str>,
    ) -> XmlResult<()> {
        let name = self.resolve_converter_for(value)?;
        let converter = self.registry.get_by_name(&name)?;
        debug!(converter = %name, element = node.name(), "dispatching value");
        converter.convert(ConvertContext::new(self, key_hint), value, node)
    }
}

impl Default for XmlSerializer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
