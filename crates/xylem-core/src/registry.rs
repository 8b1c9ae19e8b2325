//! Converter registration and lookup
//!
//! The registry is explicitly owned and explicitly passed; there is no
//! process-wide container. Lookups go through three sources in order:
//! instantiated singletons, live registrations, and bound factories for
//! on-demand instantiation.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

use crate::convert::{
    AggregateConverter, Converter, GenericObjectConverter, MappingConverter, RecordConverter,
};
use crate::error::{XmlError, XmlResult};

/// Fixed identifiers of the built-in converters
pub mod names {
    /// Record converter identifier
    pub const RECORD: &str = "xylem.converters.record";
    /// Sequence/mapping converter identifier
    pub const ARRAY: &str = "xylem.converters.array";
    /// Generic object converter identifier
    pub const OBJECT: &str = "xylem.converters.object";
    /// Aggregate converter identifier
    pub const COLLECTION: &str = "xylem.converters.collection";
}

/// Factory for on-demand converter instantiation
pub type ConverterFactory = Box<dyn Fn() -> Arc<dyn Converter> + Send + Sync>;

/// A named converter registration
pub struct ConverterRegistration {
    converter: Arc<dyn Converter>,
    priority: i64,
}

impl ConverterRegistration {
    /// The registered converter
    pub fn converter(&self) -> &Arc<dyn Converter> {
        &self.converter
    }

    /// The registration priority (0 unless given explicitly)
    pub fn priority(&self) -> i64 {
        self.priority
    }
}

/// Holds named converter registrations and resolved converter instances
#[derive(Default)]
pub struct ConverterRegistry {
    converters: IndexMap<String, ConverterRegistration>,
    casted: HashMap<String, Arc<dyn Converter>>,
    factories: HashMap<String, ConverterFactory>,
    defaults: IndexMap<String, String>,
}

impl ConverterRegistry {
    /// Create an empty registry with no built-ins
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated with the four built-in converters,
    /// registered both as live singletons and as factory bindings, and
    /// with the default category-key→identifier map filled in
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(names::RECORD, Arc::new(RecordConverter));
        registry.register(names::ARRAY, Arc::new(MappingConverter));
        registry.register(names::OBJECT, Arc::new(GenericObjectConverter));
        registry.register(names::COLLECTION, Arc::new(AggregateConverter));

        registry.bind(names::RECORD, || Arc::new(RecordConverter));
        registry.bind(names::ARRAY, || Arc::new(MappingConverter));
        registry.bind(names::OBJECT, || Arc::new(GenericObjectConverter));
        registry.bind(names::COLLECTION, || Arc::new(AggregateConverter));

        registry.defaults = [
            ("models", names::RECORD),
            ("objects", names::OBJECT),
            ("arrays", names::ARRAY),
            ("collections", names::COLLECTION),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        registry
    }

    /// Insert or overwrite a named registration with priority 0
    ///
    /// The instance is also exposed as an instantiated singleton so
    /// hot-path lookups skip the registration map.
    pub fn register(&mut self, name: impl Into<String>, converter: Arc<dyn Converter>) {
        self.register_with_priority(name, converter, 0);
    }

    /// Insert or overwrite a named registration with an explicit priority
    pub fn register_with_priority(
        &mut self,
        name: impl Into<String>,
        converter: Arc<dyn Converter>,
        priority: i64,
    ) {
        let name = name.into();
        self.casted.insert(name.clone(), Arc::clone(&converter));
        self.converters
            .insert(name, ConverterRegistration { converter, priority });
    }

    /// Bind an identifier to a factory for on-demand instantiation
    pub fn bind(
        &mut self,
        identifier: impl Into<String>,
        factory: impl Fn() -> Arc<dyn Converter> + Send + Sync + 'static,
    ) {
        self.factories.insert(identifier.into(), Box::new(factory));
    }

    /// Look up a converter by name
    ///
    /// Checks instantiated singletons first, then live registrations,
    /// then bound factories. Fails with [`XmlError::NoConverterFound`]
    /// when the name is known to none of them.
    pub fn get_by_name(&self, name: &str) -> XmlResult<Arc<dyn Converter>> {
        if let Some(converter) = self.casted.get(name) {
            return Ok(Arc::clone(converter));
        }
        if let Some(registration) = self.converters.get(name) {
            return Ok(Arc::clone(&registration.converter));
        }
        if let Some(factory) = self.factories.get(name) {
            return Ok(factory());
        }
        Err(XmlError::no_converter(format!(
            "couldn't find a converter named `{name}`"
        )))
    }

    /// True when `get_by_name` would succeed for this identifier
    pub fn is_resolvable(&self, identifier: &str) -> bool {
        self.casted.contains_key(identifier)
            || self.converters.contains_key(identifier)
            || self.factories.contains_key(identifier)
    }

    /// The full registration set, in registration order
    pub fn converters(&self) -> &IndexMap<String, ConverterRegistration> {
        &self.converters
    }

    /// The instantiated singleton map
    pub fn casted_converters(&self) -> &HashMap<String, Arc<dyn Converter>> {
        &self.casted
    }

    /// The built-in default category-key→identifier map
    pub fn default_converters(&self) -> &IndexMap<String, String> {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Category;
    use crate::convert::ConvertContext;
    use crate::node::Node;
    use crate::value::Value;

    #[derive(Debug)]
    struct NullConverter;

    impl Converter for NullConverter {
        fn can_convert(&self, _value: &Value, _category: Category) -> bool {
            true
        }

        fn convert(
            &self,
            _cx: ConvertContext<'_>,
            _value: &Value,
            _node: &mut Node,
        ) -> XmlResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_builtins_are_registered_under_fixed_names() {
        let registry = ConverterRegistry::with_builtins();
        for name in [names::RECORD, names::ARRAY, names::OBJECT, names::COLLECTION] {
            assert!(registry.converters().contains_key(name), "{name}");
            assert!(registry.casted_converters().contains_key(name), "{name}");
            assert!(registry.is_resolvable(name), "{name}");
        }
        assert_eq!(
            registry.default_converters().get("models").map(String::as_str),
            Some(names::RECORD)
        );
        assert_eq!(registry.default_converters().len(), 4);
    }

    #[test]
    fn test_custom_registration_is_listed_and_retrievable() {
        let mut registry = ConverterRegistry::with_builtins();
        registry.register("my.custom.converter", Arc::new(NullConverter));

        assert!(registry.converters().contains_key("my.custom.converter"));
        assert!(registry.get_by_name("my.custom.converter").is_ok());
        assert_eq!(
            registry
                .converters()
                .get("my.custom.converter")
                .unwrap()
                .priority(),
            0
        );
    }

    #[test]
    fn test_factory_binding_instantiates_on_demand() {
        let mut registry = ConverterRegistry::new();
        assert!(!registry.is_resolvable("lazy"));

        registry.bind("lazy", || Arc::new(NullConverter));
        assert!(registry.is_resolvable("lazy"));
        assert!(registry.get_by_name("lazy").is_ok());
        // binding alone does not make it a registration
        assert!(!registry.converters().contains_key("lazy"));
    }

    #[test]
    fn test_unknown_name_fails() {
        let registry = ConverterRegistry::with_builtins();
        let err = registry.get_by_name("missing").unwrap_err();
        assert!(err.is_resolution_failure());
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut registry = ConverterRegistry::new();
        registry.register("name", Arc::new(NullConverter));
        registry.register_with_priority("name", Arc::new(NullConverter), 7);

        assert_eq!(registry.converters().len(), 1);
        assert_eq!(registry.converters().get("name").unwrap().priority(), 7);
    }
}
