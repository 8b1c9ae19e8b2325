//! Serializer configuration
//!
//! Converter override tables plus generic XML settings. The override
//! tables map an exact type identifier (for example `my.app.User`) or a
//! category key (`models`, `objects`, `arrays`, `collections`) to a
//! converter identifier, optionally with a priority.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigResult;

/// Default XML template: declaration preamble plus an empty root element.
pub const DEFAULT_TEMPLATE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><response/>";

/// Top-level serializer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct XmlConfig {
    /// Converter override tables
    #[serde(default)]
    pub converters: ConvertersConfig,
    /// Generic XML settings
    #[serde(default)]
    pub xml: XmlSettings,
}

/// Custom and default converter override tables
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConvertersConfig {
    /// User-supplied overrides, consulted first
    #[serde(default)]
    pub custom: IndexMap<String, ConverterSpec>,
    /// Fallback entries, consulted after the built-in defaults merge
    #[serde(default)]
    pub defaults: IndexMap<String, ConverterSpec>,
}

/// Generic XML settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct XmlSettings {
    /// Preamble and empty root element used when no target node is supplied
    #[serde(default = "default_template")]
    pub template_string: String,
}

impl Default for XmlSettings {
    fn default() -> Self {
        Self {
            template_string: default_template(),
        }
    }
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

/// A converter reference in an override table
///
/// Accepts either a bare identifier string or a detailed form carrying a
/// priority:
///
/// ```toml
/// [converters.custom]
/// "my.app.User" = "my.own.user_converter"
/// models = { identifier = "my.own.record_converter", priority = 1000 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ConverterSpec {
    /// Bare converter identifier, priority 0
    Identifier(String),
    /// Identifier with an explicit priority
    Detailed {
        /// Converter identifier to resolve
        identifier: String,
        /// Tie-breaker among entries competing for the same key
        #[serde(default)]
        priority: i64,
    },
}

impl ConverterSpec {
    /// The converter identifier this spec names
    pub fn identifier(&self) -> &str {
        match self {
            Self::Identifier(id) => id,
            Self::Detailed { identifier, .. } => identifier,
        }
    }

    /// The priority, defaulting to 0 for the bare form
    pub fn priority(&self) -> i64 {
        match self {
            Self::Identifier(_) => 0,
            Self::Detailed { priority, .. } => *priority,
        }
    }
}

impl From<&str> for ConverterSpec {
    fn from(identifier: &str) -> Self {
        Self::Identifier(identifier.to_string())
    }
}

impl XmlConfig {
    /// Parse a configuration from a TOML string
    pub fn from_toml_str(input: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load a configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let config = XmlConfig::default();
        assert_eq!(config.xml.template_string, DEFAULT_TEMPLATE);
        assert!(config.converters.custom.is_empty());
        assert!(config.converters.defaults.is_empty());
    }

    #[test]
    fn test_bare_and_detailed_specs() {
        let config = XmlConfig::from_toml_str(
            r#"
            [converters.custom]
            "my.app.User" = "my.own.user_converter"
            models = { identifier = "my.own.record_converter", priority = 1000 }

            [converters.defaults]
            objects = "xylem.converters.object"
            "#,
        )
        .unwrap();

        let user = &config.converters.custom["my.app.User"];
        assert_eq!(user.identifier(), "my.own.user_converter");
        assert_eq!(user.priority(), 0);

        let models = &config.converters.custom["models"];
        assert_eq!(models.identifier(), "my.own.record_converter");
        assert_eq!(models.priority(), 1000);

        assert_eq!(
            config.converters.defaults["objects"].identifier(),
            "xylem.converters.object"
        );
    }

    #[test]
    fn test_detailed_spec_priority_defaults_to_zero() {
        let config = XmlConfig::from_toml_str(
            r#"
            [converters.custom]
            arrays = { identifier = "my.own.array_converter" }
            "#,
        )
        .unwrap();

        assert_eq!(config.converters.custom["arrays"].priority(), 0);
    }

    #[test]
    fn test_custom_template_string() {
        let config = XmlConfig::from_toml_str(
            r#"
            [xml]
            template_string = '<?xml version="1.0"?><feed/>'
            "#,
        )
        .unwrap();

        assert_eq!(config.xml.template_string, "<?xml version=\"1.0\"?><feed/>");
    }

    #[test]
    fn test_parse_error() {
        assert!(XmlConfig::from_toml_str("converters = 5").is_err());
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xylem.toml");
        std::fs::write(&path, "[xml]\ntemplate_string = \"<root/>\"\n").unwrap();

        let config = XmlConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.xml.template_string, "<root/>");

        assert!(XmlConfig::from_toml_file(dir.path().join("missing.toml")).is_err());
    }
}
