//! Serialization error types

use thiserror::Error;

/// Errors surfaced by conversion and converter resolution
#[derive(Debug, Error)]
pub enum XmlError {
    /// The resolution chain exhausted every step without a usable converter,
    /// or a registry lookup named an unknown converter
    #[error("No converter found: {0}")]
    NoConverterFound(String),

    /// A converter precondition failed, or the top-level value's category is
    /// not convertible at all
    #[error("Can't convert value: {0}")]
    CantConvert(String),

    /// The configured XML template string is malformed
    #[error("Invalid XML template: {0}")]
    InvalidTemplate(String),
}

/// Specialized Result type for serialization operations
pub type XmlResult<T> = Result<T, XmlError>;

impl XmlError {
    /// Create a resolution failure error
    pub fn no_converter(msg: impl Into<String>) -> Self {
        Self::NoConverterFound(msg.into())
    }

    /// Create a conversion precondition error
    pub fn cant_convert(msg: impl Into<String>) -> Self {
        Self::CantConvert(msg.into())
    }

    /// Create a template error
    pub fn invalid_template(msg: impl Into<String>) -> Self {
        Self::InvalidTemplate(msg.into())
    }

    /// True when the error came out of the resolution chain rather than a
    /// converter body
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, Self::NoConverterFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = XmlError::no_converter("could not find an appropriate converter");
        assert_eq!(
            err.to_string(),
            "No converter found: could not find an appropriate converter"
        );

        let err = XmlError::cant_convert("value is not a record");
        assert_eq!(err.to_string(), "Can't convert value: value is not a record");
    }

    #[test]
    fn test_error_classification() {
        assert!(XmlError::no_converter("x").is_resolution_failure());
        assert!(!XmlError::cant_convert("x").is_resolution_failure());
        assert!(!XmlError::invalid_template("x").is_resolution_failure());
    }
}
