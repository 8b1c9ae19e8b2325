//! # Xylem Configuration Library
//!
//! Configuration types for the xylem XML serializer: converter override
//! tables and generic XML settings, loadable from TOML.
//!
//! ## Quick Start
//!
//! ```rust
//! use xylem_config::XmlConfig;
//!
//! let config = XmlConfig::from_toml_str(
//!     r#"
//!     [converters.custom]
//!     "my.app.User" = "my.own.user_converter"
//!
//!     [xml]
//!     template_string = '<?xml version="1.0" encoding="UTF-8"?><response/>'
//!     "#,
//! ).unwrap();
//! assert_eq!(config.xml.template_string, XmlConfig::default().xml.template_string);
//! ```

#![warn(clippy::all)]

mod config;
mod error;

pub use config::*;
pub use error::*;
