use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    graph::{DType, TensorShape},
};

/// Configuration for computation graph placeholders.
///
/// Every field has a default, so a configuration file only needs to list
/// the settings it changes:
///
/// ```toml
/// placeholders_enabled = true
/// dtype = "float64"
/// default_shape = [3]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Whether named quantities register placeholders in the graph
    pub placeholders_enabled: bool,
    /// The element type of new placeholders
    pub dtype: DType,
    /// The shape of placeholders created without an explicit shape
    pub default_shape: TensorShape,
}

impl Config {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            placeholders_enabled: true,
            dtype: DType::Float32,
            default_shape: TensorShape::default(),
        }
    }

    /// Reads a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid TOML,
    /// has unknown keys, or has values of the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

impl Default for Config {
    /// Creates a default configuration.
    fn default() -> Self {
        Self::new()
    }
}
