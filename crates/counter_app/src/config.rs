//! Counter configuration file handling
//!
//! A counter can be seeded from a small TOML file:
//!
//! ```toml
//! count = 20
//! min = 0
//! max = 25
//! label_font_size = 64.0
//! ```
//!
//! Every field is optional and falls back to the widget defaults.

use crate::error::{CounterError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Initial property values for a counter
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CounterConfig {
    #[serde(default)]
    pub count: i32,
    #[serde(default)]
    pub min: i32,
    #[serde(default = "default_max")]
    pub max: i32,
    /// Overrides the `Xxl` font-size token for the number display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_font_size: Option<f32>,
}

fn default_max() -> i32 {
    10
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            count: 0,
            min: 0,
            max: default_max(),
            label_font_size: None,
        }
    }
}

impl CounterConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CounterError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded counter config from {}", path.display());
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> String {
        // Plain integers and an optional float always serialize
        toml::to_string(self).unwrap_or_default()
    }
}
