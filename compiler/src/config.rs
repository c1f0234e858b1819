use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    error::ConfigError,
    names::{NameConverter, DEFAULT_UPPERCASE_EXCEPTIONS},
};

pub const DEFAULT_DERIVES: [&str; 5] = ["Debug", "Clone", "PartialEq", "Serialize", "Deserialize"];

/// Settings for one generation run.
///
/// ```json
/// { "uppercase_exceptions": ["ID", "URL"], "derives": ["Debug", "Serialize"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Words kept fully upper-cased in identifiers.
    pub uppercase_exceptions: Vec<String>,
    /// Traits derived on generated structs.
    pub derives:              Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            uppercase_exceptions: DEFAULT_UPPERCASE_EXCEPTIONS.iter().map(|s| s.to_string()).collect(),
            derives:              DEFAULT_DERIVES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn name_converter(&self) -> NameConverter {
        NameConverter::new(&self.uppercase_exceptions)
    }
}
