use serde::Deserialize;
use std::{fs, path::Path};
use tracing::debug;

use crate::{catalog::SchemaCatalog, error::LoadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => Err(LoadError::UnknownFormat(path.display().to_string())),
        }
    }
}

// Only the part of the document the compiler reads.
#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default)]
    components: Option<Components>,
}

#[derive(Debug, Default, Deserialize)]
struct Components {
    #[serde(default)]
    schemas: Option<SchemaCatalog>,
}

impl Document {
    fn into_catalog(self) -> SchemaCatalog {
        self.components
            .and_then(|c| c.schemas)
            .unwrap_or_default()
    }
}

impl SchemaCatalog {
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let document: Document = serde_json::from_str(text)?;
        Ok(document.into_catalog())
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, LoadError> {
        let document: Document = serde_yaml::from_str(text)?;
        Ok(document.into_catalog())
    }

    pub fn from_str(text: &str, format: DocumentFormat) -> Result<Self, LoadError> {
        match format {
            DocumentFormat::Json => Self::from_json_str(text),
            DocumentFormat::Yaml => Self::from_yaml_str(text),
        }
    }

    /// Reads a document from disk, choosing the format from the extension.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let format = DocumentFormat::from_path(path)?;
        let text = fs::read_to_string(path)?;
        let catalog = Self::from_str(&text, format)?;
        debug!(
            path = %path.display(),
            ?format,
            schemas = catalog.len(),
            "loaded schema catalog"
        );
        Ok(catalog)
    }
}
