use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::KIND_OBJECT;

/// One schema node as it appears in the source document.
///
/// Only the keywords the compiler maps are kept; everything else in the
/// document is ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// The OpenAPI `type` keyword, empty when absent.
    #[serde(rename = "type", default)]
    pub kind:        String,
    #[serde(default)]
    pub format:      String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unordered, as in the source mapping. Consumers sort by name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties:  HashMap<String, SchemaOrRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items:       Option<Box<SchemaOrRef>>,
}

impl SchemaDefinition {
    pub fn primitive(kind: &str, format: &str) -> Self {
        SchemaDefinition {
            kind:   kind.to_string(),
            format: format.to_string(),
            ..Default::default()
        }
    }

    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaOrRef)>,
        K: Into<String>,
    {
        SchemaDefinition {
            kind:       KIND_OBJECT.to_string(),
            properties: properties.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ..Default::default()
        }
    }

    pub fn array(items: SchemaOrRef) -> Self {
        SchemaDefinition {
            kind:  crate::KIND_ARRAY.to_string(),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn is_object(&self) -> bool {
        self.kind == KIND_OBJECT
    }
}

/// Either a `$ref` pointer to another schema or an inline schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Schema(Box<SchemaDefinition>),
}

impl SchemaOrRef {
    pub fn reference(reference: &str) -> Self {
        SchemaOrRef::Ref { reference: reference.to_string() }
    }

    pub fn schema(definition: SchemaDefinition) -> Self {
        SchemaOrRef::Schema(Box::new(definition))
    }

    pub fn as_reference(&self) -> Option<&str> {
        match self {
            SchemaOrRef::Ref { reference } => Some(reference),
            SchemaOrRef::Schema(_) => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            SchemaOrRef::Ref { .. } => None,
            SchemaOrRef::Schema(def) => def.description.as_deref(),
        }
    }
}

impl From<SchemaDefinition> for SchemaOrRef {
    fn from(definition: SchemaDefinition) -> Self {
        SchemaOrRef::schema(definition)
    }
}
