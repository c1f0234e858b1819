use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::definition::SchemaOrRef;

/// The named schemas of one document.
///
/// A `None` entry is a schema that was declared without a body (`Book: null`
/// in YAML). It is kept so the compiler can report it instead of silently
/// dropping it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaCatalog {
    schemas: HashMap<String, Option<SchemaOrRef>>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a schema body. Returns the previous entry, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        schema: impl Into<SchemaOrRef>,
    ) -> Option<Option<SchemaOrRef>> {
        self.schemas.insert(name.into(), Some(schema.into()))
    }

    /// Declares a schema name with no body.
    pub fn insert_unresolved(&mut self, name: impl Into<String>) {
        self.schemas.insert(name.into(), None);
    }

    /// `None` if the name is not in the catalog, `Some(None)` if it is
    /// declared without a body.
    pub fn get(&self, name: &str) -> Option<Option<&SchemaOrRef>> {
        self.schemas.get(name).map(Option::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Schema names in lexicographic (byte) order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<K: Into<String>> FromIterator<(K, SchemaOrRef)> for SchemaCatalog {
    fn from_iter<T: IntoIterator<Item = (K, SchemaOrRef)>>(iter: T) -> Self {
        SchemaCatalog {
            schemas: iter.into_iter().map(|(k, v)| (k.into(), Some(v))).collect(),
        }
    }
}
