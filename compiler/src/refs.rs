use lazy_static::lazy_static;
use regex::Regex;

use crate::error::GenError;

pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

lazy_static! {
    // The whole string must match: prefix, then one or more non-slash characters.
    static ref SCHEMA_REF: Regex = Regex::new(r"^#/components/schemas/([^/]+)$").unwrap();
}

/// Extracts the schema name from a local component reference.
///
/// `"#/components/schemas/BookId"` → `"BookId"`. Anything else, including
/// references to other component kinds, external documents or nested JSON
/// pointers, fails with [`GenError::RefParse`].
pub fn parse_ref(reference: &str) -> Result<&str, GenError> {
    SCHEMA_REF
        .captures(reference)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| GenError::RefParse(reference.to_string()))
}

/// The reference string pointing at a schema name.
pub fn schema_ref(name: &str) -> String {
    format!("{}{}", SCHEMA_REF_PREFIX, name)
}
