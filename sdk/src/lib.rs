//! oas-structs
//!
//! Generate Rust type declarations from the `components.schemas` section of
//! an OpenAPI document.
//!
//! - `SchemaCatalog` and the document loader (re-exported from the schema crate)
//! - `Generator`, `GeneratorConfig` and the declaration model (re-exported from the compiler)
//! - One-call helpers that go from a document to Rust source or JSON.

use std::path::Path;
use thiserror::Error;

pub use oas_structs_compiler::{
    compile_declarations_to_rust, generate, ConfigError, Declaration, DeclarationBody, GenError,
    Generator, GeneratorConfig, NameConverter, Primitive, StructField, TypeDescriptor,
};
pub use oas_structs_schema::{DocumentFormat, LoadError, SchemaCatalog, SchemaDefinition, SchemaOrRef};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generate(#[from] GenError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize declarations: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generate Rust source for every schema of the catalog.
pub fn generate_rust(catalog: &SchemaCatalog, config: &GeneratorConfig) -> Result<String, Error> {
    let declarations = generate(catalog, config)?;
    Ok(compile_declarations_to_rust(&declarations, config)?)
}

/// Load a document from disk and generate Rust source for its schemas.
pub fn generate_rust_from_path(path: &Path, config: &GeneratorConfig) -> Result<String, Error> {
    let catalog = SchemaCatalog::load(path)?;
    generate_rust(&catalog, config)
}

/// The declaration list of the catalog as pretty-printed JSON.
pub fn declarations_to_json(catalog: &SchemaCatalog, config: &GeneratorConfig) -> Result<String, Error> {
    let declarations = generate(catalog, config)?;
    Ok(serde_json::to_string_pretty(&declarations)?)
}

pub mod error {
    pub use oas_structs_compiler::error::{ConfigError, GenError};
    pub use oas_structs_schema::LoadError;
}

pub mod schema {
    pub use oas_structs_schema::{SchemaCatalog, SchemaDefinition, SchemaOrRef};
}
