//! oas-structs-compiler
//!
//! This crate implements:
//!  1) Name conversion from wire names to identifiers (`names`),
//!  2) `$ref` parsing (`refs`) and schema → type resolution (`resolver`),
//!  3) Declaration building and the fail-fast generation pass (`builder`, `generator`),
//!  4) Reference and identifier checks on built declarations (`verifier`),
//!  5) Rust code generation (`compile_declarations_to_rust` → `String`),
//!  6) Error types (`GenError`, `ConfigError`) and `GeneratorConfig`.

pub mod error;
pub mod types;
pub mod names;
pub mod refs;
pub mod resolver;
pub mod builder;
pub mod verifier;
pub mod generator;
pub mod config;
pub mod gen_rust;

pub use config::GeneratorConfig;
pub use error::{ConfigError, GenError};
pub use generator::{generate, Generator};
pub use gen_rust::compile_declarations_to_rust;
pub use names::NameConverter;
pub use types::{Declaration, DeclarationBody, Primitive, StructField, TypeDescriptor};
