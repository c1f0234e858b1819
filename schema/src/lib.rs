//! Input model for the oas-structs compiler.
//!
//! A [`SchemaCatalog`] holds the `components.schemas` section of an OpenAPI
//! document: a mapping from schema name to an optional [`SchemaOrRef`]. The
//! catalog is read from JSON or YAML text and is not modified afterwards.
//!
//! ```
//! use oas_structs_schema::*;
//!
//! let catalog = SchemaCatalog::from_yaml_str(r##"
//! components:
//!   schemas:
//!     UserId:
//!       type: integer
//!       format: int64
//!     User:
//!       type: object
//!       properties:
//!         id:
//!           $ref: "#/components/schemas/UserId"
//! "##).unwrap();
//!
//! assert_eq!(catalog.sorted_names(), vec!["User", "UserId"]);
//! assert!(catalog.get("UserId").unwrap().is_some());
//! ```

pub mod definition;
pub mod catalog;
pub mod loader;
pub mod error;

pub use definition::*;
pub use catalog::*;
pub use loader::DocumentFormat;
pub use error::LoadError;

pub const KIND_OBJECT: &str = "object";
pub const KIND_ARRAY: &str = "array";
pub const KIND_BOOLEAN: &str = "boolean";
pub const KIND_INTEGER: &str = "integer";
pub const KIND_NUMBER: &str = "number";
pub const KIND_STRING: &str = "string";
