use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GenError {
    #[error("Schema \"{0}\" is unresolved (no definition in components.schemas)")]
    UnresolvedSchema(String),

    #[error("Could not extract a schema name from ref \"{0}\" (expected \"#/components/schemas/<name>\")")]
    RefParse(String),

    #[error("Unsupported schema type \"{0}\"")]
    UnsupportedType(String),

    #[error("The {kind} format \"{format}\" is not supported")]
    UnsupportedFormat {
        kind:   String,
        format: String,
    },

    #[error("Arrays are only supported when their items is a ref")]
    UnsupportedArrayItem,

    #[error("\"{name}\" does not convert to a valid identifier (got \"{ident}\")")]
    InvalidIdentifier {
        name:  String,
        ident: String,
    },

    #[error("\"{first}\" and \"{second}\" both convert to the identifier {ident}")]
    DuplicateIdentifier {
        ident:  String,
        first:  String,
        second: String,
    },

    #[error("In property \"{property}\": {source}")]
    InProperty {
        property: String,
        #[source]
        source:   Box<GenError>,
    },

    #[error("In schema \"{schema}\": {source}")]
    InSchema {
        schema: String,
        #[source]
        source: Box<GenError>,
    },
}

impl GenError {
    /// The error with any schema context stripped.
    pub fn kind(&self) -> &GenError {
        match self {
            GenError::InSchema { source, .. } | GenError::InProperty { source, .. } => source.kind(),
            other => other,
        }
    }

    pub(crate) fn in_property(self, property: &str) -> GenError {
        GenError::InProperty {
            property: property.to_string(),
            source:   Box::new(self),
        }
    }

    pub(crate) fn in_schema(self, schema: &str) -> GenError {
        GenError::InSchema {
            schema: schema.to_string(),
            source: Box::new(self),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
