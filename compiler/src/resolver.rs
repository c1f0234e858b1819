//! Maps schema nodes to [`TypeDescriptor`]s.
//!
//! Formats follow the OpenAPI 3.0 data type table:
//! <https://spec.openapis.org/oas/v3.0.3#data-types>

use oas_structs_schema::{
    SchemaDefinition, SchemaOrRef, KIND_ARRAY, KIND_BOOLEAN, KIND_INTEGER, KIND_NUMBER, KIND_STRING,
};

use crate::{
    error::GenError,
    refs::parse_ref,
    types::{Primitive, TypeDescriptor},
};

/// Resolves a property, array item or top-level schema.
pub fn resolve_type(node: &SchemaOrRef) -> Result<TypeDescriptor, GenError> {
    match node {
        SchemaOrRef::Ref { reference } => Ok(TypeDescriptor::reference(parse_ref(reference)?)),
        SchemaOrRef::Schema(schema) => resolve_schema(schema),
    }
}

/// Resolves an inline (non-reference) schema.
pub fn resolve_schema(schema: &SchemaDefinition) -> Result<TypeDescriptor, GenError> {
    match schema.kind.as_str() {
        KIND_BOOLEAN => Ok(TypeDescriptor::Primitive(Primitive::Bool)),
        KIND_INTEGER => resolve_integer(&schema.format),
        KIND_NUMBER  => resolve_number(&schema.format),
        KIND_STRING  => resolve_string(&schema.format),
        KIND_ARRAY   => resolve_array(schema),
        other        => Err(GenError::UnsupportedType(other.to_string())),
    }
}

fn resolve_integer(format: &str) -> Result<TypeDescriptor, GenError> {
    match format {
        "" | "int32" => Ok(TypeDescriptor::Primitive(Primitive::Int32)),
        "int64"      => Ok(TypeDescriptor::Primitive(Primitive::Int64)),
        _            => Err(unsupported_format(KIND_INTEGER, format)),
    }
}

fn resolve_number(format: &str) -> Result<TypeDescriptor, GenError> {
    match format {
        "" | "float" => Ok(TypeDescriptor::Primitive(Primitive::Float32)),
        "double"     => Ok(TypeDescriptor::Primitive(Primitive::Float64)),
        _            => Err(unsupported_format(KIND_NUMBER, format)),
    }
}

fn resolve_string(format: &str) -> Result<TypeDescriptor, GenError> {
    match format {
        "" | "password"      => Ok(TypeDescriptor::Primitive(Primitive::String)),
        "byte"               => Ok(TypeDescriptor::Primitive(Primitive::Bytes)),
        "date"               => Ok(TypeDescriptor::Primitive(Primitive::Date)),
        "date-time"          => Ok(TypeDescriptor::Primitive(Primitive::DateTime)),
        // "binary" is recognized but has no mapping yet.
        _                    => Err(unsupported_format(KIND_STRING, format)),
    }
}

fn resolve_array(schema: &SchemaDefinition) -> Result<TypeDescriptor, GenError> {
    let reference = schema
        .items
        .as_deref()
        .and_then(SchemaOrRef::as_reference)
        .ok_or(GenError::UnsupportedArrayItem)?;
    let name = parse_ref(reference)?;
    Ok(TypeDescriptor::array_of(TypeDescriptor::reference(name)))
}

fn unsupported_format(kind: &str, format: &str) -> GenError {
    GenError::UnsupportedFormat {
        kind:   kind.to_string(),
        format: format.to_string(),
    }
}
