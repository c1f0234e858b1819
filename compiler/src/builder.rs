use std::collections::HashMap;

use oas_structs_schema::{SchemaDefinition, SchemaOrRef};

use crate::{
    error::GenError,
    names::{is_valid_identifier, NameConverter},
    resolver::resolve_type,
    types::{Declaration, DeclarationBody, StructField},
};

/// Builds the declaration for one named schema.
///
/// Objects become structs with their properties sorted by wire name; every
/// other schema (primitive, array, or a bare `$ref`) becomes an alias.
pub fn build_declaration(
    name: &str,
    schema: &SchemaOrRef,
    converter: &NameConverter,
) -> Result<Declaration, GenError> {
    let ident = checked_ident(name, converter.convert_type_name(name))?;

    let body = match schema {
        SchemaOrRef::Schema(definition) if definition.is_object() => {
            DeclarationBody::Struct(build_fields(definition, converter)?)
        }
        _ => DeclarationBody::Alias(resolve_type(schema)?),
    };

    Ok(Declaration {
        name: name.to_string(),
        ident,
        description: schema.description().map(str::to_string),
        body,
    })
}

fn build_fields(
    definition: &SchemaDefinition,
    converter: &NameConverter,
) -> Result<Vec<StructField>, GenError> {
    let mut wire_names: Vec<&String> = definition.properties.keys().collect();
    wire_names.sort_unstable();

    // identifier → wire name that produced it
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(wire_names.len());
    let mut fields = Vec::with_capacity(wire_names.len());

    for wire_name in wire_names {
        let ident = checked_ident(wire_name, converter.convert(wire_name))?;
        if let Some(first) = seen.get(&ident) {
            return Err(GenError::DuplicateIdentifier {
                ident,
                first:  first.to_string(),
                second: wire_name.clone(),
            });
        }
        let type_ = resolve_type(&definition.properties[wire_name])
            .map_err(|e| e.in_property(wire_name))?;
        seen.insert(ident.clone(), wire_name);
        fields.push(StructField {
            ident,
            type_,
            wire_name: wire_name.clone(),
        });
    }

    Ok(fields)
}

fn checked_ident(name: &str, ident: String) -> Result<String, GenError> {
    if is_valid_identifier(&ident) {
        Ok(ident)
    } else {
        Err(GenError::InvalidIdentifier {
            name: name.to_string(),
            ident,
        })
    }
}
