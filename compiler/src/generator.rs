use tracing::{debug, info};

use oas_structs_schema::SchemaCatalog;

use crate::{
    builder::build_declaration,
    config::GeneratorConfig,
    error::GenError,
    names::NameConverter,
    types::Declaration,
    verifier::Verifier,
};

/// Drives one generation run over a catalog.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    converter: NameConverter,
}

impl Generator {
    pub fn new(converter: NameConverter) -> Self {
        Generator { converter }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Generator::new(config.name_converter())
    }

    pub fn converter(&self) -> &NameConverter {
        &self.converter
    }

    /// Builds one declaration per schema, in lexicographic order of schema
    /// name. Stops at the first schema that fails.
    pub fn generate(&self, catalog: &SchemaCatalog) -> Result<Vec<Declaration>, GenError> {
        let mut verifier = Verifier::new(catalog);
        let mut declarations = Vec::with_capacity(catalog.len());

        for name in catalog.sorted_names() {
            let declaration = self
                .generate_one(name, catalog, &mut verifier)
                .map_err(|e| e.in_schema(name))?;
            debug!(schema = name, ident = %declaration.ident, "built declaration");
            declarations.push(declaration);
        }

        info!(declarations = declarations.len(), "generation completed");
        Ok(declarations)
    }

    fn generate_one(
        &self,
        name: &str,
        catalog: &SchemaCatalog,
        verifier: &mut Verifier<'_>,
    ) -> Result<Declaration, GenError> {
        let schema = catalog
            .get(name)
            .flatten()
            .ok_or_else(|| GenError::UnresolvedSchema(name.to_string()))?;
        let declaration = build_declaration(name, schema, &self.converter)?;
        verifier.verify(&declaration)?;
        Ok(declaration)
    }
}

/// Generates the declarations of `catalog` with the given configuration.
pub fn generate(catalog: &SchemaCatalog, config: &GeneratorConfig) -> Result<Vec<Declaration>, GenError> {
    Generator::from_config(config).generate(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeclarationBody, Primitive, TypeDescriptor};
    use oas_structs_schema::{SchemaDefinition, SchemaOrRef};

    fn reference(name: &str) -> SchemaOrRef {
        SchemaOrRef::reference(&format!("#/components/schemas/{}", name))
    }

    #[test]
    fn test_declarations_in_name_order() {
        let mut catalog = SchemaCatalog::new();
        for name in ["b", "C", "a", "D"] {
            catalog.insert(name, SchemaDefinition::primitive("boolean", ""));
        }
        let names: Vec<String> = Generator::default()
            .generate(&catalog)
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["C", "D", "a", "b"]);
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(Generator::default().generate(&SchemaCatalog::new()).unwrap(), Vec::new());
    }

    #[test]
    fn test_unresolved_schema_body() {
        let mut catalog = SchemaCatalog::new();
        catalog.insert_unresolved("Ghost");
        let err = Generator::default().generate(&catalog).unwrap_err();
        assert_eq!(
            err,
            GenError::UnresolvedSchema("Ghost".into()).in_schema("Ghost")
        );
    }

    #[test]
    fn test_reference_to_missing_schema() {
        let mut catalog = SchemaCatalog::new();
        catalog.insert("Book", SchemaDefinition::object([("author", reference("Author"))]));
        let err = Generator::default().generate(&catalog).unwrap_err();
        assert_eq!(err.kind(), &GenError::UnresolvedSchema("Author".into()));
        assert!(matches!(err, GenError::InSchema { ref schema, .. } if schema == "Book"));
    }

    #[test]
    fn test_stops_at_first_failing_schema() {
        let mut catalog = SchemaCatalog::new();
        catalog.insert("Zebra", SchemaDefinition::primitive("integer", "foo"));
        catalog.insert("Apple", SchemaDefinition::primitive("string", "binary"));
        catalog.insert("Mango", SchemaDefinition::primitive("string", ""));

        let err = Generator::default().generate(&catalog).unwrap_err();
        assert!(matches!(err, GenError::InSchema { ref schema, .. } if schema == "Apple"));
        assert_eq!(
            err.kind(),
            &GenError::UnsupportedFormat { kind: "string".into(), format: "binary".into() }
        );
    }

    #[test]
    fn test_cycles_are_safe() {
        let mut catalog = SchemaCatalog::new();
        catalog.insert(
            "Author",
            SchemaDefinition::object([(
                "books",
                SchemaOrRef::from(SchemaDefinition::array(reference("Book"))),
            )]),
        );
        catalog.insert("Book", SchemaDefinition::object([("author", reference("Author"))]));
        catalog.insert("Node", SchemaDefinition::object([("next", reference("Node"))]));

        let declarations = Generator::default().generate(&catalog).unwrap();
        assert_eq!(declarations.len(), 3);
        assert_eq!(
            declarations[2].body,
            DeclarationBody::Struct(vec![crate::types::StructField {
                ident:     "Next".into(),
                type_:     TypeDescriptor::reference("Node"),
                wire_name: "next".into(),
            }])
        );
    }

    #[test]
    fn test_configured_exceptions_apply() {
        let mut catalog = SchemaCatalog::new();
        catalog.insert(
            "user_url",
            SchemaDefinition::object([(
                "avatar_url",
                SchemaOrRef::from(SchemaDefinition::primitive("string", "")),
            )]),
        );
        let config = GeneratorConfig {
            uppercase_exceptions: vec!["URL".into()],
            ..Default::default()
        };
        let declarations = generate(&catalog, &config).unwrap();
        assert_eq!(declarations[0].ident, "UserURL");
        match &declarations[0].body {
            DeclarationBody::Struct(fields) => {
                assert_eq!(fields[0].ident, "AvatarURL");
                assert_eq!(fields[0].type_, TypeDescriptor::Primitive(Primitive::String));
            }
            other => panic!("expected a struct, got {:?}", other),
        }
    }
}
