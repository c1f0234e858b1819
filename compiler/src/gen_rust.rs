use std::collections::HashMap;

use crate::{
    config::GeneratorConfig,
    error::GenError,
    refs::schema_ref,
    types::{Declaration, DeclarationBody, Primitive, StructField, TypeDescriptor},
};

/// Converts a PascalCase identifier to snake_case.
/// Consecutive capitals stay together, so acronyms remain intact
/// (e.g. "OwnerID" becomes "owner_id", "HTTPStatus" becomes "http_status").
fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::with_capacity(s.len() + 4);
    for i in 0..chars.len() {
        let c = chars[i];
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                // Insert an underscore if the previous character is not uppercase,
                // or if the next character exists and is lowercase.
                if !prev.is_uppercase() || (i + 1 < chars.len() && chars[i + 1].is_lowercase()) {
                    snake.push('_');
                }
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Escapes Rust keywords by suffixing with an underscore.
fn escape_rust_keyword(s: &str) -> String {
    let keywords = [
        "as", "async", "await", "break", "const", "continue", "crate",
        "dyn", "else", "enum", "extern", "false", "fn", "for", "if",
        "impl", "in", "let", "loop", "match", "mod", "move", "mut",
        "pub", "ref", "return", "self", "Self", "static", "struct",
        "super", "trait", "true", "type", "unsafe", "use", "where",
        "while", "abstract", "become", "box", "do", "final", "gen",
        "macro", "override", "priv", "try", "typeof", "unsized",
        "virtual", "yield",
    ];
    if keywords.contains(&s) {
        format!("{}_", s)
    } else {
        s.to_string()
    }
}

/// Prelude and serde names the generated module refers to unqualified.
/// A schema with one of these names would shadow it.
const RESERVED_TYPE_NAMES: [&str; 6] = ["Box", "Deserialize", "Option", "Serialize", "String", "Vec"];

/// The name a declaration gets in the generated module.
fn rust_type_name(ident: &str) -> String {
    if RESERVED_TYPE_NAMES.contains(&ident) {
        format!("{}_", ident)
    } else {
        escape_rust_keyword(ident)
    }
}

fn primitive_type(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Bool     => "bool",
        Primitive::Int32    => "i32",
        Primitive::Int64    => "i64",
        Primitive::Float32  => "f32",
        Primitive::Float64  => "f64",
        Primitive::String   => "String",
        Primitive::Bytes    => "Vec<u8>",
        Primitive::Date     => "chrono::NaiveDate",
        Primitive::DateTime => "chrono::DateTime<chrono::Utc>",
    }
}

struct RustEmitter<'a> {
    derives:      &'a [String],
    serde_traits: Vec<&'static str>,
    // schema name → type name in the generated module
    type_names:   HashMap<&'a str, String>,
}

impl<'a> RustEmitter<'a> {
    fn new(declarations: &'a [Declaration], derives: &'a [String]) -> Result<Self, GenError> {
        let serde_traits = ["Deserialize", "Serialize"]
            .into_iter()
            .filter(|t| derives.iter().any(|d| d == t))
            .collect();

        let mut type_names = HashMap::with_capacity(declarations.len());
        // rendered name → schema name
        let mut taken: HashMap<String, &str> = HashMap::with_capacity(declarations.len());
        for declaration in declarations {
            let type_name = rust_type_name(&declaration.ident);
            if let Some(first) = taken.insert(type_name.clone(), &declaration.name) {
                return Err(GenError::DuplicateIdentifier {
                    ident:  type_name,
                    first:  first.to_string(),
                    second: declaration.name.clone(),
                }
                .in_schema(&declaration.name));
            }
            type_names.insert(declaration.name.as_str(), type_name);
        }

        Ok(RustEmitter { derives, serde_traits, type_names })
    }

    fn type_name(&self, schema_name: &str) -> Result<&str, GenError> {
        self.type_names
            .get(schema_name)
            .map(String::as_str)
            .ok_or_else(|| GenError::UnresolvedSchema(schema_name.to_string()))
    }

    /// References are nullable and boxed wherever they appear on their own.
    /// Inside a `Vec` they are stored by value; the vector already provides
    /// the indirection.
    fn rust_type(&self, type_: &TypeDescriptor) -> Result<String, GenError> {
        Ok(match type_ {
            TypeDescriptor::Primitive(p) => primitive_type(*p).to_string(),
            TypeDescriptor::Reference(name) => format!("Option<Box<{}>>", self.type_name(name)?),
            TypeDescriptor::ArrayOf(item) => match item.as_ref() {
                TypeDescriptor::Reference(name) => format!("Vec<{}>", self.type_name(name)?),
                other => format!("Vec<{}>", self.rust_type(other)?),
            },
        })
    }

    fn header(&self) -> Vec<String> {
        let mut lines = vec![
            "// Code generated by oas-structs. DO NOT EDIT.".to_string(),
            "".to_string(),
        ];
        match self.serde_traits.as_slice() {
            [] => {}
            [one] => lines.push(format!("use serde::{};", one)),
            many => lines.push(format!("use serde::{{{}}};", many.join(", "))),
        }
        lines.push("".to_string());
        lines
    }

    fn doc_comment(&self, declaration: &Declaration) -> Vec<String> {
        let mut lines = vec![format!(
            "/// `{}` implements OpenAPI element at `{}`.",
            declaration.name,
            schema_ref(&declaration.name)
        )];
        if let Some(description) = declaration.description.as_deref().map(str::trim) {
            if !description.is_empty() {
                lines.push("///".to_string());
                for line in description.lines() {
                    let line = line.trim_end();
                    if line.is_empty() {
                        lines.push("///".to_string());
                    } else {
                        lines.push(format!("/// {}", line));
                    }
                }
            }
        }
        lines
    }

    fn derive_line(&self) -> Option<String> {
        if self.derives.is_empty() {
            None
        } else {
            Some(format!("#[derive({})]", self.derives.join(", ")))
        }
    }

    fn declaration(&self, declaration: &Declaration) -> Result<String, GenError> {
        let type_name = self.type_name(&declaration.name)?;
        let mut lines = self.doc_comment(declaration);

        match &declaration.body {
            // Type aliases cannot be recursive, so an alias that names another
            // schema is emitted as a newtype that can sit inside a cycle.
            DeclarationBody::Alias(type_) if !type_.references().is_empty() => {
                lines.extend(self.derive_line());
                if !self.serde_traits.is_empty() {
                    lines.push("#[serde(transparent)]".to_string());
                }
                lines.push(format!("pub struct {}(pub {});", type_name, self.rust_type(type_)?));
            }
            DeclarationBody::Alias(type_) => {
                lines.push(format!("pub type {} = {};", type_name, self.rust_type(type_)?));
            }
            DeclarationBody::Struct(fields) => {
                lines.extend(self.derive_line());
                lines.push(format!("pub struct {} {{", type_name));
                lines.extend(self.fields(fields)?);
                lines.push("}".to_string());
            }
        }

        lines.push("".to_string());
        Ok(lines.join("\n"))
    }

    fn fields(&self, fields: &[StructField]) -> Result<Vec<String>, GenError> {
        // field name → wire name
        let mut seen: HashMap<String, &str> = HashMap::with_capacity(fields.len());
        let mut lines = Vec::with_capacity(fields.len() * 2);

        for field in fields {
            let field_name = escape_rust_keyword(&to_snake_case(&field.ident));
            if let Some(first) = seen.insert(field_name.clone(), &field.wire_name) {
                return Err(GenError::DuplicateIdentifier {
                    ident:  field_name,
                    first:  first.to_string(),
                    second: field.wire_name.clone(),
                });
            }
            lines.push(format!("    #[serde(rename = {})]", quote(&field.wire_name)));
            lines.push(format!("    pub {}: {},", field_name, self.rust_type(&field.type_)?));
        }

        Ok(lines)
    }
}

/// Quotes a wire name as a Rust string literal.
fn quote(text: &str) -> String {
    format!("{:?}", text)
}

/// Renders declarations as a Rust module, in the order given.
///
/// Type names come from the declarations themselves; every reference must
/// name one of them. Structs get `#[serde(rename = "...")]` on every field so
/// the original property names are used on the wire.
pub fn compile_declarations_to_rust(
    declarations: &[Declaration],
    config: &GeneratorConfig,
) -> Result<String, GenError> {
    let emitter = RustEmitter::new(declarations, &config.derives)?;

    let mut rust_code = emitter.header();
    for declaration in declarations {
        rust_code.push(
            emitter
                .declaration(declaration)
                .map_err(|e| e.in_schema(&declaration.name))?,
        );
    }

    Ok(rust_code.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn struct_decl(name: &str, fields: Vec<StructField>) -> Declaration {
        Declaration {
            name:        name.into(),
            ident:       name.into(),
            description: None,
            body:        DeclarationBody::Struct(fields),
        }
    }

    fn field(ident: &str, type_: TypeDescriptor, wire_name: &str) -> StructField {
        StructField { ident: ident.into(), type_, wire_name: wire_name.into() }
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("ID"), "id");
        assert_eq!(to_snake_case("OwnerID"), "owner_id");
        assert_eq!(to_snake_case("HTTPStatus"), "http_status");
        assert_eq!(to_snake_case("Name"), "name");
        assert_eq!(to_snake_case("RawJSONPayload"), "raw_json_payload");
    }

    #[test]
    fn test_keywords_are_escaped() {
        assert_eq!(escape_rust_keyword("type"), "type_");
        assert_eq!(escape_rust_keyword("Self"), "Self_");
        assert_eq!(escape_rust_keyword("name"), "name");
    }

    #[test]
    fn test_render_struct_with_tags() {
        let decl = struct_decl(
            "Book",
            vec![
                field("Parent", TypeDescriptor::reference("Book"), "parent"),
                field("Type", TypeDescriptor::Primitive(Primitive::String), "type"),
                field("Related", TypeDescriptor::array_of(TypeDescriptor::reference("Book")), "related"),
            ],
        );
        let code = compile_declarations_to_rust(&[decl], &GeneratorConfig::default()).unwrap();
        let expected = [
            "// Code generated by oas-structs. DO NOT EDIT.",
            "",
            "use serde::{Deserialize, Serialize};",
            "",
            "/// `Book` implements OpenAPI element at `#/components/schemas/Book`.",
            "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]",
            "pub struct Book {",
            "    #[serde(rename = \"parent\")]",
            "    pub parent: Option<Box<Book>>,",
            "    #[serde(rename = \"type\")]",
            "    pub type_: String,",
            "    #[serde(rename = \"related\")]",
            "    pub related: Vec<Book>,",
            "}",
            "",
        ]
        .join("\n");
        assert_eq!(code, expected);
    }

    #[test]
    fn test_references_use_declaration_idents() {
        let url = Declaration {
            name:        "user_url".into(),
            ident:       "UserURL".into(),
            description: None,
            body:        DeclarationBody::Alias(TypeDescriptor::Primitive(Primitive::String)),
        };
        let user = Declaration {
            name:        "user".into(),
            ident:       "User".into(),
            description: None,
            body:        DeclarationBody::Struct(vec![field(
                "Links",
                TypeDescriptor::array_of(TypeDescriptor::reference("user_url")),
                "links",
            )]),
        };
        let config = GeneratorConfig { derives: vec![], ..Default::default() };
        let code = compile_declarations_to_rust(&[user, url], &config).unwrap();
        assert!(code.contains("pub links: Vec<UserURL>,"));
        assert!(code.contains("pub type UserURL = String;"));
    }

    #[test]
    fn test_reference_without_declaration() {
        let decl = struct_decl(
            "Book",
            vec![field("Author", TypeDescriptor::reference("author"), "author")],
        );
        let err = compile_declarations_to_rust(&[decl], &GeneratorConfig::default()).unwrap_err();
        assert_eq!(err.kind(), &GenError::UnresolvedSchema("author".into()));
    }

    #[test]
    fn test_render_alias_with_description() {
        let decl = Declaration {
            name:        "created_at".into(),
            ident:       "CreatedAt".into(),
            description: Some("When it happened.\n\nAlways UTC.\n".into()),
            body:        DeclarationBody::Alias(TypeDescriptor::Primitive(Primitive::DateTime)),
        };
        let config = GeneratorConfig { derives: vec!["Debug".into()], ..Default::default() };
        let code = compile_declarations_to_rust(&[decl], &config).unwrap();
        let expected = [
            "// Code generated by oas-structs. DO NOT EDIT.",
            "",
            "",
            "/// `created_at` implements OpenAPI element at `#/components/schemas/created_at`.",
            "///",
            "/// When it happened.",
            "///",
            "/// Always UTC.",
            "pub type CreatedAt = chrono::DateTime<chrono::Utc>;",
            "",
        ]
        .join("\n");
        assert_eq!(code, expected);
    }

    #[test]
    fn test_primitive_rendering() {
        let declarations = [struct_decl("UserID", vec![])];
        let emitter = RustEmitter::new(&declarations, &[]).unwrap();
        let render = |type_: TypeDescriptor| emitter.rust_type(&type_).unwrap();
        assert_eq!(render(TypeDescriptor::Primitive(Primitive::Bytes)), "Vec<u8>");
        assert_eq!(render(TypeDescriptor::Primitive(Primitive::Float64)), "f64");
        assert_eq!(render(TypeDescriptor::Primitive(Primitive::Date)), "chrono::NaiveDate");
        assert_eq!(
            render(TypeDescriptor::Primitive(Primitive::DateTime)),
            "chrono::DateTime<chrono::Utc>"
        );
        assert_eq!(render(TypeDescriptor::reference("UserID")), "Option<Box<UserID>>");
    }

    #[test]
    fn test_reserved_type_names_are_escaped() {
        assert_eq!(rust_type_name("String"), "String_");
        assert_eq!(rust_type_name("Option"), "Option_");
        assert_eq!(rust_type_name("Serialize"), "Serialize_");
        assert_eq!(rust_type_name("Self"), "Self_");
        assert_eq!(rust_type_name("Book"), "Book");
    }

    #[test]
    fn test_newtype_alias_without_serde_derives() {
        let decl = Declaration {
            name:        "Tree".into(),
            ident:       "Tree".into(),
            description: None,
            body:        DeclarationBody::Alias(TypeDescriptor::array_of(TypeDescriptor::reference("Tree"))),
        };
        let config = GeneratorConfig { derives: vec!["Debug".into()], ..Default::default() };
        let code = compile_declarations_to_rust(&[decl], &config).unwrap();
        assert!(code.contains("#[derive(Debug)]\npub struct Tree(pub Vec<Tree>);"));
        assert!(!code.contains("#[serde(transparent)]"));
    }

    #[test]
    fn test_escaped_type_name_collision_is_reported() {
        let declarations = [struct_decl("Self", vec![]), struct_decl("Self_", vec![])];
        let err = compile_declarations_to_rust(&declarations, &GeneratorConfig::default()).unwrap_err();
        assert_eq!(
            err.kind(),
            &GenError::DuplicateIdentifier {
                ident:  "Self_".into(),
                first:  "Self".into(),
                second: "Self_".into(),
            }
        );
    }

    #[test]
    fn test_snake_case_collision_is_reported() {
        let decl = struct_decl(
            "Code",
            vec![
                field("AB1", TypeDescriptor::Primitive(Primitive::Int32), "a_b1"),
                field("Ab1", TypeDescriptor::Primitive(Primitive::Int32), "ab1"),
            ],
        );
        let err = compile_declarations_to_rust(&[decl], &GeneratorConfig::default()).unwrap_err();
        assert_eq!(
            err.kind(),
            &GenError::DuplicateIdentifier {
                ident:  "ab1".into(),
                first:  "a_b1".into(),
                second: "ab1".into(),
            }
        );
    }
}
