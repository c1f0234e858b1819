use serde::Serialize;

/// Target-language primitive types a schema can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Primitive {
    Bool,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
    Bytes,
    Date,
    DateTime,
}

/// The resolved type of a schema or property.
///
/// A `Reference` names another schema and never inlines it, so schemas may
/// refer to each other in cycles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TypeDescriptor {
    Primitive(Primitive),
    Reference(String),
    ArrayOf(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    pub fn reference(name: &str) -> Self {
        TypeDescriptor::Reference(name.to_string())
    }

    pub fn array_of(item: TypeDescriptor) -> Self {
        TypeDescriptor::ArrayOf(Box::new(item))
    }

    /// Names of all schemas this type refers to, outermost first.
    pub fn references(&self) -> Vec<&str> {
        match self {
            TypeDescriptor::Primitive(_) => Vec::new(),
            TypeDescriptor::Reference(name) => vec![name.as_str()],
            TypeDescriptor::ArrayOf(item) => item.references(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructField {
    /// Identifier produced by the name converter.
    pub ident:     String,
    pub type_:     TypeDescriptor,
    /// The property name exactly as declared, used as the serialization tag.
    pub wire_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DeclarationBody {
    Alias(TypeDescriptor),
    Struct(Vec<StructField>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    /// Schema name as it appears in `components.schemas`.
    pub name:        String,
    /// Type identifier produced by the name converter.
    pub ident:       String,
    pub description: Option<String>,
    pub body:        DeclarationBody,
}

impl Declaration {
    pub fn references(&self) -> Vec<&str> {
        match &self.body {
            DeclarationBody::Alias(type_) => type_.references(),
            DeclarationBody::Struct(fields) => {
                fields.iter().flat_map(|f| f.type_.references()).collect()
            }
        }
    }
}
