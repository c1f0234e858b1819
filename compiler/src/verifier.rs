use std::collections::HashMap;

use oas_structs_schema::SchemaCatalog;

use crate::{error::GenError, types::Declaration};

/// Checks each declaration against the catalog and the declarations seen
/// before it.
pub struct Verifier<'a> {
    catalog:     &'a SchemaCatalog,
    // type identifier → schema name that produced it
    type_idents: HashMap<String, String>,
}

impl<'a> Verifier<'a> {
    pub fn new(catalog: &'a SchemaCatalog) -> Self {
        Verifier {
            catalog,
            type_idents: HashMap::with_capacity(catalog.len()),
        }
    }

    /// Returns `Ok(())` if every reference in `declaration` names a schema of
    /// the catalog and its identifier is not already taken.
    pub fn verify(&mut self, declaration: &Declaration) -> Result<(), GenError> {
        for target in declaration.references() {
            if !self.catalog.contains(target) {
                return Err(GenError::UnresolvedSchema(target.to_string()));
            }
        }

        if let Some(first) = self.type_idents.get(&declaration.ident) {
            return Err(GenError::DuplicateIdentifier {
                ident:  declaration.ident.clone(),
                first:  first.clone(),
                second: declaration.name.clone(),
            });
        }
        self.type_idents
            .insert(declaration.ident.clone(), declaration.name.clone());

        Ok(())
    }
}
