// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Arena of type definitions with a name index.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::SchemaError;
use crate::types::{is_valid_name, Discriminant, TypeDefinition, TypeKind};

/// Name-indexed arena of [`TypeDefinition`]s.
///
/// Definitions are stored in registration order; the index only serves
/// lookups, so iteration never depends on hash order.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    arena: Vec<TypeDefinition>,
    index: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `def`.
    ///
    /// Re-registering an identical definition is a no-op that returns the
    /// stored one. A different shape under an existing name fails with
    /// [`SchemaError::DuplicateTypeDefinition`].
    ///
    /// # Errors
    /// Also rejects illegal names, repeated member names within the
    /// definition and repeated enum discriminants.
    pub fn register(&mut self, def: TypeDefinition) -> Result<&TypeDefinition, SchemaError> {
        if let Some(slot) = self.admit(&def)? {
            return Ok(&self.arena[slot]);
        }
        debug!(name = %def.name, kind = %def.kind(), "registered type");
        Ok(self.insert(def))
    }

    /// Runs every check [`register`](Self::register) would, without storing.
    ///
    /// Returns the slot of an identical stored definition, if any.
    pub(crate) fn admit(&self, def: &TypeDefinition) -> Result<Option<usize>, SchemaError> {
        if let Some(&slot) = self.index.get(&def.name) {
            if self.arena[slot] == *def {
                return Ok(Some(slot));
            }
            return Err(SchemaError::DuplicateTypeDefinition(def.name.clone()));
        }
        validate_definition(def)?;
        Ok(None)
    }

    /// Stores a definition known to be admissible.
    pub(crate) fn insert(&mut self, def: TypeDefinition) -> &TypeDefinition {
        let slot = self.arena.len();
        self.index.insert(def.name.clone(), slot);
        self.arena.push(def);
        &self.arena[slot]
    }

    /// Looks up a definition by name.
    ///
    /// # Errors
    /// [`SchemaError::UnknownType`] when `name` was never registered.
    pub fn lookup(&self, name: &str) -> Result<&TypeDefinition, SchemaError> {
        self.get(name)
            .ok_or_else(|| SchemaError::UnknownType(name.to_owned()))
    }

    /// Looks up a definition by name.
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.index.get(name).map(|&slot| &self.arena[slot])
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.arena.iter()
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

pub(crate) fn check_name(name: &str, context: &str) -> Result<(), SchemaError> {
    if is_valid_name(name) && !name.starts_with("__") {
        Ok(())
    } else {
        Err(SchemaError::InvalidName {
            name: name.to_owned(),
            context: context.to_owned(),
        })
    }
}

fn check_unique<'a>(
    owner: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for name in names {
        check_name(name, owner)?;
        if !seen.insert(name) {
            return Err(SchemaError::DuplicateFieldName {
                type_name: owner.to_owned(),
                field: name.to_owned(),
            });
        }
    }
    Ok(())
}

fn validate_definition(def: &TypeDefinition) -> Result<(), SchemaError> {
    check_name(&def.name, &def.name)?;
    match &def.kind {
        TypeKind::Scalar => Ok(()),
        TypeKind::Enum { values } => {
            check_unique(&def.name, values.iter().map(|v| v.name.as_str()))?;
            let mut seen: HashMap<&Discriminant, &str> = HashMap::new();
            for value in values {
                if let Some(first) = seen.insert(&value.discriminant, &value.name) {
                    return Err(SchemaError::DuplicateEnumDiscriminant {
                        enum_name: def.name.clone(),
                        discriminant: value.discriminant.to_string(),
                        first: first.to_owned(),
                        second: value.name.clone(),
                    });
                }
            }
            Ok(())
        }
        TypeKind::Object { fields, .. } | TypeKind::Interface { fields } => {
            check_unique(&def.name, fields.iter().map(|f| f.name.as_str()))?;
            for field in fields {
                let owner = format!("{}.{}", def.name, field.name);
                check_unique(&owner, field.args.iter().map(|a| a.name.as_str()))?;
            }
            Ok(())
        }
        TypeKind::InputObject { fields } => {
            check_unique(&def.name, fields.iter().map(|f| f.name.as_str()))
        }
    }
}
