// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::SchemaError;
use crate::registry::{check_name, TypeRegistry};
use crate::types::{
    scalar, Field, InputValue, ListNullability, ObjectBuilder, TypeDefinition, TypeRef,
};

/// Name of the shared page-info type.
pub const PAGE_INFO: &str = "PageInfo";

/// Field names every connection owns; extra fields may not reuse them.
pub const RESERVED_CONNECTION_FIELDS: [&str; 2] = ["pageInfo", "edges"];

/// The shared `PageInfo` definition.
pub fn page_info() -> TypeDefinition {
    ObjectBuilder::new(PAGE_INFO)
        .description("Information about pagination in a connection.")
        .field(
            Field::new("hasNextPage", TypeRef::required(scalar::BOOLEAN))
                .description("When paginating forwards, are there more items?"),
        )
        .field(
            Field::new("hasPreviousPage", TypeRef::required(scalar::BOOLEAN))
                .description("When paginating backwards, are there more items?"),
        )
        .field(
            Field::new("startCursor", TypeRef::named(scalar::STRING))
                .description("When paginating backwards, the cursor to continue."),
        )
        .field(
            Field::new("endCursor", TypeRef::named(scalar::STRING))
                .description("When paginating forwards, the cursor to continue."),
        )
        .build()
}

/// Standard cursor arguments: `after`, `first`, `before`, `last`.
///
/// List fields that return a connection append their own filters after these.
pub fn connection_args() -> Vec<InputValue> {
    vec![
        InputValue::new("after", TypeRef::named(scalar::STRING))
            .description("Returns the items in the list that come after the specified cursor."),
        InputValue::new("first", TypeRef::named(scalar::INT))
            .description("Returns the first n items from the list."),
        InputValue::new("before", TypeRef::named(scalar::STRING))
            .description("Returns the items in the list that come before the specified cursor."),
        InputValue::new("last", TypeRef::named(scalar::INT))
            .description("Returns the last n items from the list."),
    ]
}

/// `{Entity}Edge`
pub fn edge_type_name(entity: &str) -> String {
    format!("{entity}Edge")
}

/// `{Entity}Connection`
///
/// Entity definitions that list a wrapped entity name the connection through
/// this before the pair exists; closing checks the pair was actually wrapped.
pub fn connection_type_name(entity: &str) -> String {
    format!("{entity}Connection")
}

/// `{Entity}Edge` and `{Entity}Connection` derived for one wrapped entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPair {
    entity: String,
    extra: Vec<Field>,
    edge: TypeDefinition,
    connection: TypeDefinition,
}

impl ConnectionPair {
    fn derive(entity: &str, extra: Vec<Field>) -> Self {
        let edge_name = edge_type_name(entity);
        let edge = ObjectBuilder::new(edge_name.as_str())
            .description("An edge in a connection.")
            .field(
                Field::new("node", TypeRef::named(entity))
                    .description("The item at the end of the edge"),
            )
            .field(
                Field::new("cursor", TypeRef::required(scalar::STRING))
                    .description("A cursor for use in pagination"),
            )
            .build();
        let mut connection = ObjectBuilder::new(connection_type_name(entity))
            .description("A connection to a list of items.")
            .field(
                Field::new("pageInfo", TypeRef::required(PAGE_INFO))
                    .description("Information to aid in pagination."),
            )
            .field(
                Field::new(
                    "edges",
                    TypeRef::list_of(TypeRef::named(edge_name), ListNullability::Nullable),
                )
                .description("A list of edges."),
            );
        for field in &extra {
            connection = connection.field(field.clone());
        }
        Self {
            entity: entity.to_owned(),
            extra,
            edge,
            connection: connection.build(),
        }
    }

    /// Wrapped entity name.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Edge definition (`node`, `cursor`).
    pub fn edge(&self) -> &TypeDefinition {
        &self.edge
    }

    /// Connection definition (`pageInfo`, `edges`, extra fields).
    pub fn connection(&self) -> &TypeDefinition {
        &self.connection
    }

    /// Extra connection fields in declaration order.
    pub fn extra_fields(&self) -> &[Field] {
        &self.extra
    }

    /// Nullable reference to the connection type, for use as a field type.
    pub fn connection_ref(&self) -> TypeRef {
        TypeRef::named(self.connection.name.as_str())
    }

    /// Nullable reference to the edge type, for use in mutation payloads.
    pub fn edge_ref(&self) -> TypeRef {
        TypeRef::named(self.edge.name.as_str())
    }
}

/// Memoizing factory keyed by wrapped entity name.
///
/// Wrapping the same entity again with the same extra fields returns the
/// same shared pair. Wrapping it with different extra fields is a conflict,
/// since both calls would define `{Entity}Connection`.
#[derive(Debug, Default, Clone)]
pub struct ConnectionFactory {
    pairs: BTreeMap<String, Arc<ConnectionPair>>,
}

impl ConnectionFactory {
    /// Empty factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pair for `entity`, deriving it on first use.
    ///
    /// # Errors
    /// [`SchemaError::ReservedFieldName`] if an extra field is named `edges`
    /// or `pageInfo`; [`SchemaError::DuplicateTypeDefinition`] if `entity`
    /// was already wrapped with different extra fields.
    pub fn wrap(
        &mut self,
        entity: &str,
        extra: impl IntoIterator<Item = Field>,
    ) -> Result<Arc<ConnectionPair>, SchemaError> {
        let pair = self.prepare(entity, extra)?;
        self.remember(&pair);
        Ok(pair)
    }

    /// Returns the memoized pair for `entity` or derives a new one without
    /// storing it.
    ///
    /// # Errors
    /// Same as [`wrap`](Self::wrap).
    pub fn prepare(
        &self,
        entity: &str,
        extra: impl IntoIterator<Item = Field>,
    ) -> Result<Arc<ConnectionPair>, SchemaError> {
        check_name(entity, entity)?;
        let extra: Vec<Field> = extra.into_iter().collect();
        let connection_name = connection_type_name(entity);
        if let Some(field) = extra
            .iter()
            .find(|f| RESERVED_CONNECTION_FIELDS.contains(&f.name.as_str()))
        {
            return Err(SchemaError::ReservedFieldName {
                type_name: connection_name,
                field: field.name.clone(),
            });
        }
        if let Some(existing) = self.pairs.get(entity) {
            if existing.extra == extra {
                debug!(entity, "connection memo hit");
                return Ok(Arc::clone(existing));
            }
            return Err(SchemaError::DuplicateTypeDefinition(connection_name));
        }
        debug!(entity, connection = %connection_name, "derived connection pair");
        Ok(Arc::new(ConnectionPair::derive(entity, extra)))
    }

    /// Memoizes a prepared pair; a pair already stored for the entity wins.
    pub(crate) fn remember(&mut self, pair: &Arc<ConnectionPair>) {
        self.pairs
            .entry(pair.entity.clone())
            .or_insert_with(|| Arc::clone(pair));
    }

    /// Pair previously derived for `entity`.
    pub fn get(&self, entity: &str) -> Option<&Arc<ConnectionPair>> {
        self.pairs.get(entity)
    }

    /// All pairs ordered by entity name.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ConnectionPair>> {
        self.pairs.values()
    }

    /// Number of distinct wrapped entities.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if nothing was wrapped.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Checks every pair against the registry.
    ///
    /// The registry must hold exactly the derived edge and connection, the
    /// standard `PageInfo`, and an object or interface for the entity.
    ///
    /// # Errors
    /// [`SchemaError::InconsistentConnection`] naming the first divergence.
    pub(crate) fn validate(&self, registry: &TypeRegistry) -> Result<(), SchemaError> {
        if self.is_empty() {
            return Ok(());
        }
        for pair in self.iter() {
            let inconsistent = |reason: String| SchemaError::InconsistentConnection {
                entity: pair.entity.clone(),
                reason,
            };
            if registry.get(PAGE_INFO) != Some(&page_info()) {
                return Err(inconsistent(format!("{PAGE_INFO} is not the standard definition")));
            }
            for derived in [&pair.edge, &pair.connection] {
                if registry.get(&derived.name) != Some(derived) {
                    return Err(inconsistent(format!(
                        "{} differs from the derived definition",
                        derived.name
                    )));
                }
            }
            match registry.get(&pair.entity).map(TypeDefinition::kind) {
                Some(kind) if kind.is_output() && !kind.is_input() => {}
                Some(kind) => {
                    return Err(inconsistent(format!("wrapped type is a {kind}")));
                }
                None => return Err(inconsistent("wrapped type is not registered".to_owned())),
            }
        }
        Ok(())
    }
}
