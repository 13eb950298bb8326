// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Root schema composer and the closed [`RootSchema`].

use std::collections::{BTreeSet, HashMap, VecDeque};
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::connection::{page_info, ConnectionFactory, ConnectionPair};
use crate::error::SchemaError;
use crate::export::sdl;
use crate::identity::{
    implements_identity, node_interface, Identifiable, IdentityTable, ID_FIELD, NODE_FIELD,
    NODE_INTERFACE,
};
use crate::operation::MutationDefinition;
use crate::registry::{check_name, TypeRegistry};
use crate::types::{
    scalar, DefinitionKind, Field, InputValue, ObjectBuilder, TypeDefinition, TypeKind, TypeRef,
};

/// Name of the query root type.
pub const QUERY_TYPE: &str = "Query";
/// Name of the mutation root type.
pub const MUTATION_TYPE: &str = "Mutation";

/// Composer lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Accepting definitions.
    Collecting,
    /// Dereferencing every named reference.
    Resolving,
    /// Checking interface implementations and connection pairs.
    Validating,
    /// Immutable; exports are available.
    Closed,
    /// Composition failed; terminal.
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Collecting => "Collecting",
            Self::Resolving => "Resolving",
            Self::Validating => "Validating",
            Self::Closed => "Closed",
            Self::Failed => "Failed",
        };
        f.write_str(s)
    }
}

/// Collects declarations and composes them into a [`RootSchema`].
///
/// Each build owns its composer, so independent builds (and tests) never
/// share registry state. The builtin scalars and the `Node` interface are
/// registered on construction.
///
/// A rejected declaration leaves the composer unchanged; the caller decides
/// whether to abort. A failed [`close`](Self::close) is terminal.
#[derive(Debug)]
pub struct SchemaComposer {
    phase: Phase,
    registry: TypeRegistry,
    connections: ConnectionFactory,
    query_fields: Vec<Field>,
    mutations: Vec<MutationDefinition>,
    schema: Option<RootSchema>,
}

impl Default for SchemaComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaComposer {
    /// Fresh composer in [`Phase::Collecting`].
    pub fn new() -> Self {
        let mut registry = TypeRegistry::new();
        let builtins = scalar::BUILTIN
            .iter()
            .map(|name| TypeDefinition::scalar(*name))
            .chain(std::iter::once(node_interface()));
        for def in builtins {
            registry.insert(def);
        }
        Self {
            phase: Phase::Collecting,
            registry,
            connections: ConnectionFactory::new(),
            query_fields: Vec::new(),
            mutations: Vec::new(),
            schema: None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Registered definitions, including builtins.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Connection pairs derived so far.
    pub fn connections(&self) -> &ConnectionFactory {
        &self.connections
    }

    fn ensure_collecting(&self) -> Result<(), SchemaError> {
        if self.phase == Phase::Collecting {
            Ok(())
        } else {
            Err(SchemaError::SchemaAlreadyClosed(self.phase))
        }
    }

    /// Registers a definition.
    ///
    /// # Errors
    /// [`SchemaError::SchemaAlreadyClosed`] outside `Collecting`, otherwise
    /// whatever [`TypeRegistry::register`] reports.
    pub fn register(&mut self, def: TypeDefinition) -> Result<&TypeDefinition, SchemaError> {
        self.ensure_collecting()?;
        self.registry.register(def)
    }

    /// Registers an identity-implementing entity.
    ///
    /// # Errors
    /// [`SchemaError::IncompleteInterfaceImplementation`] if the definition
    /// is not named `T::TYPE_NAME` or does not claim `Node` with a non-null
    /// `id`, plus anything [`register`](Self::register) reports.
    pub fn register_identifiable<T: Identifiable>(&mut self) -> Result<(), SchemaError> {
        let def = T::definition();
        let incomplete = |reason: String| SchemaError::IncompleteInterfaceImplementation {
            type_name: T::TYPE_NAME.to_owned(),
            interface: NODE_INTERFACE.to_owned(),
            reason,
        };
        if def.name != T::TYPE_NAME {
            return Err(incomplete(format!("definition is named {}", def.name)));
        }
        if !implements_identity(&def) {
            return Err(incomplete(format!("missing {NODE_INTERFACE} claim or non-null {ID_FIELD}")));
        }
        self.register(def).map(|_| ())
    }

    /// Derives (or returns the memoized) connection pair for `entity` and
    /// registers `PageInfo`, the edge and the connection.
    ///
    /// All three definitions are checked before any is stored, and the pair
    /// is memoized only once they are registered.
    ///
    /// # Errors
    /// See [`ConnectionFactory::wrap`]; also fails if another definition
    /// already occupies the derived names or an extra field is malformed.
    pub fn wrap_connection(
        &mut self,
        entity: &str,
        extra: impl IntoIterator<Item = Field>,
    ) -> Result<Arc<ConnectionPair>, SchemaError> {
        self.ensure_collecting()?;
        let pair = self.connections.prepare(entity, extra)?;
        self.register_all([page_info(), pair.edge().clone(), pair.connection().clone()])?;
        self.connections.remember(&pair);
        Ok(pair)
    }

    /// Registers every definition or none of them.
    fn register_all<const N: usize>(
        &mut self,
        defs: [TypeDefinition; N],
    ) -> Result<(), SchemaError> {
        let mut fresh = Vec::with_capacity(N);
        for def in defs {
            if self.registry.admit(&def)?.is_none() {
                fresh.push(def);
            }
        }
        for def in fresh {
            debug!(name = %def.name, kind = %def.kind(), "registered type");
            self.registry.insert(def);
        }
        Ok(())
    }

    /// Adds a field to the query root.
    ///
    /// # Errors
    /// [`SchemaError::ReservedFieldName`] for `node`,
    /// [`SchemaError::DuplicateFieldName`] for a repeated name.
    pub fn add_query_field(&mut self, field: Field) -> Result<(), SchemaError> {
        self.ensure_collecting()?;
        check_name(&field.name, QUERY_TYPE)?;
        if field.name == NODE_FIELD {
            return Err(SchemaError::ReservedFieldName {
                type_name: QUERY_TYPE.to_owned(),
                field: field.name,
            });
        }
        if self.query_fields.iter().any(|f| f.name == field.name) {
            return Err(SchemaError::DuplicateFieldName {
                type_name: QUERY_TYPE.to_owned(),
                field: field.name,
            });
        }
        debug!(field = %field.name, "query field added");
        self.query_fields.push(field);
        Ok(())
    }

    /// Adds a mutation and registers its input and payload types.
    ///
    /// # Errors
    /// Envelope violations from [`MutationDefinition::validate`],
    /// [`SchemaError::DuplicateFieldName`] for a repeated root field, or a
    /// conflict on the derived type names.
    pub fn add_mutation(&mut self, mutation: MutationDefinition) -> Result<(), SchemaError> {
        self.ensure_collecting()?;
        mutation.validate()?;
        let field_name = mutation.field_name();
        if self.mutations.iter().any(|m| m.field_name() == field_name) {
            return Err(SchemaError::DuplicateFieldName {
                type_name: MUTATION_TYPE.to_owned(),
                field: field_name,
            });
        }
        let input = mutation.input_definition();
        let payload = mutation.payload_definition();
        for name in [&input.name, &payload.name] {
            if self.registry.contains(name) {
                return Err(SchemaError::DuplicateTypeDefinition(name.clone()));
            }
        }
        self.register_all([input, payload])?;
        debug!(mutation = %field_name, "mutation added");
        self.mutations.push(mutation);
        Ok(())
    }

    /// Runs resolution and validation and freezes the result.
    ///
    /// Triggered once; there is no way back to `Collecting`.
    ///
    /// # Errors
    /// [`SchemaError::SchemaAlreadyClosed`] if not collecting. Any
    /// composition error moves the composer to [`Phase::Failed`].
    pub fn close(&mut self) -> Result<&RootSchema, SchemaError> {
        self.ensure_collecting()?;
        match self.compose() {
            Ok(schema) => {
                self.phase = Phase::Closed;
                let schema = self.schema.insert(schema);
                info!(
                    types = schema.types.len(),
                    fingerprint = %schema.fingerprint(),
                    "schema closed"
                );
                Ok(schema)
            }
            Err(err) => {
                debug!(error = %err, "composition failed");
                self.phase = Phase::Failed;
                Err(err)
            }
        }
    }

    /// The closed schema.
    ///
    /// # Errors
    /// [`SchemaError::SchemaNotClosed`] unless the phase is `Closed`.
    pub fn schema(&self) -> Result<&RootSchema, SchemaError> {
        match (&self.schema, self.phase) {
            (Some(schema), Phase::Closed) => Ok(schema),
            _ => Err(SchemaError::SchemaNotClosed(self.phase)),
        }
    }

    fn compose(&mut self) -> Result<RootSchema, SchemaError> {
        self.phase = Phase::Resolving;
        debug!(phase = %self.phase, "composing");
        self.register_roots()?;
        resolve_references(&self.registry)?;

        self.phase = Phase::Validating;
        debug!(phase = %self.phase, "composing");
        let identity = validate_implementations(&self.registry)?;
        self.connections.validate(&self.registry)?;

        let mutation = (!self.mutations.is_empty()).then(|| MUTATION_TYPE.to_owned());
        let reachable = reachable_types(&self.registry, QUERY_TYPE, mutation.as_deref());
        let types: Vec<TypeDefinition> = self
            .registry
            .iter()
            .filter(|def| reachable.contains(def.name.as_str()))
            .cloned()
            .collect();
        let index = types
            .iter()
            .enumerate()
            .map(|(slot, def)| (def.name.clone(), slot))
            .collect();
        Ok(RootSchema {
            types,
            index,
            mutation,
            mutations: self.mutations.clone(),
            identity,
        })
    }

    fn register_roots(&mut self) -> Result<(), SchemaError> {
        let mut query = ObjectBuilder::new(QUERY_TYPE);
        for field in &self.query_fields {
            query = query.field(field.clone());
        }
        if self.registry.iter().any(|def| def.implements(NODE_INTERFACE)) {
            query = query.field(
                Field::new(NODE_FIELD, TypeRef::named(NODE_INTERFACE))
                    .description("Fetches an object given its ID")
                    .arg(
                        InputValue::new(ID_FIELD, TypeRef::required(scalar::ID))
                            .description("The ID of an object"),
                    ),
            );
        }
        let query = query.build();
        if query.fields().is_empty() {
            return Err(SchemaError::EmptyRootType(QUERY_TYPE));
        }
        if self.registry.contains(QUERY_TYPE) {
            return Err(SchemaError::DuplicateTypeDefinition(QUERY_TYPE.to_owned()));
        }
        self.registry.register(query)?;

        if !self.mutations.is_empty() {
            if self.registry.contains(MUTATION_TYPE) {
                return Err(SchemaError::DuplicateTypeDefinition(MUTATION_TYPE.to_owned()));
            }
            let mut root = ObjectBuilder::new(MUTATION_TYPE);
            for mutation in &self.mutations {
                root = root.field(mutation.root_field());
            }
            self.registry.register(root.build())?;
        }
        Ok(())
    }
}

fn resolve_references(registry: &TypeRegistry) -> Result<(), SchemaError> {
    for def in registry.iter() {
        for interface in def.interfaces() {
            match registry.get(interface).map(TypeDefinition::kind) {
                Some(DefinitionKind::Interface) => {}
                Some(kind) => {
                    return Err(SchemaError::IncompleteInterfaceImplementation {
                        type_name: def.name.clone(),
                        interface: interface.clone(),
                        reason: format!("{interface} is a {kind}, not an interface"),
                    });
                }
                None => {
                    return Err(SchemaError::DanglingTypeReference {
                        type_name: def.name.clone(),
                        field: "implements".to_owned(),
                        target: interface.clone(),
                    });
                }
            }
        }
        for (field, ty, is_input) in def.references() {
            if !ty.is_well_formed() {
                return Err(SchemaError::InvalidTypeReference {
                    type_name: def.name.clone(),
                    field,
                    reference: ty.to_string(),
                });
            }
            let target = ty.named_type();
            let Some(target_def) = registry.get(target) else {
                return Err(SchemaError::DanglingTypeReference {
                    type_name: def.name.clone(),
                    field,
                    target: target.to_owned(),
                });
            };
            let kind = target_def.kind();
            let legal = if is_input { kind.is_input() } else { kind.is_output() };
            if !legal {
                return Err(SchemaError::InvalidTypePosition {
                    type_name: def.name.clone(),
                    field,
                    target: target.to_owned(),
                    kind,
                    position: if is_input { "input" } else { "output" },
                });
            }
        }
    }
    Ok(())
}

fn validate_implementations(registry: &TypeRegistry) -> Result<IdentityTable, SchemaError> {
    let mut identity = IdentityTable::default();
    for def in registry.iter() {
        for interface in def.interfaces() {
            let iface = registry.lookup(interface)?;
            check_implementation(def, iface)?;
        }
        if def.implements(NODE_INTERFACE) {
            identity.insert(&def.name);
        }
    }
    Ok(identity)
}

fn check_implementation(def: &TypeDefinition, iface: &TypeDefinition) -> Result<(), SchemaError> {
    let incomplete = |reason: String| SchemaError::IncompleteInterfaceImplementation {
        type_name: def.name.clone(),
        interface: iface.name.clone(),
        reason,
    };
    for expected in iface.fields() {
        let Some(actual) = def.field(&expected.name) else {
            return Err(incomplete(format!("missing field {}", expected.name)));
        };
        if !actual.ty.is_subtype_of(&expected.ty) {
            return Err(incomplete(format!(
                "field {} has type {}, expected {}",
                expected.name, actual.ty, expected.ty
            )));
        }
        for arg in &expected.args {
            match actual.args.iter().find(|a| a.name == arg.name) {
                Some(a) if a.ty == arg.ty => {}
                Some(a) => {
                    return Err(incomplete(format!(
                        "argument {}.{} has type {}, expected {}",
                        expected.name, arg.name, a.ty, arg.ty
                    )));
                }
                None => {
                    return Err(incomplete(format!(
                        "missing argument {}.{}",
                        expected.name, arg.name
                    )));
                }
            }
        }
        if let Some(extra) = actual
            .args
            .iter()
            .find(|a| a.ty.is_non_null() && !expected.args.iter().any(|e| e.name == a.name))
        {
            return Err(incomplete(format!(
                "additional argument {}.{} must be nullable",
                expected.name, extra.name
            )));
        }
    }
    Ok(())
}

/// Names reachable from the roots, following fields, arguments, input
/// fields, interfaces and, for a reached interface, its implementers.
fn reachable_types<'a>(
    registry: &'a TypeRegistry,
    query: &'a str,
    mutation: Option<&'a str>,
) -> BTreeSet<&'a str> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut queue: VecDeque<&str> = std::iter::once(query).chain(mutation).collect();
    while let Some(name) = queue.pop_front() {
        if !seen.insert(name) {
            continue;
        }
        let Some(def) = registry.get(name) else {
            continue;
        };
        queue.extend(def.interfaces().iter().map(String::as_str));
        for (_, ty, _) in def.references() {
            if let Some(target) = registry.get(ty.named_type()) {
                queue.push_back(target.name.as_str());
            }
        }
        if let TypeKind::Interface { .. } = def.kind {
            queue.extend(
                registry
                    .iter()
                    .filter(|d| d.implements(name))
                    .map(|d| d.name.as_str()),
            );
        }
    }
    seen
}

/// Immutable result of composition: the reachable closure plus root
/// metadata.
#[derive(Debug, Clone)]
pub struct RootSchema {
    types: Vec<TypeDefinition>,
    index: HashMap<String, usize>,
    mutation: Option<String>,
    mutations: Vec<MutationDefinition>,
    identity: IdentityTable,
}

impl RootSchema {
    /// Reachable definitions in declaration order.
    pub fn types(&self) -> &[TypeDefinition] {
        &self.types
    }

    /// Definition by name, if reachable.
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.index.get(name).map(|&slot| &self.types[slot])
    }

    /// Returns `true` if `name` is in the closure.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The `Query` root.
    pub fn query_type(&self) -> &TypeDefinition {
        // Composition always registers the query root.
        &self.types[self.index[QUERY_TYPE]]
    }

    /// The `Mutation` root, when any mutation was declared.
    pub fn mutation_type(&self) -> Option<&TypeDefinition> {
        self.mutation.as_deref().and_then(|name| self.get(name))
    }

    /// Identity implementers.
    pub fn identity(&self) -> &IdentityTable {
        &self.identity
    }

    /// Declared mutations in declaration order.
    pub fn mutations(&self) -> &[MutationDefinition] {
        &self.mutations
    }

    /// Mutation by root field name (`createProject`).
    pub fn mutation(&self, field_name: &str) -> Option<&MutationDefinition> {
        self.mutations.iter().find(|m| m.field_name() == field_name)
    }

    /// Objects implementing `interface`, in declaration order.
    pub fn implementers<'a>(
        &'a self,
        interface: &'a str,
    ) -> impl Iterator<Item = &'a TypeDefinition> + 'a {
        self.types.iter().filter(move |def| def.implements(interface))
    }

    /// BLAKE3 hex digest of the definition text.
    pub fn fingerprint(&self) -> String {
        blake3::hash(sdl::render(self).as_bytes()).to_hex().to_string()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::identity::id_field;
    use crate::operation::PayloadField;
    use crate::types::{EnumBuilder, InputObjectBuilder, InterfaceBuilder, ListNullability};

    fn user() -> TypeDefinition {
        ObjectBuilder::new("User")
            .implements(NODE_INTERFACE)
            .field(id_field())
            .build()
    }

    fn composer_with_user() -> SchemaComposer {
        let mut c = SchemaComposer::new();
        c.register(user()).unwrap();
        c.add_query_field(Field::new("user", TypeRef::named("User")))
            .unwrap();
        c
    }

    // ── 1. lifecycle ─────────────────────────────────────────────────────

    #[test]
    fn close_moves_to_closed_and_rejects_further_declarations() {
        let mut c = composer_with_user();
        assert_eq!(c.phase(), Phase::Collecting);
        c.close().unwrap();
        assert_eq!(c.phase(), Phase::Closed);
        assert_eq!(
            c.register(TypeDefinition::scalar("Late")),
            Err(SchemaError::SchemaAlreadyClosed(Phase::Closed))
        );
        assert!(matches!(
            c.close(),
            Err(SchemaError::SchemaAlreadyClosed(Phase::Closed))
        ));
    }

    #[test]
    fn schema_is_unavailable_before_close() {
        let c = composer_with_user();
        assert_eq!(
            c.schema().unwrap_err(),
            SchemaError::SchemaNotClosed(Phase::Collecting)
        );
    }

    #[test]
    fn failed_close_is_terminal() {
        let mut c = SchemaComposer::new();
        c.add_query_field(Field::new("missing", TypeRef::named("Nowhere")))
            .unwrap();
        assert!(matches!(
            c.close(),
            Err(SchemaError::DanglingTypeReference { ref target, .. }) if target == "Nowhere"
        ));
        assert_eq!(c.phase(), Phase::Failed);
        assert_eq!(
            c.schema().unwrap_err(),
            SchemaError::SchemaNotClosed(Phase::Failed)
        );
        assert_eq!(
            c.register(TypeDefinition::scalar("Nowhere")),
            Err(SchemaError::SchemaAlreadyClosed(Phase::Failed))
        );
    }

    #[test]
    fn empty_query_is_rejected() {
        let mut c = SchemaComposer::new();
        assert_eq!(
            c.close().unwrap_err(),
            SchemaError::EmptyRootType(QUERY_TYPE)
        );
    }

    // ── 2. resolution ────────────────────────────────────────────────────

    #[test]
    fn node_field_is_generated_and_reserved() {
        let mut c = composer_with_user();
        assert!(matches!(
            c.add_query_field(Field::new(NODE_FIELD, TypeRef::named(NODE_INTERFACE))),
            Err(SchemaError::ReservedFieldName { .. })
        ));
        let schema = c.close().unwrap();
        let node = schema.query_type().field(NODE_FIELD).unwrap();
        assert_eq!(node.ty.to_string(), "Node");
        assert_eq!(node.args[0].ty.to_string(), "ID!");
        assert!(schema.identity().contains("User"));
    }

    #[test]
    fn input_object_in_output_position_is_rejected() {
        let mut c = SchemaComposer::new();
        c.register(
            InputObjectBuilder::new("Filter")
                .field(InputValue::new("q", TypeRef::named(scalar::STRING)))
                .build(),
        )
        .unwrap();
        c.add_query_field(Field::new("filter", TypeRef::named("Filter")))
            .unwrap();
        assert!(matches!(
            c.close(),
            Err(SchemaError::InvalidTypePosition { position: "output", .. })
        ));
    }

    #[test]
    fn object_in_argument_position_is_rejected() {
        let mut c = composer_with_user();
        c.add_query_field(
            Field::new("byUser", TypeRef::named(scalar::STRING))
                .arg(InputValue::new("who", TypeRef::named("User"))),
        )
        .unwrap();
        assert!(matches!(
            c.close(),
            Err(SchemaError::InvalidTypePosition { ref field, position: "input", .. }) if field == "byUser.who"
        ));
    }

    #[test]
    fn nested_non_null_is_rejected() {
        let mut c = SchemaComposer::new();
        let bad = TypeRef::NonNull(Box::new(TypeRef::required(scalar::ID)));
        c.add_query_field(Field::new("bad", bad)).unwrap();
        assert!(matches!(
            c.close(),
            Err(SchemaError::InvalidTypeReference { .. })
        ));
    }

    // ── 3. validation ────────────────────────────────────────────────────

    #[test]
    fn nullable_id_does_not_implement_node() {
        let mut c = SchemaComposer::new();
        c.register(
            ObjectBuilder::new("User")
                .implements(NODE_INTERFACE)
                .field(Field::new(ID_FIELD, TypeRef::named(scalar::ID)))
                .build(),
        )
        .unwrap();
        c.add_query_field(Field::new("user", TypeRef::named("User")))
            .unwrap();
        assert!(matches!(
            c.close(),
            Err(SchemaError::IncompleteInterfaceImplementation { ref type_name, .. }) if type_name == "User"
        ));
    }

    #[test]
    fn interface_arguments_must_match() {
        let mut c = SchemaComposer::new();
        c.register(
            InterfaceBuilder::new("Named")
                .field(
                    Field::new("name", TypeRef::named(scalar::STRING))
                        .arg(InputValue::new("locale", TypeRef::named(scalar::STRING))),
                )
                .build(),
        )
        .unwrap();
        c.register(
            ObjectBuilder::new("Thing")
                .implements("Named")
                .field(Field::new("name", TypeRef::required(scalar::STRING)))
                .build(),
        )
        .unwrap();
        c.add_query_field(Field::new("thing", TypeRef::named("Thing")))
            .unwrap();
        let err = c.close().unwrap_err();
        assert!(matches!(
            err,
            SchemaError::IncompleteInterfaceImplementation { ref reason, .. } if reason.contains("locale")
        ));
    }

    #[test]
    fn tampered_connection_is_inconsistent() {
        let mut c = composer_with_user();
        c.register(
            ObjectBuilder::new("UserEdge")
                .field(Field::new("node", TypeRef::named("User")))
                .build(),
        )
        .unwrap();
        assert!(matches!(
            c.wrap_connection("User", []),
            Err(SchemaError::DuplicateTypeDefinition(ref name)) if name == "UserEdge"
        ));
        assert!(matches!(
            c.close(),
            Err(SchemaError::InconsistentConnection { ref entity, .. }) if entity == "User"
        ));
    }

    // ── 4. closure ───────────────────────────────────────────────────────

    #[test]
    fn unreachable_types_are_pruned() {
        let mut c = composer_with_user();
        c.register(EnumBuilder::new("Orphan").value("A", 0).build())
            .unwrap();
        let schema = c.close().unwrap();
        assert!(!schema.contains("Orphan"));
        assert!(!schema.contains(scalar::FLOAT));
        assert!(schema.contains("User"));
        assert!(schema.contains(NODE_INTERFACE));
    }

    #[test]
    fn implementers_of_reachable_interface_are_kept() {
        let mut c = SchemaComposer::new();
        c.register(user()).unwrap();
        c.register(
            ObjectBuilder::new("Device")
                .implements(NODE_INTERFACE)
                .field(id_field())
                .build(),
        )
        .unwrap();
        c.add_query_field(Field::new(
            "ids",
            TypeRef::list_of(TypeRef::named(scalar::ID), ListNullability::NonNullItems),
        ))
        .unwrap();
        let schema = c.close().unwrap();
        let names: Vec<&str> = schema
            .implementers(NODE_INTERFACE)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, ["User", "Device"]);
    }

    #[test]
    fn mutation_root_is_absent_without_mutations() {
        let mut c = composer_with_user();
        let schema = c.close().unwrap();
        assert!(schema.mutation_type().is_none());
        assert!(schema.mutations().is_empty());
    }

    // ── 5. rejected declarations ─────────────────────────────────────────

    #[test]
    fn builtins_are_present_on_construction() {
        let c = SchemaComposer::new();
        for name in scalar::BUILTIN {
            assert!(c.registry().contains(name), "{name}");
        }
        assert!(c.registry().contains(NODE_INTERFACE));
    }

    #[test]
    fn rejected_wrap_leaves_no_trace() {
        let mut c = composer_with_user();
        let before = c.registry().len();
        let bad = Field::new("total-count", TypeRef::named(scalar::INT));
        assert!(matches!(
            c.wrap_connection("User", [bad]),
            Err(SchemaError::InvalidName { ref name, .. }) if name == "total-count"
        ));
        assert_eq!(c.registry().len(), before);
        assert!(!c.registry().contains("UserEdge"));
        assert!(c.connections().is_empty());

        let pair = c
            .wrap_connection("User", [Field::new("totalCount", TypeRef::named(scalar::INT))])
            .unwrap();
        c.add_query_field(Field::new("users", pair.connection_ref()))
            .unwrap();
        let schema = c.close().unwrap();
        assert!(schema.contains("UserConnection"));
    }

    #[test]
    fn rejected_mutation_leaves_no_trace() {
        let mut c = composer_with_user();
        let before = c.registry().len();
        let inputs = || [InputValue::new("name", TypeRef::named(scalar::STRING))];
        let bad = MutationDefinition::define(
            "CreateThing",
            inputs(),
            [PayloadField::new("bad-name", TypeRef::named(scalar::STRING))],
        );
        assert!(matches!(
            c.add_mutation(bad),
            Err(SchemaError::InvalidName { ref name, .. }) if name == "bad-name"
        ));
        assert_eq!(c.registry().len(), before);
        assert!(!c.registry().contains("CreateThingInput"));

        let good = MutationDefinition::define(
            "CreateThing",
            inputs(),
            [PayloadField::new("name", TypeRef::named(scalar::STRING))],
        );
        c.add_mutation(good).unwrap();
        let schema = c.close().unwrap();
        assert!(schema.mutation("createThing").is_some());
    }
}
