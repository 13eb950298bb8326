// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Composition-time error taxonomy.

use thiserror::Error;

use crate::composer::Phase;
use crate::types::DefinitionKind;

/// Errors raised while collecting, resolving, validating or exporting a schema.
///
/// Every variant is fatal to the build. Each carries the offending type and
/// field names so the failure can be traced back to its declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A lookup named a type that was never registered.
    #[error("unknown type: {0}")]
    UnknownType(String),
    /// A type, field, argument or enum value name is not a legal identifier.
    #[error("invalid name {name:?} in {context}")]
    InvalidName {
        /// Offending name.
        name: String,
        /// Where the name was declared (type name or `Type.field`).
        context: String,
    },
    /// A second definition with the same name but a different shape.
    #[error("duplicate type definition: {0}")]
    DuplicateTypeDefinition(String),
    /// Two enum members share a discriminant.
    #[error("duplicate discriminant {discriminant} in enum {enum_name} ({first} and {second})")]
    DuplicateEnumDiscriminant {
        /// Enum type.
        enum_name: String,
        /// Rendered discriminant.
        discriminant: String,
        /// First member using it.
        first: String,
        /// Second member using it.
        second: String,
    },
    /// A field, argument or enum member name appears twice in one scope.
    #[error("duplicate member {field} in {type_name}")]
    DuplicateFieldName {
        /// Owning type (or `Type.field` for arguments).
        type_name: String,
        /// Repeated name.
        field: String,
    },
    /// An author-declared field uses a name the composer injects itself.
    #[error("reserved field name {field} in {type_name}")]
    ReservedFieldName {
        /// Owning type.
        type_name: String,
        /// Reserved name.
        field: String,
    },
    /// A type reference is structurally invalid (e.g. `NonNull(NonNull(_))`).
    #[error("invalid type reference {reference} at {type_name}.{field}")]
    InvalidTypeReference {
        /// Owning type.
        type_name: String,
        /// Field (or `field.arg`).
        field: String,
        /// Rendered reference.
        reference: String,
    },
    /// A reference points at a kind that is not legal in its position.
    #[error("{target} is a {kind} and cannot be used as an {position} type at {type_name}.{field}")]
    InvalidTypePosition {
        /// Owning type.
        type_name: String,
        /// Field (or `field.arg`).
        field: String,
        /// Referenced type.
        target: String,
        /// Kind of the referenced type.
        kind: DefinitionKind,
        /// `input` or `output`.
        position: &'static str,
    },
    /// A reference names a type absent from the registry.
    #[error("dangling type reference {target} at {type_name}.{field}")]
    DanglingTypeReference {
        /// Owning type.
        type_name: String,
        /// Field (or `field.arg`, or `implements`).
        field: String,
        /// Missing type.
        target: String,
    },
    /// An object claims an interface but does not expose a compatible field.
    #[error("{type_name} does not implement {interface}: {reason}")]
    IncompleteInterfaceImplementation {
        /// Implementing object.
        type_name: String,
        /// Claimed interface.
        interface: String,
        /// What is missing or incompatible.
        reason: String,
    },
    /// A connection/edge pair no longer has the shape the factory produced.
    #[error("inconsistent connection for {entity}: {reason}")]
    InconsistentConnection {
        /// Wrapped entity.
        entity: String,
        /// What diverged.
        reason: String,
    },
    /// A mutation payload field is non-null without being guaranteed.
    #[error("payload field {field} of {mutation} is non-null but not guaranteed")]
    UnprovenNonNullOutput {
        /// Mutation name.
        mutation: String,
        /// Offending payload field.
        field: String,
    },
    /// A root operation type would have no fields.
    #[error("root type {0} has no fields")]
    EmptyRootType(&'static str),
    /// Registration or closing attempted outside `Collecting`.
    #[error("schema already closed (phase {0})")]
    SchemaAlreadyClosed(Phase),
    /// Export or schema access attempted before `Closed`.
    #[error("schema not closed (phase {0})")]
    SchemaNotClosed(Phase),
}
