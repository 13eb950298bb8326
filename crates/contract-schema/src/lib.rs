// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! contract-schema: build-time assembly of an API schema contract.
//!
//! Declarations reference each other by name only. Nothing is dereferenced
//! until [`SchemaComposer::close`] runs, so mutually referential entities
//! (a cluster that names its owning project, a project that lists its
//! clusters) never expand inline.
//!
//! # Pipeline
//!
//! ```text
//! Collecting ──close()──▶ Resolving ──▶ Validating ──▶ Closed
//!                              │              │
//!                              └──────┬───────┘
//!                                     ▼
//!                                   Failed
//! ```
//!
//! - `Collecting`: [`SchemaComposer::register`], [`SchemaComposer::wrap_connection`],
//!   [`SchemaComposer::add_query_field`] and [`SchemaComposer::add_mutation`] accept
//!   definitions. Identical re-registration is a no-op; a different shape under
//!   the same name is [`SchemaError::DuplicateTypeDefinition`].
//! - `Resolving`: every named reference must point at a registered type of a
//!   kind legal in that position.
//! - `Validating`: interface implementations are complete and every connection
//!   pair is internally consistent.
//! - `Closed`: the reachable closure is frozen into a [`RootSchema`]; the
//!   exporters ([`to_definition_text`], [`to_introspection_document`]) only
//!   accept a closed composer.
//!
//! # Determinism Invariant
//!
//! Both exports are pure functions of the closed schema. Iteration follows
//! declaration order (text form) or byte-wise name order (introspection
//! form); no hash-map iteration order ever reaches an artifact.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod composer;
mod error;
mod registry;
mod types;

/// Relay-style connection/edge factory and the shared `PageInfo` type.
pub mod connection;
/// Text and introspection projections of a closed schema.
pub mod export;
/// The `Node` interface and opaque global identifiers.
pub mod identity;
/// Mutation envelopes (input/payload pairs with an echoed correlation token).
pub mod operation;

pub use composer::{Phase, RootSchema, SchemaComposer, MUTATION_TYPE, QUERY_TYPE};
pub use connection::{ConnectionFactory, ConnectionPair};
pub use error::SchemaError;
pub use export::{to_definition_text, to_introspection_document, IntrospectionDocument};
pub use identity::{GlobalId, GlobalIdError, Identifiable, IdentityTable};
pub use operation::{MutationDefinition, PayloadField, PayloadResolver, ResolveError};
pub use registry::TypeRegistry;
pub use types::{
    is_valid_name, scalar, DefinitionKind, Discriminant, EnumBuilder, EnumValue, Field,
    InputObjectBuilder, InputValue, InterfaceBuilder, ListNullability, ObjectBuilder,
    TypeDefinition, TypeKind, TypeRef,
};
