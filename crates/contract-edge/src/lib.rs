// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! contract-edge: the edge-cluster API contract.
//!
//! Declares the authoritative (project-scoped) entity graph into a
//! [`SchemaComposer`]:
//!
//! ```text
//! Query.user ─▶ User ─▶ Project ─▶ EdgeClusterConnection ─▶ EdgeCluster
//!                 │                                            │
//!                 └──────────────▶ EdgeCluster ──project──▶ Project
//! ```
//!
//! Leaf enums and value objects are registered first, entities second,
//! operations last. Registration order carries no meaning for resolution
//! (references are by name) but it fixes the order of the text artifact.
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
    clippy::module_name_repetitions,
    clippy::missing_const_for_fn
)]

use contract_schema::{SchemaComposer, SchemaError};
use tracing::debug;

/// Entities implementing `Node`.
pub mod entity;
/// Leaf enumerations.
pub mod enums;
/// Create/update/delete mutations.
pub mod mutation;
/// Type names shared across modules.
pub mod names;
/// Root query fields.
pub mod query;
/// Value objects embedded in entities (metadata, status, spec blocks).
pub mod values;

pub use entity::{EdgeCluster, Project, User};

/// Declares the whole contract into `composer`.
///
/// # Errors
/// Any [`SchemaError`] raised while registering; the composer is left in
/// `Collecting` either way.
pub fn declare(composer: &mut SchemaComposer) -> Result<(), SchemaError> {
    for def in enums::all() {
        composer.register(def)?;
    }
    for def in values::all() {
        composer.register(def)?;
    }
    entity::declare(composer)?;
    query::declare(composer)?;
    mutation::declare(composer)?;
    debug!(types = composer.registry().len(), "edge contract declared");
    Ok(())
}

/// Declares the contract into a fresh composer and closes it.
///
/// # Errors
/// Declaration or composition failures.
pub fn build_contract() -> Result<SchemaComposer, SchemaError> {
    let mut composer = SchemaComposer::new();
    declare(&mut composer)?;
    composer.close()?;
    Ok(composer)
}
