// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Query root fields.

use contract_schema::{Field, SchemaComposer, SchemaError, TypeRef};

use crate::names;

/// `user: User`
pub fn user() -> Field {
    Field::new("user", TypeRef::named(names::USER)).description("The signed-in user")
}

/// Adds the root query fields. `node` is added by the composer on close.
///
/// # Errors
/// Root field conflicts.
pub fn declare(composer: &mut SchemaComposer) -> Result<(), SchemaError> {
    composer.add_query_field(user())
}
