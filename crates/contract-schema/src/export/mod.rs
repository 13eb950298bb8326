// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Both exports are pure functions of the closed schema and fail with
//! [`SchemaError::SchemaNotClosed`] when given a composer that has not
//! reached [`Phase::Closed`](crate::Phase::Closed).

mod introspection;
mod meta;
pub(crate) mod sdl;

pub use introspection::IntrospectionDocument;

use crate::composer::{RootSchema, SchemaComposer};
use crate::error::SchemaError;

/// Canonical definition text of the closed schema.
///
/// # Errors
/// [`SchemaError::SchemaNotClosed`] before `close()` succeeds.
pub fn to_definition_text(composer: &SchemaComposer) -> Result<String, SchemaError> {
    composer.schema().map(sdl::render)
}

/// Introspection document of the closed schema.
///
/// # Errors
/// [`SchemaError::SchemaNotClosed`] before `close()` succeeds.
pub fn to_introspection_document(
    composer: &SchemaComposer,
) -> Result<IntrospectionDocument, SchemaError> {
    composer.schema().map(introspection::build)
}

impl RootSchema {
    /// Canonical definition text.
    pub fn definition_text(&self) -> String {
        sdl::render(self)
    }

    /// Introspection document.
    pub fn introspection_document(&self) -> IntrospectionDocument {
        introspection::build(self)
    }
}
