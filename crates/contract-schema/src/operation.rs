// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mutation envelopes.
//!
//! A mutation `CreateThing` declares only its own input and output fields.
//! The envelope adds the correlation token on both sides and derives three
//! schema elements from the name:
//!
//! ```text
//! input CreateThingInput { ...inputs, clientMutationId: String }
//! type CreateThingPayload { ...outputs, clientMutationId: String }
//! createThing(input: CreateThingInput!): CreateThingPayload
//! ```
//!
//! The token is opaque; [`MutationDefinition::execute`] strips it before the
//! [`PayloadResolver`] runs and writes it back unchanged afterwards.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::SchemaError;
use crate::registry::check_name;
use crate::types::{
    scalar, Field, InputObjectBuilder, InputValue, ObjectBuilder, TypeDefinition, TypeRef,
};

/// Correlation token field injected into every mutation input and payload.
pub const CLIENT_MUTATION_ID: &str = "clientMutationId";

/// Name of the single argument on a mutation root field.
pub const INPUT_ARG: &str = "input";

/// Failures at the execution boundary of a mutation envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The mutation input was not a JSON object.
    #[error("mutation input must be an object")]
    InputNotObject,
    /// The correlation token was neither a string nor null.
    #[error("clientMutationId must be a string or null")]
    InvalidCorrelationToken,
    /// The resolver hook tried to set a key the envelope owns.
    #[error("payload resolver may not set {0}")]
    ReservedOutputKey(&'static str),
    /// The resolver hook left a guaranteed payload field absent or null.
    #[error("payload resolver did not populate guaranteed field {0}")]
    MissingGuaranteedOutput(String),
    /// The resolver hook itself failed.
    #[error("payload resolver failed: {0}")]
    Failed(String),
}

/// Execution hook producing the payload fields of a mutation.
///
/// Receives the input object with the correlation token already removed.
pub trait PayloadResolver: Send + Sync {
    /// Produces the author-declared payload fields.
    ///
    /// # Errors
    /// Implementations report their own failures as [`ResolveError::Failed`].
    fn resolve(&self, input: &Map<String, Value>) -> Result<Map<String, Value>, ResolveError>;
}

/// Resolver that produces an empty payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyPayload;

impl PayloadResolver for EmptyPayload {
    fn resolve(&self, _input: &Map<String, Value>) -> Result<Map<String, Value>, ResolveError> {
        Ok(Map::new())
    }
}

impl<F> PayloadResolver for F
where
    F: Fn(&Map<String, Value>) -> Result<Map<String, Value>, ResolveError> + Send + Sync,
{
    fn resolve(&self, input: &Map<String, Value>) -> Result<Map<String, Value>, ResolveError> {
        self(input)
    }
}

/// Author-declared payload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadField {
    field: Field,
    guaranteed: bool,
}

impl PayloadField {
    /// Payload field named `name` of type `ty`.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            field: Field::new(name, ty),
            guaranteed: false,
        }
    }

    /// Declares that the mutation always populates this field, which is what
    /// permits a non-null type.
    pub fn guaranteed(mut self) -> Self {
        self.guaranteed = true;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.field = self.field.description(description);
        self
    }

    /// Underlying field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Whether the field is always populated.
    pub fn is_guaranteed(&self) -> bool {
        self.guaranteed
    }
}

impl From<Field> for PayloadField {
    fn from(field: Field) -> Self {
        Self {
            field,
            guaranteed: false,
        }
    }
}

/// A mutation: name, inputs, outputs and execution hook.
#[derive(Clone)]
pub struct MutationDefinition {
    name: String,
    description: Option<String>,
    inputs: Vec<InputValue>,
    outputs: Vec<PayloadField>,
    resolver: Arc<dyn PayloadResolver>,
}

impl fmt::Debug for MutationDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .finish_non_exhaustive()
    }
}

impl PartialEq for MutationDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.inputs == other.inputs
            && self.outputs == other.outputs
    }
}

impl MutationDefinition {
    /// Declares mutation `name` (PascalCase, e.g. `CreateEdgeCluster`).
    ///
    /// Starts with the [`EmptyPayload`] resolver.
    pub fn define(
        name: impl Into<String>,
        inputs: impl IntoIterator<Item = InputValue>,
        outputs: impl IntoIterator<Item = PayloadField>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            inputs: inputs.into_iter().collect(),
            outputs: outputs.into_iter().collect(),
            resolver: Arc::new(EmptyPayload),
        }
    }

    /// Sets the description printed on the root field.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the execution hook.
    pub fn with_resolver(mut self, resolver: impl PayloadResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Author-declared input fields.
    pub fn inputs(&self) -> &[InputValue] {
        &self.inputs
    }

    /// Author-declared payload fields.
    pub fn outputs(&self) -> &[PayloadField] {
        &self.outputs
    }

    /// `{Name}Input`
    pub fn input_type_name(&self) -> String {
        format!("{}Input", self.name)
    }

    /// `{Name}Payload`
    pub fn payload_type_name(&self) -> String {
        format!("{}Payload", self.name)
    }

    /// Root field name: the declared name with a lower-case first letter.
    pub fn field_name(&self) -> String {
        let mut chars = self.name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_lowercase().chain(chars).collect()
        })
    }

    /// Checks the envelope rules.
    ///
    /// # Errors
    /// [`SchemaError::ReservedFieldName`] when an author declares
    /// `clientMutationId`; [`SchemaError::UnprovenNonNullOutput`] for a
    /// non-null payload field not marked guaranteed.
    pub fn validate(&self) -> Result<(), SchemaError> {
        check_name(&self.name, &self.name)?;
        let reserved = |type_name: String| SchemaError::ReservedFieldName {
            type_name,
            field: CLIENT_MUTATION_ID.to_owned(),
        };
        if self.inputs.iter().any(|i| i.name == CLIENT_MUTATION_ID) {
            return Err(reserved(self.input_type_name()));
        }
        if self
            .outputs
            .iter()
            .any(|o| o.field.name == CLIENT_MUTATION_ID)
        {
            return Err(reserved(self.payload_type_name()));
        }
        if let Some(output) = self
            .outputs
            .iter()
            .find(|o| o.field.ty.is_non_null() && !o.guaranteed)
        {
            return Err(SchemaError::UnprovenNonNullOutput {
                mutation: self.name.clone(),
                field: output.field.name.clone(),
            });
        }
        Ok(())
    }

    /// Effective input object: author inputs followed by the token.
    pub fn input_definition(&self) -> TypeDefinition {
        let mut builder = InputObjectBuilder::new(self.input_type_name());
        for input in &self.inputs {
            builder = builder.field(input.clone());
        }
        builder
            .field(InputValue::new(CLIENT_MUTATION_ID, TypeRef::named(scalar::STRING)))
            .build()
    }

    /// Effective payload object: author outputs followed by the token.
    pub fn payload_definition(&self) -> TypeDefinition {
        let mut builder = ObjectBuilder::new(self.payload_type_name());
        for output in &self.outputs {
            builder = builder.field(output.field.clone());
        }
        builder
            .field(Field::new(CLIENT_MUTATION_ID, TypeRef::named(scalar::STRING)))
            .build()
    }

    /// `name(input: NameInput!): NamePayload`
    pub fn root_field(&self) -> Field {
        let field = Field::new(self.field_name(), TypeRef::named(self.payload_type_name()))
            .arg(InputValue::new(INPUT_ARG, TypeRef::required(self.input_type_name())));
        match &self.description {
            Some(description) => field.description(description.as_str()),
            None => field,
        }
    }

    /// Runs the hook for one request, echoing the correlation token.
    ///
    /// # Errors
    /// [`ResolveError::InputNotObject`] and
    /// [`ResolveError::InvalidCorrelationToken`] for bad input,
    /// [`ResolveError::ReservedOutputKey`] if the hook sets the token itself,
    /// [`ResolveError::MissingGuaranteedOutput`] if it leaves a guaranteed
    /// field unset or null, plus anything the hook returns.
    pub fn execute(&self, input: Value) -> Result<Value, ResolveError> {
        let Value::Object(mut fields) = input else {
            return Err(ResolveError::InputNotObject);
        };
        let token = match fields.remove(CLIENT_MUTATION_ID) {
            None | Some(Value::Null) => Value::Null,
            Some(token @ Value::String(_)) => token,
            Some(_) => return Err(ResolveError::InvalidCorrelationToken),
        };
        let mut payload = self.resolver.resolve(&fields)?;
        if payload.contains_key(CLIENT_MUTATION_ID) {
            return Err(ResolveError::ReservedOutputKey(CLIENT_MUTATION_ID));
        }
        if let Some(output) = self
            .outputs
            .iter()
            .filter(|o| o.guaranteed)
            .find(|o| payload.get(&o.field.name).is_none_or(Value::is_null))
        {
            return Err(ResolveError::MissingGuaranteedOutput(output.field.name.clone()));
        }
        payload.insert(CLIENT_MUTATION_ID.to_owned(), token);
        Ok(Value::Object(payload))
    }
}
