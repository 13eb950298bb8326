// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Create/update/delete envelopes for projects and edge clusters.
//!
//! Create and update return the touched entity as a connection edge so
//! clients can splice it into a cached list. Delete returns the removed id,
//! which the hook copies from the input; that is what makes the non-null
//! payload field provable.

use contract_schema::connection::edge_type_name;
use contract_schema::operation::ResolveError;
use contract_schema::{
    scalar, InputValue, MutationDefinition, PayloadField, PayloadResolver, SchemaComposer,
    SchemaError, TypeRef,
};
use serde_json::{Map, Value};

use crate::names;

/// Payload hook that echoes one input id under another key.
#[derive(Debug, Clone, Copy)]
pub struct EchoDeletedId {
    input: &'static str,
    output: &'static str,
}

impl EchoDeletedId {
    /// Copies `input` to `output`.
    pub const fn new(input: &'static str, output: &'static str) -> Self {
        Self { input, output }
    }
}

impl PayloadResolver for EchoDeletedId {
    fn resolve(&self, input: &Map<String, Value>) -> Result<Map<String, Value>, ResolveError> {
        let id = input
            .get(self.input)
            .filter(|v| v.is_string())
            .ok_or_else(|| ResolveError::Failed(format!("{} must be a string", self.input)))?;
        let mut payload = Map::new();
        payload.insert(self.output.to_owned(), id.clone());
        Ok(payload)
    }
}

fn name_input() -> InputValue {
    InputValue::new("name", TypeRef::required(scalar::STRING))
}

fn id_input(name: &str) -> InputValue {
    InputValue::new(name, TypeRef::required(scalar::ID))
}

fn edge_output(field: &str, entity: &str) -> PayloadField {
    PayloadField::new(field, TypeRef::named(edge_type_name(entity)))
}

/// `createProject`
pub fn create_project() -> MutationDefinition {
    MutationDefinition::define(
        "CreateProject",
        [name_input()],
        [edge_output("project", names::PROJECT)],
    )
}

/// `updateProject`
pub fn update_project() -> MutationDefinition {
    MutationDefinition::define(
        "UpdateProject",
        [id_input("projectID"), name_input()],
        [edge_output("project", names::PROJECT)],
    )
}

/// `deleteProject`
pub fn delete_project() -> MutationDefinition {
    MutationDefinition::define(
        "DeleteProject",
        [id_input("projectID")],
        [PayloadField::new("deletedProjectID", TypeRef::required(scalar::ID)).guaranteed()],
    )
    .with_resolver(EchoDeletedId::new("projectID", "deletedProjectID"))
}

/// `createEdgeCluster`
pub fn create_edge_cluster() -> MutationDefinition {
    MutationDefinition::define(
        "CreateEdgeCluster",
        [name_input()],
        [edge_output("edgeCluster", names::EDGE_CLUSTER)],
    )
}

/// `updateEdgeCluster`
pub fn update_edge_cluster() -> MutationDefinition {
    MutationDefinition::define(
        "UpdateEdgeCluster",
        [id_input("id"), name_input()],
        [edge_output("edgeCluster", names::EDGE_CLUSTER)],
    )
}

/// `deleteEdgeCluster`
pub fn delete_edge_cluster() -> MutationDefinition {
    MutationDefinition::define(
        "DeleteEdgeCluster",
        [id_input("id")],
        [PayloadField::new("deletedEdgeClusterID", TypeRef::required(scalar::ID)).guaranteed()],
    )
    .with_resolver(EchoDeletedId::new("id", "deletedEdgeClusterID"))
}

/// All six mutations, in root-field order.
pub fn all() -> Vec<MutationDefinition> {
    vec![
        create_project(),
        update_project(),
        delete_project(),
        create_edge_cluster(),
        update_edge_cluster(),
        delete_edge_cluster(),
    ]
}

/// Adds every mutation.
///
/// # Errors
/// Envelope violations or root field conflicts.
pub fn declare(composer: &mut SchemaComposer) -> Result<(), SchemaError> {
    for mutation in all() {
        composer.add_mutation(mutation)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn delete_echoes_the_removed_id_and_token() {
        let out = delete_edge_cluster()
            .execute(json!({"id": "RWRnZUNsdXN0ZXI6NDI", "clientMutationId": "m-1"}))
            .unwrap();
        assert_eq!(
            out,
            json!({"deletedEdgeClusterID": "RWRnZUNsdXN0ZXI6NDI", "clientMutationId": "m-1"})
        );
    }

    #[test]
    fn delete_without_id_fails() {
        let err = delete_project().execute(json!({})).unwrap_err();
        assert_eq!(err, ResolveError::Failed("projectID must be a string".into()));
    }

    #[test]
    fn every_envelope_is_valid() {
        for mutation in all() {
            mutation.validate().unwrap();
        }
    }

    #[test]
    fn root_field_names_are_lower_camel() {
        let names: Vec<String> = all().iter().map(MutationDefinition::field_name).collect();
        assert_eq!(
            names,
            [
                "createProject",
                "updateProject",
                "deleteProject",
                "createEdgeCluster",
                "updateEdgeCluster",
                "deleteEdgeCluster",
            ]
        );
    }
}
