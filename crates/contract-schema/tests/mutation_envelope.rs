// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
mod common;

use contract_schema::operation::CLIENT_MUTATION_ID;
use contract_schema::{
    scalar, InputValue, MutationDefinition, PayloadField, SchemaComposer, SchemaError, TypeRef,
};
use serde_json::json;

fn create_edge_cluster(composer: &mut SchemaComposer) -> MutationDefinition {
    let pair = composer.wrap_connection("EdgeCluster", []).unwrap();
    MutationDefinition::define(
        "CreateEdgeCluster",
        [InputValue::new("name", TypeRef::required(scalar::STRING))],
        [PayloadField::new("edgeCluster", pair.edge_ref())],
    )
}

fn member_names(fields: impl Iterator<Item = String>) -> Vec<String> {
    fields.collect()
}

#[test]
fn envelope_adds_correlation_token_on_both_sides() {
    let mut composer = common::tenant_composer();
    let mutation = create_edge_cluster(&mut composer);
    composer.add_mutation(mutation).unwrap();
    let schema = composer.close().unwrap();

    let input = schema.get("CreateEdgeClusterInput").unwrap();
    assert_eq!(
        member_names(input.input_fields().iter().map(|f| format!("{}: {}", f.name, f.ty))),
        ["name: String!", "clientMutationId: String"]
    );

    let payload = schema.get("CreateEdgeClusterPayload").unwrap();
    assert_eq!(
        member_names(payload.fields().iter().map(|f| format!("{}: {}", f.name, f.ty))),
        ["edgeCluster: EdgeClusterEdge", "clientMutationId: String"]
    );

    let root = schema.mutation_type().unwrap();
    let field = root.field("createEdgeCluster").unwrap();
    assert_eq!(field.ty.to_string(), "CreateEdgeClusterPayload");
    assert_eq!(field.args.len(), 1);
    assert_eq!(field.args[0].name, "input");
    assert_eq!(field.args[0].ty.to_string(), "CreateEdgeClusterInput!");
}

#[test]
fn closed_mutation_echoes_token() {
    let mut composer = common::tenant_composer();
    let mutation = create_edge_cluster(&mut composer);
    composer.add_mutation(mutation).unwrap();
    let schema = composer.close().unwrap();

    let mutation = schema.mutation("createEdgeCluster").unwrap();
    let out = mutation
        .execute(json!({"name": "edge-01", "clientMutationId": "req-17"}))
        .unwrap();
    assert_eq!(out[CLIENT_MUTATION_ID], json!("req-17"));
}

#[test]
fn guaranteed_non_null_output_composes() {
    let mut composer = common::tenant_composer();
    composer
        .add_mutation(MutationDefinition::define(
            "DeleteEdgeCluster",
            [InputValue::new("id", TypeRef::required(scalar::ID))],
            [PayloadField::new("deletedEdgeClusterID", TypeRef::required(scalar::ID)).guaranteed()],
        ))
        .unwrap();
    let schema = composer.close().unwrap();
    let payload = schema.get("DeleteEdgeClusterPayload").unwrap();
    assert_eq!(
        payload.field("deletedEdgeClusterID").unwrap().ty.to_string(),
        "ID!"
    );
}

#[test]
fn unguaranteed_non_null_output_is_rejected() {
    let mut composer = common::tenant_composer();
    let err = composer
        .add_mutation(MutationDefinition::define(
            "DeleteEdgeCluster",
            [InputValue::new("id", TypeRef::required(scalar::ID))],
            [PayloadField::new("deletedEdgeClusterID", TypeRef::required(scalar::ID))],
        ))
        .unwrap_err();
    assert_eq!(
        err,
        SchemaError::UnprovenNonNullOutput {
            mutation: "DeleteEdgeCluster".into(),
            field: "deletedEdgeClusterID".into(),
        }
    );
}

#[test]
fn duplicate_mutation_is_rejected() {
    let mut composer = common::tenant_composer();
    let mutation = create_edge_cluster(&mut composer);
    composer.add_mutation(mutation.clone()).unwrap();
    assert_eq!(
        composer.add_mutation(mutation).unwrap_err(),
        SchemaError::DuplicateFieldName {
            type_name: "Mutation".into(),
            field: "createEdgeCluster".into(),
        }
    );
}

#[test]
fn mutation_types_appear_in_introspection() {
    let mut composer = common::tenant_composer();
    let mutation = create_edge_cluster(&mut composer);
    composer.add_mutation(mutation).unwrap();
    let doc = composer
        .close()
        .unwrap()
        .introspection_document()
        .to_value()
        .unwrap();
    let schema = &doc["data"]["__schema"];
    assert_eq!(schema["mutationType"], json!({"name": "Mutation"}));
    let types = schema["types"].as_array().unwrap();
    let input = types
        .iter()
        .find(|t| t["name"] == "CreateEdgeClusterInput")
        .unwrap();
    assert_eq!(input["kind"], "INPUT_OBJECT");
    assert_eq!(input["inputFields"][1]["name"], CLIENT_MUTATION_ID);
    assert_eq!(
        input["inputFields"][0]["type"],
        json!({"kind": "NON_NULL", "name": null, "ofType": {"kind": "SCALAR", "name": "String", "ofType": null}})
    );
}
