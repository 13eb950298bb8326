// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
mod common;

use std::sync::Arc;

use contract_schema::connection::{connection_args, PAGE_INFO};
use contract_schema::{scalar, Field, SchemaError, TypeRef};

fn total_count() -> Field {
    Field::new("totalCount", TypeRef::named(scalar::INT))
        .description("Total number of edge clusters")
}

#[test]
fn wrapping_twice_returns_the_same_pair() {
    let mut composer = common::tenant_composer();
    let first = composer.wrap_connection("EdgeCluster", [total_count()]).unwrap();
    let second = composer.wrap_connection("EdgeCluster", [total_count()]).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let names: Vec<&str> = second
        .connection()
        .fields()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, ["pageInfo", "edges", "totalCount"]);
    assert_eq!(composer.connections().len(), 1);
}

#[test]
fn closed_schema_holds_one_connection_and_one_page_info() {
    let mut composer = common::tenant_composer();
    let pair = composer.wrap_connection("EdgeCluster", [total_count()]).unwrap();
    composer.wrap_connection("Tenant", []).unwrap();
    composer
        .add_query_field(
            Field::new("edgeClusters", pair.connection_ref()).args(connection_args()),
        )
        .unwrap();
    composer.wrap_connection("EdgeCluster", [total_count()]).unwrap();

    let schema = composer.close().unwrap();
    let count = |name: &str| schema.types().iter().filter(|d| d.name == name).count();
    assert_eq!(count("EdgeClusterConnection"), 1);
    assert_eq!(count("EdgeClusterEdge"), 1);
    assert_eq!(count(PAGE_INFO), 1);
    // TenantConnection is never referenced from a root field.
    assert_eq!(count("TenantConnection"), 0);

    let text = schema.definition_text();
    assert_eq!(text.matches("type EdgeClusterConnection {").count(), 1);
    assert_eq!(text.matches("type PageInfo {").count(), 1);
}

#[test]
fn page_info_shape_is_fixed() {
    let mut composer = common::tenant_composer();
    let pair = composer.wrap_connection("Tenant", []).unwrap();
    composer
        .add_query_field(Field::new("tenants", pair.connection_ref()))
        .unwrap();
    let schema = composer.close().unwrap();
    let page_info = schema.get(PAGE_INFO).unwrap();
    let fields: Vec<String> = page_info
        .fields()
        .iter()
        .map(|f| format!("{}: {}", f.name, f.ty))
        .collect();
    assert_eq!(
        fields,
        [
            "hasNextPage: Boolean!",
            "hasPreviousPage: Boolean!",
            "startCursor: String",
            "endCursor: String",
        ]
    );
}

#[test]
fn extra_fields_may_not_shadow_reserved_names() {
    let mut composer = common::tenant_composer();
    let err = composer
        .wrap_connection(
            "EdgeCluster",
            [Field::new("pageInfo", TypeRef::named(scalar::STRING))],
        )
        .unwrap_err();
    assert_eq!(
        err,
        SchemaError::ReservedFieldName {
            type_name: "EdgeClusterConnection".into(),
            field: "pageInfo".into(),
        }
    );
}

#[test]
fn wrapping_an_input_object_fails_to_close() {
    let mut composer = common::tenant_composer();
    composer
        .register(
            contract_schema::InputObjectBuilder::new("SortingOptionPair")
                .field(contract_schema::InputValue::new(
                    "name",
                    TypeRef::required(scalar::STRING),
                ))
                .build(),
        )
        .unwrap();
    composer.wrap_connection("SortingOptionPair", []).unwrap();
    // The edge's `node` field puts an input object in output position.
    assert!(matches!(
        composer.close().unwrap_err(),
        SchemaError::InvalidTypePosition { ref type_name, ref field, .. }
            if type_name == "SortingOptionPairEdge" && field == "node"
    ));
}
