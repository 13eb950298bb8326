// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
mod common;

use contract_schema::{to_definition_text, to_introspection_document, EnumValue, EnumBuilder};
use serde_json::json;

#[test]
fn definition_text_matches_golden() {
    let mut composer = common::tenant_composer();
    composer.close().unwrap();
    assert_eq!(to_definition_text(&composer).unwrap(), common::TENANT_SDL);
}

#[test]
fn exporting_twice_is_byte_identical() {
    let mut composer = common::tenant_composer();
    composer.close().unwrap();
    let text_a = to_definition_text(&composer).unwrap();
    let text_b = to_definition_text(&composer).unwrap();
    assert_eq!(text_a, text_b);

    let json_a = to_introspection_document(&composer)
        .unwrap()
        .to_json_string()
        .unwrap();
    let json_b = to_introspection_document(&composer)
        .unwrap()
        .to_json_string()
        .unwrap();
    assert_eq!(json_a, json_b);
}

#[test]
fn independent_builds_agree() {
    let mut a = common::tenant_composer();
    let mut b = common::tenant_composer();
    let fa = a.close().unwrap().fingerprint();
    let fb = b.close().unwrap().fingerprint();
    assert_eq!(fa, fb);
    assert_eq!(fa.len(), 64);
    assert_eq!(
        fa,
        blake3::hash(common::TENANT_SDL.as_bytes()).to_hex().to_string()
    );
}

#[test]
fn introspection_types_are_sorted_and_complete() {
    let mut composer = common::tenant_composer();
    let doc = composer.close().unwrap().introspection_document();
    let names: Vec<&str> = doc.type_names().collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    for required in [
        "Boolean",
        "String",
        "ID",
        "Node",
        "Query",
        "EdgeCluster",
        "Tenant",
        "EdgeClusterType",
        "__Schema",
        "__Type",
        "__TypeKind",
        "__Field",
        "__InputValue",
        "__EnumValue",
        "__Directive",
        "__DirectiveLocation",
    ] {
        assert!(names.contains(&required), "{required} missing");
    }
    assert!(!names.contains(&"Float"));
    assert!(!names.contains(&"Mutation"));
}

#[test]
fn introspection_envelope_shape() {
    let mut composer = common::tenant_composer();
    let doc = composer
        .close()
        .unwrap()
        .introspection_document()
        .to_value()
        .unwrap();
    let schema = &doc["data"]["__schema"];
    assert_eq!(schema["queryType"], json!({"name": "Query"}));
    assert_eq!(schema["mutationType"], json!(null));
    assert_eq!(schema["subscriptionType"], json!(null));

    let directives: Vec<&str> = schema["directives"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(directives, ["include", "skip", "deprecated"]);

    let types = schema["types"].as_array().unwrap();
    let find = |name: &str| types.iter().find(|t| t["name"] == name).unwrap();

    let node = find("Node");
    assert_eq!(node["kind"], "INTERFACE");
    assert_eq!(
        node["possibleTypes"],
        json!([
            {"kind": "OBJECT", "name": "EdgeCluster", "ofType": null},
            {"kind": "OBJECT", "name": "Tenant", "ofType": null}
        ])
    );

    let tenant = find("Tenant");
    assert_eq!(tenant["interfaces"][0]["name"], "Node");
    assert_eq!(tenant["enumValues"], json!(null));
    let clusters = &tenant["fields"][2];
    assert_eq!(clusters["name"], "edgeClusters");
    assert_eq!(
        clusters["type"],
        json!({
            "kind": "NON_NULL", "name": null, "ofType": {
                "kind": "LIST", "name": null, "ofType": {
                    "kind": "NON_NULL", "name": null, "ofType": {
                        "kind": "OBJECT", "name": "EdgeCluster", "ofType": null
                    }
                }
            }
        })
    );

    let cluster_type = find("EdgeClusterType");
    assert_eq!(
        cluster_type["enumValues"],
        json!([{
            "name": "K3S",
            "description": null,
            "isDeprecated": false,
            "deprecationReason": null,
            "discriminant": 0
        }])
    );
    assert!(find("__TypeKind")["enumValues"][0].get("discriminant").is_none());
}

#[test]
fn deprecation_reaches_both_exports() {
    let mut composer = contract_schema::SchemaComposer::new();
    composer
        .register(
            EnumBuilder::new("SortingDirection")
                .value("ASCENDING", 0)
                .member(EnumValue::new("DESC", 1).deprecated("Use DESCENDING"))
                .value("DESCENDING", 2)
                .build(),
        )
        .unwrap();
    composer
        .add_query_field(contract_schema::Field::new(
            "direction",
            contract_schema::TypeRef::named("SortingDirection"),
        ))
        .unwrap();
    let schema = composer.close().unwrap();
    assert_eq!(
        schema.definition_text(),
        "enum SortingDirection {\n  ASCENDING\n  DESC @deprecated(reason: \"Use DESCENDING\")\n  DESCENDING\n}\n\ntype Query {\n  direction: SortingDirection\n}\n"
    );
    let doc = schema.introspection_document().to_value().unwrap();
    let types = doc["data"]["__schema"]["types"].as_array().unwrap();
    let sorting = types
        .iter()
        .find(|t| t["name"] == "SortingDirection")
        .unwrap();
    assert_eq!(sorting["enumValues"][1]["isDeprecated"], true);
    assert_eq!(sorting["enumValues"][1]["deprecationReason"], "Use DESCENDING");
}

#[test]
fn json_artifact_is_pretty_with_trailing_newline() {
    let mut composer = common::tenant_composer();
    let json = composer
        .close()
        .unwrap()
        .introspection_document()
        .to_json_string()
        .unwrap();
    assert!(json.starts_with("{\n  \"data\": {\n    \"__schema\": {\n      \"queryType\": {"));
    assert!(json.ends_with("}\n"));
}
