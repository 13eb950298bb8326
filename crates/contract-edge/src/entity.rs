// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `Node` entities and their connections.
//!
//! `EdgeCluster` names its owning `Project` by reference and `Project` lists
//! its clusters through `EdgeClusterConnection`; the cycle only closes when
//! the composer resolves names.

use contract_schema::connection::{connection_args, connection_type_name};
use contract_schema::identity::{id_field, NODE_INTERFACE};
use contract_schema::{
    scalar, Field, Identifiable, InputValue, ObjectBuilder, SchemaComposer, SchemaError,
    TypeDefinition, TypeRef,
};

use crate::names;
use crate::values::{optional_list, required_list};

/// `totalCount: Int` on a connection.
fn total_count(description: &str) -> Field {
    Field::new("totalCount", TypeRef::named(scalar::INT)).description(description)
}

/// `<entity>(<arg>: ID!): <entity>`
fn single(field: &str, entity: &str, id_arg: &str) -> Field {
    Field::new(field, TypeRef::named(entity))
        .arg(InputValue::new(id_arg, TypeRef::required(scalar::ID)))
}

/// Connection field with cursor arguments, id filters and sort keys.
fn listing(field: &str, entity: &str, id_filters: &[&str]) -> Field {
    let filters = id_filters
        .iter()
        .map(|name| InputValue::new(*name, optional_list(scalar::ID)));
    Field::new(field, TypeRef::named(connection_type_name(entity)))
        .args(connection_args())
        .args(filters)
        .arg(InputValue::new(
            "sortingOptions",
            optional_list(names::SORTING_OPTION_PAIR),
        ))
}

/// A provisioned cluster owned by a project.
#[derive(Debug, Clone, Copy)]
pub struct EdgeCluster;

impl Identifiable for EdgeCluster {
    const TYPE_NAME: &'static str = names::EDGE_CLUSTER;

    fn definition() -> TypeDefinition {
        let namespace = || {
            InputValue::new("namespace", TypeRef::named(scalar::STRING))
                .description("Only objects in this namespace")
        };
        ObjectBuilder::new(Self::TYPE_NAME)
            .implements(NODE_INTERFACE)
            .field(id_field())
            .field(
                Field::new("name", TypeRef::required(scalar::STRING))
                    .description("The edge cluster name"),
            )
            .field(
                Field::new("clusterType", TypeRef::required(names::EDGE_CLUSTER_TYPE))
                    .description("The edge cluster type"),
            )
            .field(
                Field::new("project", TypeRef::required(names::PROJECT))
                    .description("The project that owns the edge cluster"),
            )
            .field(
                Field::new("provisionDetail", TypeRef::named(names::PROVISION_DETAIL))
                    .description("The edge cluster provisioning details"),
            )
            .field(
                Field::new("nodes", required_list(names::EDGE_CLUSTER_NODE))
                    .description("The nodes that are part of the edge cluster"),
            )
            .field(
                Field::new("pods", required_list(names::EDGE_CLUSTER_POD))
                    .description("The pods running in the edge cluster")
                    .arg(
                        InputValue::new("nodeName", TypeRef::named(scalar::STRING))
                            .description("Only pods scheduled on this node"),
                    )
                    .arg(namespace()),
            )
            .field(
                Field::new("services", required_list(names::EDGE_CLUSTER_SERVICE))
                    .description("The services exposed by the edge cluster")
                    .arg(namespace()),
            )
            .build()
    }
}

/// A project grouping edge clusters.
#[derive(Debug, Clone, Copy)]
pub struct Project;

impl Identifiable for Project {
    const TYPE_NAME: &'static str = names::PROJECT;

    fn definition() -> TypeDefinition {
        ObjectBuilder::new(Self::TYPE_NAME)
            .implements(NODE_INTERFACE)
            .field(id_field())
            .field(Field::new("name", TypeRef::required(scalar::STRING)))
            .field(single("edgeCluster", names::EDGE_CLUSTER, "edgeClusterID"))
            .field(listing("edgeClusters", names::EDGE_CLUSTER, &["edgeClusterIDs"]))
            .build()
    }
}

/// The signed-in user; entry point for everything the user can see.
#[derive(Debug, Clone, Copy)]
pub struct User;

impl Identifiable for User {
    const TYPE_NAME: &'static str = names::USER;

    fn definition() -> TypeDefinition {
        ObjectBuilder::new(Self::TYPE_NAME)
            .implements(NODE_INTERFACE)
            .field(id_field())
            .field(single("project", names::PROJECT, "projectID"))
            .field(listing("projects", names::PROJECT, &["projectIDs"]))
            .field(single("edgeCluster", names::EDGE_CLUSTER, "edgeClusterID"))
            .field(listing(
                "edgeClusters",
                names::EDGE_CLUSTER,
                &["edgeClusterIDs", "projectIDs"],
            ))
            .build()
    }
}

/// Wraps the listed entities and registers all three entities.
///
/// # Errors
/// Registration or wrapping conflicts.
pub fn declare(composer: &mut SchemaComposer) -> Result<(), SchemaError> {
    composer.wrap_connection(names::PROJECT, [total_count("Total number of projects")])?;
    composer.wrap_connection(
        names::EDGE_CLUSTER,
        [total_count("Total number of edge clusters")],
    )?;
    composer.register_identifiable::<EdgeCluster>()?;
    composer.register_identifiable::<Project>()?;
    composer.register_identifiable::<User>()?;
    Ok(())
}
