// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]
use contract_schema::identity::{id_field, NODE_INTERFACE};
use contract_schema::{
    scalar, EnumBuilder, Field, InputValue, ListNullability, ObjectBuilder, SchemaComposer,
    TypeDefinition, TypeRef,
};

pub fn edge_cluster_type() -> TypeDefinition {
    EnumBuilder::new("EdgeClusterType").value("K3S", 0).build()
}

/// Cluster that names its owning tenant.
pub fn edge_cluster() -> TypeDefinition {
    ObjectBuilder::new("EdgeCluster")
        .implements(NODE_INTERFACE)
        .field(id_field())
        .field(Field::new("name", TypeRef::named(scalar::STRING)))
        .field(Field::new("clusterType", TypeRef::named("EdgeClusterType")))
        .field(Field::new("tenant", TypeRef::required("Tenant")))
        .build()
}

/// Tenant that lists its clusters.
pub fn tenant() -> TypeDefinition {
    ObjectBuilder::new("Tenant")
        .implements(NODE_INTERFACE)
        .field(id_field())
        .field(Field::new("name", TypeRef::named(scalar::STRING)))
        .field(Field::new(
            "edgeClusters",
            TypeRef::list_of(
                TypeRef::named("EdgeCluster"),
                ListNullability::NonNullListAndItems,
            ),
        ))
        .build()
}

pub fn tenant_query() -> Field {
    Field::new("tenant", TypeRef::named("Tenant"))
        .arg(InputValue::new("tenantID", TypeRef::required(scalar::ID)))
}

/// Tenant/cluster cycle, still collecting.
pub fn tenant_composer() -> SchemaComposer {
    let mut composer = SchemaComposer::new();
    composer.register(edge_cluster_type()).unwrap();
    composer.register(edge_cluster()).unwrap();
    composer.register(tenant()).unwrap();
    composer.add_query_field(tenant_query()).unwrap();
    composer
}

pub const TENANT_SDL: &str = r#"enum EdgeClusterType {
  K3S
}

"""An object with an ID"""
interface Node {
  """The id of the object."""
  id: ID!
}

type EdgeCluster implements Node {
  id: ID!
  name: String
  clusterType: EdgeClusterType
  tenant: Tenant!
}

type Tenant implements Node {
  id: ID!
  name: String
  edgeClusters: [EdgeCluster!]!
}

type Query {
  tenant(tenantID: ID!): Tenant

  """Fetches an object given its ID"""
  node(
    """The ID of an object"""
    id: ID!
  ): Node
}
"#;
