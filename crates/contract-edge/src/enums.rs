// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Enums with their stable discriminants.

use contract_schema::{EnumBuilder, EnumValue, TypeDefinition};

use crate::names;

fn described(name: &str, discriminant: i64, description: &str) -> EnumValue {
    EnumValue::new(name, discriminant).description(description)
}

/// `True`/`False`/`Unknown`, shared by node, pod and service conditions.
pub fn condition_status() -> TypeDefinition {
    EnumBuilder::new(names::CONDITION_STATUS)
        .description("These are valid condition statuses")
        .member(described("True", 0, "True means a resource is in the condition"))
        .member(described("False", 1, "False means a resource is not in the condition"))
        .member(described(
            "Unknown",
            2,
            "Unknown means kubernetes cannot decide if a resource is in the condition or not",
        ))
        .build()
}

/// Supported cluster distributions.
pub fn edge_cluster_type() -> TypeDefinition {
    EnumBuilder::new(names::EDGE_CLUSTER_TYPE)
        .description("The different cluster types")
        .member(described("K3S", 0, "K3S cluster"))
        .build()
}

/// Node condition kinds.
pub fn node_condition_type() -> TypeDefinition {
    EnumBuilder::new(names::NODE_CONDITION_TYPE)
        .description("The valid conditions of node")
        .member(described(
            "Ready",
            0,
            "NodeReady means kubelet is healthy and ready to accept pods",
        ))
        .member(described(
            "MemoryPressure",
            1,
            "NodeMemoryPressure means the kubelet is under pressure due to insufficient available memory",
        ))
        .member(described(
            "DiskPressure",
            2,
            "NodeDiskPressure means the kubelet is under pressure due to insufficient available disk",
        ))
        .member(described(
            "PIDPressure",
            3,
            "NodePIDPressure means the kubelet is under pressure due to insufficient available PID",
        ))
        .member(described(
            "NetworkUnavailable",
            4,
            "NodeNetworkUnavailable means that network for the node is not correctly configured",
        ))
        .build()
}

/// Node address kinds.
pub fn node_address_type() -> TypeDefinition {
    EnumBuilder::new(names::NODE_ADDRESS_TYPE)
        .description("The valid address type of edge cluster node")
        .value("Hostname", 0)
        .value("ExternalIP", 1)
        .value("InternalIP", 2)
        .value("ExternalDNS", 3)
        .value("InternalDNS", 4)
        .build()
}

/// Pod condition kinds.
pub fn pod_condition_type() -> TypeDefinition {
    EnumBuilder::new(names::POD_CONDITION_TYPE)
        .description("The edge cluster pod condition")
        .value("ContainersReady", 0)
        .value("PodInitialized", 1)
        .value("PodReady", 2)
        .value("PodScheduled", 3)
        .build()
}

/// Transport protocols for service and master ports.
pub fn protocol() -> TypeDefinition {
    EnumBuilder::new(names::PROTOCOL)
        .description("Protocol defines network protocols")
        .member(described("TCP", 0, "TCP protocol"))
        .member(described("UDP", 1, "UDP protocol"))
        .member(described("SCTP", 2, "SCTP protocol"))
        .build()
}

/// Service exposure kinds. Discriminant 2 is unassigned.
pub fn service_type() -> TypeDefinition {
    EnumBuilder::new(names::SERVICE_TYPE)
        .description("ServiceType string describes ingress methods for a service")
        .member(described(
            "ClusterIP",
            0,
            "ClusterIP means a service will only be accessible inside the cluster, via the cluster IP",
        ))
        .member(described(
            "NodePort",
            1,
            "NodePort means a service will be exposed on one port of every node, in addition to ClusterIP type",
        ))
        .member(described(
            "LoadBalancer",
            3,
            "LoadBalancer means a service will be exposed via an external load balancer (if the cloud provider supports it), in addition to NodePort type",
        ))
        .member(described(
            "ExternalName",
            4,
            "ExternalName means a service consists of only a reference to an external name that kubedns or equivalent will return as a CNAME record, with no exposing or proxying of any pods involved",
        ))
        .build()
}

/// Sort order for list arguments.
pub fn sorting_direction() -> TypeDefinition {
    EnumBuilder::new(names::SORTING_DIRECTION)
        .value("ASCENDING", 0)
        .value("DESCENDING", 1)
        .build()
}

/// Every enum, in artifact order.
pub fn all() -> Vec<TypeDefinition> {
    vec![
        condition_status(),
        edge_cluster_type(),
        node_condition_type(),
        node_address_type(),
        pod_condition_type(),
        protocol(),
        service_type(),
        sorting_direction(),
    ]
}
