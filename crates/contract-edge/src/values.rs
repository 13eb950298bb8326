// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Kubernetes-shaped value objects.
//!
//! None of these implement `Node`; they are only reachable through an
//! entity field.

use contract_schema::{
    scalar, Field, InputObjectBuilder, InputValue, ListNullability, ObjectBuilder,
    TypeDefinition, TypeRef,
};

use crate::names;

/// `[T!]!`
pub(crate) fn required_list(name: &str) -> TypeRef {
    TypeRef::list_of(TypeRef::named(name), ListNullability::NonNullListAndItems)
}

/// `[T!]`
pub(crate) fn optional_list(name: &str) -> TypeRef {
    TypeRef::list_of(TypeRef::named(name), ListNullability::NonNullItems)
}

fn required(name: &str, ty: &str, description: &str) -> Field {
    Field::new(name, TypeRef::required(ty)).description(description)
}

fn optional(name: &str, ty: &str, description: &str) -> Field {
    Field::new(name, TypeRef::named(ty)).description(description)
}

const LAST_TRANSITION: &str = "Last time the condition transitioned from one status to another";
const REASON: &str = "Unique, one-word, CamelCase reason for the condition last transition";
const MESSAGE: &str = "Human-readable message indicating details about last transition";

/// Metadata shared by nodes, pods and services.
pub fn object_meta() -> TypeDefinition {
    ObjectBuilder::new(names::OBJECT_META)
        .description("Contains standard edge cluster objects metadata")
        .field(required("id", scalar::ID, "The object unique identitfier"))
        .field(required("name", scalar::STRING, "The object name"))
        .field(required("namespace", scalar::STRING, "The object namespace"))
        .build()
}

/// One observed node condition.
pub fn node_condition() -> TypeDefinition {
    ObjectBuilder::new(names::NODE_CONDITION)
        .description("Current service state of node")
        .field(required("type", names::NODE_CONDITION_TYPE, "Type is the type of the condition"))
        .field(required("status", names::CONDITION_STATUS, "Status is the status of the condition"))
        .field(required(
            "lastHeartbeatTime",
            scalar::STRING,
            "Last time we got an update on a given condition",
        ))
        .field(required("lastTransitionTime", scalar::STRING, LAST_TRANSITION))
        .field(required("reason", scalar::STRING, REASON))
        .field(required("message", scalar::STRING, MESSAGE))
        .build()
}

/// One reachable node address.
pub fn node_address() -> TypeDefinition {
    ObjectBuilder::new(names::NODE_ADDRESS)
        .description("The information for the edge cluster node address")
        .field(required(
            "nodeAddressType",
            names::NODE_ADDRESS_TYPE,
            "Edge cluster node address type, one of Hostname, ExternalIP or InternalIP",
        ))
        .field(required("address", scalar::STRING, "The node address"))
        .build()
}

/// Machine identity as reported by the kubelet.
pub fn node_system_info() -> TypeDefinition {
    let reported = [
        (
            "MachineID",
            "MachineID reported by the node. For unique machine identification in the cluster this field is preferred",
        ),
        (
            "SystemUUID",
            "SystemUUID reported by the node. For unique machine identification MachineID is preferred. This field is specific to Red Hat host",
        ),
        ("BootID", "Boot ID reported by the node"),
        (
            "KernelVersion",
            "Kernel Version reported by the node from \"uname -r\" (e.g. 3.16.0-0.bpo.4-amd64).",
        ),
        (
            "OSImage",
            "OS Image reported by the node from /etc/os-release (e.g. Debian GNU/Linux 7 (wheezy))",
        ),
        (
            "ContainerRuntimeVersion",
            "ContainerRuntime Version reported by the node through runtime remote API (e.g. docker://1.5.0)",
        ),
        ("KubeletVersion", "Kubelet Version reported by the node"),
        ("KubeProxyVersion", "KubeProxy Version reported by the node"),
        ("OperatingSystem", "The Operating System reported by the node"),
        ("Architecture", "The Architecture reported by the node"),
    ];
    reported
        .into_iter()
        .fold(
            ObjectBuilder::new(names::NODE_SYSTEM_INFO)
                .description("contains a set of ids/uuids to uniquely identify the node"),
            |builder, (name, description)| {
                builder.field(required(name, scalar::STRING, description))
            },
        )
        .build()
}

/// Observed node status.
pub fn node_status() -> TypeDefinition {
    ObjectBuilder::new(names::NODE_STATUS)
        .description("Contains information about the current status of a node")
        .field(
            Field::new("conditions", required_list(names::NODE_CONDITION))
                .description("Conditions is an array of current observed node conditions"),
        )
        .field(
            Field::new("addresses", required_list(names::NODE_ADDRESS))
                .description("Addresses is the list of addresses reachable to the node"),
        )
        .field(required(
            "nodeInfo",
            names::NODE_SYSTEM_INFO,
            "NodeInfo is the set of ids/uuids to uniquely identify the node",
        ))
        .build()
}

/// A node in an edge cluster.
pub fn edge_cluster_node() -> TypeDefinition {
    ObjectBuilder::new(names::EDGE_CLUSTER_NODE)
        .description("Contains information about the edge cluster node")
        .field(required("metadata", names::OBJECT_META, "The node metadata"))
        .field(required(
            "status",
            names::NODE_STATUS,
            "The most recently observed status of the node",
        ))
        .build()
}

/// One observed pod condition.
pub fn pod_condition() -> TypeDefinition {
    ObjectBuilder::new(names::POD_CONDITION)
        .description("Current service state of pod")
        .field(required("type", names::POD_CONDITION_TYPE, "Type is the type of the condition"))
        .field(required("status", names::CONDITION_STATUS, "Status is the status of the condition"))
        .field(required(
            "lastProbeTime",
            scalar::STRING,
            "Last time we got an update on a given condition",
        ))
        .field(required("lastTransitionTime", scalar::STRING, LAST_TRANSITION))
        .field(required("reason", scalar::STRING, REASON))
        .field(required("message", scalar::STRING, MESSAGE))
        .build()
}

/// Observed pod status.
pub fn pod_status() -> TypeDefinition {
    ObjectBuilder::new(names::POD_STATUS)
        .description("Contains the most recently observed status of the existing edge cluster pod")
        .field(required(
            "hostIP",
            scalar::STRING,
            "IP address of the host to which the pod is assigned",
        ))
        .field(required(
            "podIP",
            scalar::STRING,
            "IP address allocated to the pod. Routable at least within the cluster",
        ))
        .field(
            Field::new("conditions", required_list(names::POD_CONDITION))
                .description("Current service state of edge cluster pod"),
        )
        .build()
}

/// Desired pod placement.
pub fn pod_spec() -> TypeDefinition {
    ObjectBuilder::new(names::POD_SPEC)
        .description(
            "Contains the specification of the desired behavior of the existing edge cluster pod",
        )
        .field(required(
            "nodeName",
            scalar::STRING,
            "The name of the node where the Pod is deployed into",
        ))
        .build()
}

/// A pod running in an edge cluster.
pub fn edge_cluster_pod() -> TypeDefinition {
    ObjectBuilder::new(names::EDGE_CLUSTER_POD)
        .description("Contains information about the edge cluster pod")
        .field(required("metadata", names::OBJECT_META, "The pod metadata"))
        .field(required(
            "status",
            names::POD_STATUS,
            "The most recently observed status of the pod",
        ))
        .field(required(
            "spec",
            names::POD_SPEC,
            "The specification of the desired behavior of the pod.",
        ))
        .build()
}

/// Error state of one service port.
pub fn port_status() -> TypeDefinition {
    ObjectBuilder::new(names::PORT_STATUS)
        .description("PortStatus represents the error condition of a service port")
        .field(required(
            "port",
            scalar::INT,
            "Port is the port number of the service port of which status is recorded here",
        ))
        .field(required(
            "protocol",
            names::PROTOCOL,
            "Protocol is the protocol of the service port of which status is recorded here",
        ))
        .field(optional(
            "error",
            scalar::STRING,
            "Error is to record the problem with the service port",
        ))
        .build()
}

/// One load-balancer ingress point.
pub fn load_balancer_ingress() -> TypeDefinition {
    ObjectBuilder::new(names::LOAD_BALANCER_INGRESS)
        .description(
            "LoadBalancerIngress represents the status of a load-balancer ingress point traffic intended for the service should be sent to an ingress point",
        )
        .field(required(
            "ip",
            scalar::STRING,
            "IP is set for load-balancer ingress points that are IP based",
        ))
        .field(required(
            "hostname",
            scalar::STRING,
            "Hostname is set for load-balancer ingress points that are DNS based",
        ))
        .field(
            Field::new("portStatus", required_list(names::PORT_STATUS))
                .description("Ports is a list of records of service ports"),
        )
        .build()
}

/// Load-balancer state of a service.
pub fn load_balancer_status() -> TypeDefinition {
    ObjectBuilder::new(names::LOAD_BALANCER_STATUS)
        .description("LoadBalancerStatus represents the status of a load-balancer")
        .field(
            Field::new("ingress", required_list(names::LOAD_BALANCER_INGRESS)).description(
                "Ingress is a list containing ingress points for the load-balancer. Traffic intended for the service should be sent to these ingress points",
            ),
        )
        .build()
}

/// One observed service condition. The condition type is free text.
pub fn service_condition() -> TypeDefinition {
    ObjectBuilder::new(names::SERVICE_CONDITION)
        .description("Current service state of service")
        .field(required("type", scalar::STRING, "Type is the type of the condition"))
        .field(required("status", names::CONDITION_STATUS, "Status is the status of the condition"))
        .field(required("lastTransitionTime", scalar::STRING, LAST_TRANSITION))
        .field(required("reason", scalar::STRING, REASON))
        .field(required("message", scalar::STRING, MESSAGE))
        .build()
}

/// One exposed service port.
pub fn service_port() -> TypeDefinition {
    ObjectBuilder::new(names::SERVICE_PORT)
        .description("ServicePort contains information on service port")
        .field(required("name", scalar::STRING, "The name of this port within the service"))
        .field(required("protocol", names::PROTOCOL, "The IP protocol for this port"))
        .field(required("port", scalar::INT, "The port that will be exposed by this service"))
        .field(required(
            "targetPort",
            scalar::STRING,
            "Number or name of the port to access on the pods targeted by the service",
        ))
        .field(required(
            "nodePort",
            scalar::INT,
            "The port on each node on which this service is exposed when type is NodePort or LoadBalancer",
        ))
        .build()
}

/// Desired service exposure.
pub fn service_spec() -> TypeDefinition {
    ObjectBuilder::new(names::SERVICE_SPEC)
        .description(
            "Contains the specification of the desired behavior of the existing edge cluster service",
        )
        .field(
            Field::new("ports", required_list(names::SERVICE_PORT))
                .description("The list of ports that are exposed by this service"),
        )
        .field(
            Field::new("clusterIPs", required_list(scalar::STRING))
                .description("clusterIPs is a list of IP addresses assigned to this service"),
        )
        .field(required("type", names::SERVICE_TYPE, "type determines how the Service is exposed"))
        .field(
            Field::new("externalIPs", required_list(scalar::STRING)).description(
                "externalIPs is a list of IP addresses for which nodes in the cluster will also accept traffic for this service",
            ),
        )
        .field(optional(
            "externalName",
            scalar::STRING,
            "externalName is the external reference that discovery mechanisms will return as an alias for this service (e.g. a DNS CNAME record)",
        ))
        .build()
}

/// Observed service status.
pub fn service_status() -> TypeDefinition {
    ObjectBuilder::new(names::SERVICE_STATUS)
        .description(
            "Contains the most recently observed status of the existing edge cluster service",
        )
        .field(optional(
            "loadBalancer",
            names::LOAD_BALANCER_STATUS,
            "LoadBalancer contains the current status of the load-balancer",
        ))
        .field(
            Field::new("conditions", required_list(names::SERVICE_CONDITION))
                .description("Current service state of service"),
        )
        .build()
}

/// A service running in an edge cluster.
pub fn edge_cluster_service() -> TypeDefinition {
    ObjectBuilder::new(names::EDGE_CLUSTER_SERVICE)
        .description("Contains information about the edge cluster service")
        .field(required("metadata", names::OBJECT_META, "The service metadata"))
        .field(required(
            "status",
            names::SERVICE_STATUS,
            "The most recently observed status of the service",
        ))
        .field(required(
            "spec",
            names::SERVICE_SPEC,
            "The specification of the desired behavior of the service",
        ))
        .build()
}

/// Master-node ingress address.
pub fn ingress() -> TypeDefinition {
    ObjectBuilder::new(names::INGRESS)
        .description(
            "Ingress represents the status of a load-balancer ingress point traffic intended for the service should be sent to an ingress point",
        )
        .field(optional(
            "ip",
            scalar::STRING,
            "IP is set for load-balancer ingress points that are IP based, (typically GCE or OpenStack load-balancers)",
        ))
        .field(optional(
            "hostname",
            scalar::STRING,
            "Hostname is set for load-balancer ingress points that are DNS based, (typically AWS load-balancers)",
        ))
        .build()
}

/// Master-node port.
pub fn port() -> TypeDefinition {
    ObjectBuilder::new(names::PORT)
        .description("Port contains information on service port")
        .field(required("port", scalar::INT, "The port number of the edge-cluster master port"))
        .field(required(
            "protocol",
            names::PROTOCOL,
            "The protocol of the edge-cluster master port",
        ))
        .build()
}

/// Provisioning output: how to reach the cluster and its kubeconfig.
pub fn provision_detail() -> TypeDefinition {
    ObjectBuilder::new(names::PROVISION_DETAIL)
        .description(
            "The edge cluster provision details contains details such as current status of the edge cluster as well as ingress address of the edge cluster to connect to",
        )
        .field(
            Field::new("ingress", optional_list(names::INGRESS))
                .description("The ingress details of the edge cluster master node"),
        )
        .field(
            Field::new("ports", optional_list(names::PORT))
                .description("The port details of the edge cluster master node"),
        )
        .field(optional(
            "kubeconfigContent",
            scalar::STRING,
            "The provisioned edge cluster kubeconfig content",
        ))
        .build()
}

/// Sort key for list arguments.
pub fn sorting_option_pair() -> TypeDefinition {
    InputObjectBuilder::new(names::SORTING_OPTION_PAIR)
        .field(InputValue::new("name", TypeRef::required(scalar::STRING)))
        .field(InputValue::new("direction", TypeRef::required(names::SORTING_DIRECTION)))
        .build()
}

/// Every value object plus the sorting input, leaves before containers.
pub fn all() -> Vec<TypeDefinition> {
    vec![
        object_meta(),
        node_condition(),
        node_address(),
        node_system_info(),
        node_status(),
        edge_cluster_node(),
        pod_condition(),
        pod_status(),
        pod_spec(),
        edge_cluster_pod(),
        port_status(),
        load_balancer_ingress(),
        load_balancer_status(),
        service_condition(),
        service_port(),
        service_spec(),
        service_status(),
        edge_cluster_service(),
        ingress(),
        port(),
        provision_detail(),
        sorting_option_pair(),
    ]
}
