// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// `ConditionStatus` enum.
pub const CONDITION_STATUS: &str = "ConditionStatus";
/// `EdgeClusterType` enum.
pub const EDGE_CLUSTER_TYPE: &str = "EdgeClusterType";
/// `NodeConditionType` enum.
pub const NODE_CONDITION_TYPE: &str = "NodeConditionType";
/// `NodeAddressType` enum.
pub const NODE_ADDRESS_TYPE: &str = "NodeAddressType";
/// `PodConditionType` enum.
pub const POD_CONDITION_TYPE: &str = "PodConditionType";
/// `Protocol` enum.
pub const PROTOCOL: &str = "Protocol";
/// `ServiceType` enum.
pub const SERVICE_TYPE: &str = "ServiceType";
/// `SortingDirection` enum.
pub const SORTING_DIRECTION: &str = "SortingDirection";

/// `ObjectMeta` object.
pub const OBJECT_META: &str = "ObjectMeta";
/// `NodeCondition` object.
pub const NODE_CONDITION: &str = "NodeCondition";
/// `NodeAddress` object.
pub const NODE_ADDRESS: &str = "NodeAddress";
/// `NodeSystemInfo` object.
pub const NODE_SYSTEM_INFO: &str = "NodeSystemInfo";
/// `NodeStatus` object.
pub const NODE_STATUS: &str = "NodeStatus";
/// `EdgeClusterNode` object.
pub const EDGE_CLUSTER_NODE: &str = "EdgeClusterNode";
/// `PodCondition` object.
pub const POD_CONDITION: &str = "PodCondition";
/// `PodStatus` object.
pub const POD_STATUS: &str = "PodStatus";
/// `PodSpec` object.
pub const POD_SPEC: &str = "PodSpec";
/// `EdgeClusterPod` object.
pub const EDGE_CLUSTER_POD: &str = "EdgeClusterPod";
/// `PortStatus` object.
pub const PORT_STATUS: &str = "PortStatus";
/// `LoadBalancerIngress` object.
pub const LOAD_BALANCER_INGRESS: &str = "LoadBalancerIngress";
/// `LoadBalancerStatus` object.
pub const LOAD_BALANCER_STATUS: &str = "LoadBalancerStatus";
/// `ServiceCondition` object.
pub const SERVICE_CONDITION: &str = "ServiceCondition";
/// `ServicePort` object.
pub const SERVICE_PORT: &str = "ServicePort";
/// `ServiceSpec` object.
pub const SERVICE_SPEC: &str = "ServiceSpec";
/// `ServiceStatus` object.
pub const SERVICE_STATUS: &str = "ServiceStatus";
/// `EdgeClusterService` object.
pub const EDGE_CLUSTER_SERVICE: &str = "EdgeClusterService";
/// `Ingress` object.
pub const INGRESS: &str = "Ingress";
/// `Port` object.
pub const PORT: &str = "Port";
/// `ProvisionDetail` object.
pub const PROVISION_DETAIL: &str = "ProvisionDetail";
/// `SortingOptionPair` input object.
pub const SORTING_OPTION_PAIR: &str = "SortingOptionPair";

/// `EdgeCluster` entity.
pub const EDGE_CLUSTER: &str = "EdgeCluster";
/// `Project` entity.
pub const PROJECT: &str = "Project";
/// `User` entity.
pub const USER: &str = "User";
