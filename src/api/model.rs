//! Wire model for the cache service API
//!
//! Every member is optional, matching the backing service's JSON where any
//! field may be absent from a response. Member names follow the service's
//! PascalCase convention on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cache cluster record as returned by a describe query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CacheCluster {
    /// Cluster identifier, unique within the account/region
    pub cache_cluster_id: Option<String>,
    /// Compute and memory capacity class of the nodes
    pub cache_node_type: Option<String>,
    pub num_cache_nodes: Option<i64>,
    pub cache_subnet_group_name: Option<String>,
    pub engine: Option<String>,
    pub engine_version: Option<String>,
    pub cache_cluster_status: Option<String>,
    pub cache_cluster_create_time: Option<DateTime<Utc>>,
    pub preferred_maintenance_window: Option<String>,
    pub snapshot_window: Option<String>,
    pub snapshot_retention_limit: Option<i64>,
    pub preferred_availability_zone: Option<String>,
    pub replication_group_id: Option<String>,
    pub cache_parameter_group: Option<CacheParameterGroupStatus>,
    pub notification_configuration: Option<NotificationConfiguration>,
    /// Stable discovery endpoint; absent for single-node clusters
    pub configuration_endpoint: Option<Endpoint>,
    /// Classic (named) security group memberships
    pub cache_security_groups: Vec<CacheSecurityGroupMembership>,
    /// VPC security group memberships
    pub security_groups: Vec<SecurityGroupMembership>,
    /// Per-node detail; populated only when requested
    pub cache_nodes: Vec<CacheNode>,
}

/// Address/port pair for a cluster or node endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Endpoint {
    pub address: Option<String>,
    pub port: Option<i64>,
}

/// A single cache-serving node within a cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CacheNode {
    pub cache_node_id: Option<String>,
    pub cache_node_status: Option<String>,
    pub endpoint: Option<Endpoint>,
    pub customer_availability_zone: Option<String>,
}

/// Notification topic wiring for a cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NotificationConfiguration {
    pub topic_arn: Option<String>,
    pub topic_status: Option<String>,
}

/// Parameter group attached to a cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CacheParameterGroupStatus {
    pub cache_parameter_group_name: Option<String>,
    pub parameter_apply_status: Option<String>,
}

/// Membership in a classic (named) cache security group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CacheSecurityGroupMembership {
    pub cache_security_group_name: Option<String>,
    pub status: Option<String>,
}

/// Membership in a VPC security group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecurityGroupMembership {
    pub security_group_id: Option<String>,
    pub status: Option<String>,
}

/// A key/value tag attached to a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    /// Create a tag with both key and value set
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}
