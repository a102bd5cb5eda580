//! Cluster lookup adapter
//!
//! Resolves a cluster identifier to a [`ClusterDescriptor`]: one describe
//! query with node detail, cardinality validation, flattening of the nested
//! response structures, ARN derivation, and a tag listing keyed by that ARN.

use crate::api::model::{CacheNode, CacheSecurityGroupMembership, SecurityGroupMembership};
use crate::api::{CacheService, DescribeCacheClustersRequest};
use crate::arn::Arn;
use crate::context::ProviderContext;
use crate::error::{LookupError, Result};
use crate::tags::KeyValueTags;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Service name component of cluster ARNs
pub const SERVICE_NAME: &str = "elasticache";

/// One cache-serving node of a cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheNodeDescriptor {
    pub id: String,
    pub address: String,
    pub port: i64,
    pub availability_zone: String,
}

/// Flat projection of a cluster's live configuration
///
/// Scalar fields that the service may omit are `Option`s; set-valued fields
/// are ordered sets; `cache_nodes` preserves the response order of the node
/// list; `tags` excludes keys reserved by the managing system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterDescriptor {
    pub cluster_id: String,
    pub node_type: Option<String>,
    pub num_cache_nodes: Option<i64>,
    pub subnet_group_name: Option<String>,
    pub engine: Option<String>,
    pub engine_version: Option<String>,
    pub parameter_group_name: Option<String>,
    pub replication_group_id: Option<String>,
    pub security_group_names: BTreeSet<String>,
    pub security_group_ids: BTreeSet<String>,
    pub maintenance_window: Option<String>,
    pub snapshot_window: Option<String>,
    pub snapshot_retention_limit: Option<i64>,
    pub availability_zone: Option<String>,
    /// Set only while the cluster's notification topic is active
    pub notification_topic_arn: Option<String>,
    pub port: Option<i64>,
    /// Combined `address:port` of the configuration endpoint
    pub configuration_endpoint: Option<String>,
    /// Address of the configuration endpoint
    pub cluster_address: Option<String>,
    pub arn: String,
    pub cache_nodes: Vec<CacheNodeDescriptor>,
    pub tags: BTreeMap<String, String>,
}

/// Resolve a cluster identifier to its descriptor
///
/// The identifier is lowercased before the query. Exactly one upstream
/// record must match: zero matches and multiple matches are both errors,
/// never a partial result.
///
/// # Arguments
/// * `client` - Cache service implementation to query
/// * `cluster_id` - Cluster identifier to look up
/// * `context` - Partition/region/account of the caller's environment
///
/// # Example
/// ```
/// use elasticache_lookup::api::{CacheCluster, InMemoryCacheService};
/// use elasticache_lookup::{lookup_cluster, ProviderContext};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let service = InMemoryCacheService::new().with_cluster(CacheCluster {
///         cache_cluster_id: Some("my-cluster".to_string()),
///         engine: Some("redis".to_string()),
///         ..Default::default()
///     });
///     let context = ProviderContext::new("123456789012", "us-east-1", "aws");
///
///     let descriptor = lookup_cluster(&service, "my-cluster", &context).await?;
///     assert_eq!(descriptor.engine.as_deref(), Some("redis"));
///     assert_eq!(
///         descriptor.arn,
///         "arn:aws:elasticache:us-east-1:123456789012:cluster:my-cluster"
///     );
///     Ok(())
/// }
/// ```
pub async fn lookup_cluster<C>(
    client: &C,
    cluster_id: &str,
    context: &ProviderContext,
) -> Result<ClusterDescriptor>
where
    C: CacheService + ?Sized,
{
    let query_id = cluster_id.to_lowercase();
    let request = DescribeCacheClustersRequest::for_cluster(query_id.clone());

    debug!(cluster_id = %query_id, "reading cache cluster");
    let mut clusters = client.describe_cache_clusters(&request).await?;

    if clusters.len() > 1 {
        return Err(LookupError::Ambiguous {
            cluster_id: query_id,
            matches: clusters.len(),
        });
    }
    let cluster = clusters.pop().ok_or_else(|| LookupError::NoResults {
        cluster_id: query_id.clone(),
    })?;

    let resolved_id = cluster
        .cache_cluster_id
        .clone()
        .unwrap_or_else(|| query_id.clone());

    let mut descriptor = ClusterDescriptor {
        cluster_id: resolved_id.clone(),
        node_type: cluster.cache_node_type.clone(),
        num_cache_nodes: cluster.num_cache_nodes,
        subnet_group_name: cluster.cache_subnet_group_name.clone(),
        engine: cluster.engine.clone(),
        engine_version: cluster.engine_version.clone(),
        maintenance_window: cluster.preferred_maintenance_window.clone(),
        snapshot_window: cluster.snapshot_window.clone(),
        snapshot_retention_limit: cluster.snapshot_retention_limit,
        availability_zone: cluster.preferred_availability_zone.clone(),
        replication_group_id: cluster.replication_group_id.clone(),
        security_group_names: security_group_names(&cluster.cache_security_groups),
        security_group_ids: security_group_ids(&cluster.security_groups),
        cache_nodes: flatten_cache_nodes(&cluster.cache_nodes)?,
        ..Default::default()
    };

    if let Some(parameter_group) = &cluster.cache_parameter_group {
        descriptor.parameter_group_name = parameter_group.cache_parameter_group_name.clone();
    }

    if let Some(notification) = &cluster.notification_configuration {
        if notification.topic_status.as_deref() == Some("active") {
            descriptor.notification_topic_arn = notification.topic_arn.clone();
        }
    }

    if let Some(endpoint) = &cluster.configuration_endpoint {
        descriptor.port = endpoint.port;
        if let Some(address) = &endpoint.address {
            descriptor.cluster_address = Some(address.clone());
            if let Some(port) = endpoint.port {
                descriptor.configuration_endpoint = Some(format!("{}:{}", address, port));
            }
        }
    }

    let arn = Arn::new(
        context.partition.clone(),
        SERVICE_NAME,
        context.region.clone(),
        context.account_id.clone(),
        format!("cluster:{}", resolved_id),
    )
    .to_string();

    debug!(arn = %arn, "listing cache cluster tags");
    let tag_list = client
        .list_tags_for_resource(&arn)
        .await
        .map_err(|source| LookupError::TagQuery {
            arn: arn.clone(),
            source,
        })?;

    descriptor.tags = KeyValueTags::from_list(&tag_list)?.ignore_aws().into_map();
    descriptor.arn = arn;

    Ok(descriptor)
}

fn security_group_names(memberships: &[CacheSecurityGroupMembership]) -> BTreeSet<String> {
    memberships
        .iter()
        .filter_map(|membership| membership.cache_security_group_name.clone())
        .collect()
}

fn security_group_ids(memberships: &[SecurityGroupMembership]) -> BTreeSet<String> {
    memberships
        .iter()
        .filter_map(|membership| membership.security_group_id.clone())
        .collect()
}

/// Flatten the node list in response order
///
/// Every node must carry its id, endpoint address, endpoint port and
/// availability zone; a record missing any of them is an error rather than
/// a silently incomplete descriptor.
fn flatten_cache_nodes(nodes: &[CacheNode]) -> Result<Vec<CacheNodeDescriptor>> {
    let mut flattened = Vec::with_capacity(nodes.len());

    for node in nodes {
        let endpoint = node.endpoint.as_ref();
        let id = node.cache_node_id.as_ref();
        let address = endpoint.and_then(|e| e.address.as_ref());
        let port = endpoint.and_then(|e| e.port);
        let availability_zone = node.customer_availability_zone.as_ref();

        match (id, address, port, availability_zone) {
            (Some(id), Some(address), Some(port), Some(availability_zone)) => {
                flattened.push(CacheNodeDescriptor {
                    id: id.clone(),
                    address: address.clone(),
                    port,
                    availability_zone: availability_zone.clone(),
                });
            }
            _ => {
                return Err(LookupError::IncompleteNode(format!("{:?}", node)));
            }
        }
    }

    Ok(flattened)
}
