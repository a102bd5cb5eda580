//! The `CacheService` trait and its error type
//!
//! This trait abstracts the managed caching service's control-plane API,
//! allowing users to plug in a real cloud client or the in-memory
//! implementation from [`crate::api::memory`]. Connection management,
//! credentials and retries belong to the implementation behind the trait,
//! not to this library.

use crate::api::model::{CacheCluster, Tag};
use async_trait::async_trait;
use thiserror::Error;

/// Error returned by a cache service implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Network-level failure reaching the service
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with an error response
    #[error("service error ({code}): {message}")]
    Service { code: String, message: String },
}

/// Parameters for a describe-clusters query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeCacheClustersRequest {
    /// Restrict the query to a single cluster identifier
    pub cache_cluster_id: Option<String>,
    /// Include per-node detail (endpoints, availability zones) in the records
    pub show_cache_node_info: bool,
}

impl DescribeCacheClustersRequest {
    /// Build a request for one cluster with node detail included
    pub fn for_cluster(cache_cluster_id: impl Into<String>) -> Self {
        Self {
            cache_cluster_id: Some(cache_cluster_id.into()),
            show_cache_node_info: true,
        }
    }
}

/// Read-only control-plane operations of the caching service
///
/// # Example
/// ```
/// use elasticache_lookup::api::{
///     CacheService, DescribeCacheClustersRequest, InMemoryCacheService,
/// };
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let service = InMemoryCacheService::new();
///     let request = DescribeCacheClustersRequest::for_cluster("my-cluster");
///     let clusters = service.describe_cache_clusters(&request).await?;
///     assert!(clusters.is_empty());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Describe cache clusters, optionally restricted to one identifier
    async fn describe_cache_clusters(
        &self,
        request: &DescribeCacheClustersRequest,
    ) -> Result<Vec<CacheCluster>, ClientError>;

    /// List the tags attached to the resource named by `resource_arn`
    async fn list_tags_for_resource(&self, resource_arn: &str) -> Result<Vec<Tag>, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_for_cluster() {
        let request = DescribeCacheClustersRequest::for_cluster("prod-redis");
        assert_eq!(request.cache_cluster_id.as_deref(), Some("prod-redis"));
        assert!(request.show_cache_node_info);
    }

    #[test]
    fn test_client_error_display() {
        let error = ClientError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "transport error: connection refused");

        let error = ClientError::Service {
            code: "CacheClusterNotFound".to_string(),
            message: "cluster does not exist".to_string(),
        };
        assert!(error.to_string().contains("CacheClusterNotFound"));
    }
}
