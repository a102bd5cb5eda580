//! In-memory cache service implementation
//!
//! This implementation serves seeded records from memory and is suitable for
//! development, testing, and embedding the lookup in programs that already
//! hold the cluster inventory.

use crate::api::client::{CacheService, ClientError, DescribeCacheClustersRequest};
use crate::api::model::{CacheCluster, Tag};
use async_trait::async_trait;
use std::collections::HashMap;

/// In-memory implementation of [`CacheService`]
///
/// Records are seeded up front with the builder-style `with_*` methods.
/// Failures can be injected for either API call so callers can exercise
/// their error paths without a real service.
///
/// # Example
/// ```
/// use elasticache_lookup::api::{CacheCluster, InMemoryCacheService, Tag};
///
/// let cluster = CacheCluster {
///     cache_cluster_id: Some("my-cluster".to_string()),
///     ..Default::default()
/// };
///
/// let service = InMemoryCacheService::new()
///     .with_cluster(cluster)
///     .with_tags(
///         "arn:aws:elasticache:us-east-1:123456789012:cluster:my-cluster",
///         vec![Tag::new("Environment", "test")],
///     );
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCacheService {
    clusters: Vec<CacheCluster>,
    tags: HashMap<String, Vec<Tag>>,
    describe_failure: Option<ClientError>,
    list_tags_failure: Option<ClientError>,
}

impl InMemoryCacheService {
    /// Create an empty service with no records
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a cluster record
    pub fn with_cluster(mut self, cluster: CacheCluster) -> Self {
        self.clusters.push(cluster);
        self
    }

    /// Seed the tag list for a resource ARN
    pub fn with_tags(mut self, resource_arn: impl Into<String>, tags: Vec<Tag>) -> Self {
        self.tags.insert(resource_arn.into(), tags);
        self
    }

    /// Make every describe call fail with the given error
    pub fn with_describe_failure(mut self, error: ClientError) -> Self {
        self.describe_failure = Some(error);
        self
    }

    /// Make every tag listing call fail with the given error
    pub fn with_list_tags_failure(mut self, error: ClientError) -> Self {
        self.list_tags_failure = Some(error);
        self
    }
}

#[async_trait]
impl CacheService for InMemoryCacheService {
    async fn describe_cache_clusters(
        &self,
        request: &DescribeCacheClustersRequest,
    ) -> Result<Vec<CacheCluster>, ClientError> {
        if let Some(error) = &self.describe_failure {
            return Err(error.clone());
        }

        let mut matched: Vec<CacheCluster> = self
            .clusters
            .iter()
            .filter(|cluster| match &request.cache_cluster_id {
                Some(id) => cluster.cache_cluster_id.as_deref() == Some(id.as_str()),
                None => true,
            })
            .cloned()
            .collect();

        if !request.show_cache_node_info {
            for cluster in &mut matched {
                cluster.cache_nodes.clear();
            }
        }

        Ok(matched)
    }

    async fn list_tags_for_resource(&self, resource_arn: &str) -> Result<Vec<Tag>, ClientError> {
        if let Some(error) = &self.list_tags_failure {
            return Err(error.clone());
        }

        Ok(self.tags.get(resource_arn).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::model::CacheNode;

    fn cluster(id: &str) -> CacheCluster {
        CacheCluster {
            cache_cluster_id: Some(id.to_string()),
            cache_nodes: vec![CacheNode {
                cache_node_id: Some("0001".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_describe_filters_by_identifier() {
        tokio_test::block_on(async {
            let service = InMemoryCacheService::new()
                .with_cluster(cluster("alpha"))
                .with_cluster(cluster("beta"));

            let request = DescribeCacheClustersRequest::for_cluster("beta");
            let matched = service.describe_cache_clusters(&request).await.unwrap();
            assert_eq!(matched.len(), 1);
            assert_eq!(matched[0].cache_cluster_id.as_deref(), Some("beta"));

            let all = service
                .describe_cache_clusters(&DescribeCacheClustersRequest {
                    cache_cluster_id: None,
                    show_cache_node_info: true,
                })
                .await
                .unwrap();
            assert_eq!(all.len(), 2);
        });
    }

    #[test]
    fn test_describe_strips_node_detail_when_not_requested() {
        tokio_test::block_on(async {
            let service = InMemoryCacheService::new().with_cluster(cluster("alpha"));

            let request = DescribeCacheClustersRequest {
                cache_cluster_id: Some("alpha".to_string()),
                show_cache_node_info: false,
            };
            let matched = service.describe_cache_clusters(&request).await.unwrap();
            assert!(matched[0].cache_nodes.is_empty());
        });
    }

    #[test]
    fn test_injected_failures() {
        tokio_test::block_on(async {
            let service = InMemoryCacheService::new()
                .with_describe_failure(ClientError::Transport("down".to_string()));

            let request = DescribeCacheClustersRequest::for_cluster("alpha");
            let error = service.describe_cache_clusters(&request).await.unwrap_err();
            assert_eq!(error, ClientError::Transport("down".to_string()));

            let service = InMemoryCacheService::new().with_list_tags_failure(
                ClientError::Service {
                    code: "Throttling".to_string(),
                    message: "slow down".to_string(),
                },
            );
            let error = service
                .list_tags_for_resource("arn:aws:elasticache:us-east-1:123456789012:cluster:x")
                .await
                .unwrap_err();
            assert!(matches!(error, ClientError::Service { .. }));
        });
    }

    #[test]
    fn test_unknown_arn_has_no_tags() {
        tokio_test::block_on(async {
            let service = InMemoryCacheService::new();
            let tags = service
                .list_tags_for_resource("arn:aws:elasticache:us-east-1:123456789012:cluster:x")
                .await
                .unwrap();
            assert!(tags.is_empty());
        });
    }
}
