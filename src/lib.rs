//! # elasticache-lookup
//!
//! A read-only lookup of ElastiCache cluster configuration: given a cluster
//! identifier, fetch the live record from the caching service and expose it
//! as a flat, queryable [`ClusterDescriptor`].
//!
//! ## Features
//!
//! - Single describe query with node-level detail, validated to match
//!   exactly one cluster
//! - Nested response structures flattened into named fields (security
//!   groups, node list, notification topic, configuration endpoint)
//! - Deterministic ARN derivation from caller-supplied
//!   partition/region/account context
//! - Tag listing keyed by the derived ARN, with provider-reserved keys
//!   filtered out
//! - Pluggable [`api::CacheService`] seam with an in-memory implementation
//!   for tests and embedding
//!
//! ## Quick start
//!
//! ```
//! use elasticache_lookup::api::{CacheCluster, InMemoryCacheService, Tag};
//! use elasticache_lookup::{lookup_cluster, ProviderContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = InMemoryCacheService::new()
//!         .with_cluster(CacheCluster {
//!             cache_cluster_id: Some("prod-redis".to_string()),
//!             cache_node_type: Some("cache.m5.large".to_string()),
//!             engine: Some("redis".to_string()),
//!             ..Default::default()
//!         })
//!         .with_tags(
//!             "arn:aws:elasticache:us-east-1:123456789012:cluster:prod-redis",
//!             vec![Tag::new("Environment", "production")],
//!         );
//!
//!     let context = ProviderContext::new("123456789012", "us-east-1", "aws");
//!     let descriptor = lookup_cluster(&service, "prod-redis", &context).await?;
//!
//!     assert_eq!(descriptor.cluster_id, "prod-redis");
//!     assert_eq!(descriptor.node_type.as_deref(), Some("cache.m5.large"));
//!     assert_eq!(
//!         descriptor.tags.get("Environment").map(String::as_str),
//!         Some("production")
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error behavior
//!
//! Every failure is terminal for the invocation: describe failures surface
//! unchanged, zero and multiple matches are distinct errors, and a tag
//! listing failure after a successful describe is wrapped with the derived
//! ARN for context. There is no retry layer and no partial result.

pub mod api;
pub mod arn;
pub mod context;
pub mod error;
pub mod lookup;
pub mod tags;

// Re-export main types for convenience
pub use arn::Arn;
pub use context::{ProviderContext, DEFAULT_PARTITION};
pub use error::{LookupError, Result};
pub use lookup::{lookup_cluster, CacheNodeDescriptor, ClusterDescriptor, SERVICE_NAME};
pub use tags::{KeyValueTags, AWS_TAG_KEY_PREFIX};
