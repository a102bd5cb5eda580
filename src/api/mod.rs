//! Cache service API seam
//!
//! This module defines the boundary to the managed caching service: the
//! typed wire model, the `CacheService` trait the lookup adapter consumes,
//! and an in-memory implementation for tests and embedding.

pub mod client;
pub mod memory;
pub mod model;

pub use client::{CacheService, ClientError, DescribeCacheClustersRequest};
pub use memory::InMemoryCacheService;
pub use model::{
    CacheCluster, CacheNode, CacheParameterGroupStatus, CacheSecurityGroupMembership, Endpoint,
    NotificationConfiguration, SecurityGroupMembership, Tag,
};
