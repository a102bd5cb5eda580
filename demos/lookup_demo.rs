//! Cluster Lookup Demo Application
//!
//! Seeds an in-memory cache service and resolves a cluster descriptor,
//! showing the flattened attributes and the error paths.
//!
//! Usage:
//!   cargo run --example lookup_demo
//!
//! Environment variables (a .env file is honored):
//!   AWS_ACCOUNT_ID - account id for ARN derivation (default: 123456789012)
//!   AWS_REGION     - region for ARN derivation (default: us-east-1)
//!   AWS_PARTITION  - partition for ARN derivation (default: aws)

use elasticache_lookup::api::{
    CacheCluster, CacheNode, Endpoint, InMemoryCacheService, NotificationConfiguration, Tag,
};
use elasticache_lookup::{lookup_cluster, ProviderContext};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    info!("=== Cluster Lookup Demo ===");

    let context = ProviderContext::from_env().unwrap_or_else(|_| {
        ProviderContext::new("123456789012", "us-east-1", "aws")
    });
    info!(
        "Using context: account={} region={} partition={}",
        context.account_id, context.region, context.partition
    );

    let cluster = CacheCluster {
        cache_cluster_id: Some("demo-redis".to_string()),
        cache_node_type: Some("cache.t3.micro".to_string()),
        num_cache_nodes: Some(2),
        engine: Some("redis".to_string()),
        engine_version: Some("6.2.6".to_string()),
        preferred_availability_zone: Some("us-east-1a".to_string()),
        notification_configuration: Some(NotificationConfiguration {
            topic_arn: Some("arn:aws:sns:us-east-1:123456789012:cache-events".to_string()),
            topic_status: Some("active".to_string()),
        }),
        configuration_endpoint: Some(Endpoint {
            address: Some("demo-redis.cfg.use1.cache.example.com".to_string()),
            port: Some(6379),
        }),
        cache_nodes: vec![
            CacheNode {
                cache_node_id: Some("0001".to_string()),
                cache_node_status: Some("available".to_string()),
                endpoint: Some(Endpoint {
                    address: Some("node-0001.example.com".to_string()),
                    port: Some(6379),
                }),
                customer_availability_zone: Some("us-east-1a".to_string()),
            },
            CacheNode {
                cache_node_id: Some("0002".to_string()),
                cache_node_status: Some("available".to_string()),
                endpoint: Some(Endpoint {
                    address: Some("node-0002.example.com".to_string()),
                    port: Some(6379),
                }),
                customer_availability_zone: Some("us-east-1b".to_string()),
            },
        ],
        ..Default::default()
    };

    let arn = format!(
        "arn:{}:elasticache:{}:{}:cluster:demo-redis",
        context.partition, context.region, context.account_id
    );

    let service = InMemoryCacheService::new().with_cluster(cluster).with_tags(
        arn.as_str(),
        vec![
            Tag::new("Environment", "demo"),
            Tag::new("aws:cloudformation:stack-name", "demo-stack"),
        ],
    );

    info!("\n--- Successful Lookup ---");
    let descriptor = lookup_cluster(&service, "Demo-Redis", &context).await?;
    info!("Cluster id: {}", descriptor.cluster_id);
    info!("Node type: {:?}", descriptor.node_type);
    info!("Engine: {:?} {:?}", descriptor.engine, descriptor.engine_version);
    info!("Configuration endpoint: {:?}", descriptor.configuration_endpoint);
    info!("Notification topic: {:?}", descriptor.notification_topic_arn);
    info!("ARN: {}", descriptor.arn);
    for node in &descriptor.cache_nodes {
        info!(
            "Node {}: {}:{} ({})",
            node.id, node.address, node.port, node.availability_zone
        );
    }
    info!("Tags (reserved keys filtered): {:?}", descriptor.tags);

    info!("\n--- Unknown Identifier ---");
    match lookup_cluster(&service, "missing", &context).await {
        Ok(_) => info!("unexpected success"),
        Err(e) => info!("lookup failed as expected: {}", e),
    }

    info!("\n--- JSON Projection ---");
    let json = serde_json::to_string_pretty(&descriptor)?;
    info!("ClusterDescriptor as JSON:\n{}", json);

    info!("\n=== Demo Complete ===");

    Ok(())
}
