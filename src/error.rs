//! Error types for cluster lookup operations
//!
//! This module defines the error surface of the elasticache-lookup library.
//! Every failure is terminal for the invocation that produced it; there is
//! no retry layer and no partial result.

use crate::api::ClientError;
use thiserror::Error;

/// Main error type for cluster lookup operations
#[derive(Error, Debug)]
pub enum LookupError {
    /// Describe query failed - the collaborator's error is surfaced unchanged
    #[error(transparent)]
    Upstream(#[from] ClientError),

    /// The identifier matched no cluster records
    #[error("cache cluster query for {cluster_id:?} returned no results; change your search criteria and try again")]
    NoResults { cluster_id: String },

    /// The identifier matched more than one cluster record
    #[error("cache cluster query for {cluster_id:?} returned {matches} results; try a more specific search criteria")]
    Ambiguous { cluster_id: String, matches: usize },

    /// Tag listing failed after a successful describe
    #[error("listing tags for cache cluster ({arn}): {source}")]
    TagQuery { arn: String, source: ClientError },

    /// The upstream tag list could not be assembled into a key/value map
    #[error("setting tags: {0}")]
    TagAssembly(String),

    /// A cache node record was missing required members
    #[error("incomplete cache node record: {0}")]
    IncompleteNode(String),

    /// Runtime context could not be resolved
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for cluster lookup operations
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = LookupError::NoResults {
            cluster_id: "my-cluster".to_string(),
        };
        assert!(error.to_string().contains("returned no results"));
        assert!(error.to_string().contains("my-cluster"));

        let error = LookupError::Ambiguous {
            cluster_id: "my-cluster".to_string(),
            matches: 3,
        };
        assert!(error.to_string().contains("3 results"));

        let error = LookupError::TagQuery {
            arn: "arn:aws:elasticache:us-east-1:123456789012:cluster:my-cluster".to_string(),
            source: ClientError::Transport("connection reset".to_string()),
        };
        assert!(error.to_string().contains("listing tags"));
        assert!(error.to_string().contains("cluster:my-cluster"));
        assert!(error.to_string().contains("connection reset"));
    }

    #[test]
    fn test_upstream_error_is_transparent() {
        let client_error = ClientError::Service {
            code: "InvalidParameterValue".to_string(),
            message: "bad id".to_string(),
        };
        let rendered = client_error.to_string();

        let error: LookupError = client_error.into();
        assert_eq!(error.to_string(), rendered);
    }
}
