//! Runtime context for resource identifier construction
//!
//! The lookup needs to know which partition/region/account it is reading
//! from in order to derive the cluster's ARN. The embedding runtime passes
//! this in as an explicitly typed structure.

use crate::error::{LookupError, Result};

/// Default partition when the environment does not specify one
pub const DEFAULT_PARTITION: &str = "aws";

/// Account, region and partition of the caller's environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderContext {
    pub account_id: String,
    pub region: String,
    pub partition: String,
}

impl ProviderContext {
    /// Create a context from explicit components
    pub fn new(
        account_id: impl Into<String>,
        region: impl Into<String>,
        partition: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            region: region.into(),
            partition: partition.into(),
        }
    }

    /// Resolve the context from the process environment
    ///
    /// Reads `AWS_ACCOUNT_ID` and `AWS_REGION` (both required) and
    /// `AWS_PARTITION` (defaults to `aws`).
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("AWS_ACCOUNT_ID").ok(),
            std::env::var("AWS_REGION").ok(),
            std::env::var("AWS_PARTITION").ok(),
        )
    }

    fn from_vars(
        account_id: Option<String>,
        region: Option<String>,
        partition: Option<String>,
    ) -> Result<Self> {
        let account_id = account_id
            .ok_or_else(|| LookupError::Config("AWS_ACCOUNT_ID is not set".to_string()))?;
        let region =
            region.ok_or_else(|| LookupError::Config("AWS_REGION is not set".to_string()))?;

        Ok(Self {
            account_id,
            region,
            partition: partition.unwrap_or_else(|| DEFAULT_PARTITION.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_defaults_to_aws() {
        let context = ProviderContext::from_vars(
            Some("123456789012".to_string()),
            Some("us-east-1".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(context.partition, "aws");
        assert_eq!(context.account_id, "123456789012");
        assert_eq!(context.region, "us-east-1");
    }

    #[test]
    fn test_explicit_partition_is_kept() {
        let context = ProviderContext::from_vars(
            Some("123456789012".to_string()),
            Some("us-gov-west-1".to_string()),
            Some("aws-us-gov".to_string()),
        )
        .unwrap();

        assert_eq!(context.partition, "aws-us-gov");
    }

    #[test]
    fn test_missing_account_or_region_is_an_error() {
        let error =
            ProviderContext::from_vars(None, Some("us-east-1".to_string()), None).unwrap_err();
        assert!(matches!(error, LookupError::Config(_)));
        assert!(error.to_string().contains("AWS_ACCOUNT_ID"));

        let error =
            ProviderContext::from_vars(Some("123456789012".to_string()), None, None).unwrap_err();
        assert!(error.to_string().contains("AWS_REGION"));
    }
}
