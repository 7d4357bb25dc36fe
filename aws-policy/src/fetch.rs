//! Managed policy retrieval
//!
//! A fetch is two sequential IAM calls, `GetPolicy` to find the default
//! version and `GetPolicyVersion` to read its document, followed by
//! URL-decoding and JSON parsing. Failures are returned as-is; retries, if
//! any, belong to the caller or to the SDK client's own retry configuration.

use log::debug;

use crate::aws::document::decode_policy_document;
use crate::aws::iam_client::AwsIamClient;
use crate::aws::{ClientConfig, PolicySource};
use crate::error::FetchResult;
use crate::types::Policy;

/// Fetches the default version of a managed policy.
pub struct PolicyFetcher<S = AwsIamClient> {
    source: S,
}

impl PolicyFetcher<AwsIamClient> {
    /// Create a fetcher with an IAM client built from the default AWS
    /// configuration chain.
    pub async fn new() -> Self {
        Self::with_config(&ClientConfig::default()).await
    }

    /// Create a fetcher with an IAM client built from `config`.
    pub async fn with_config(config: &ClientConfig) -> Self {
        let sdk_config = config.load().await;
        Self::with_source(AwsIamClient::from_conf(&sdk_config))
    }
}

impl<S: PolicySource> PolicyFetcher<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and decode the default version of the policy `policy_arn`.
    pub async fn fetch(&self, policy_arn: &str) -> FetchResult<Policy> {
        let handle = self.source.get_policy(policy_arn).await?;
        debug!(
            "Policy '{}' default version is '{}'",
            handle.arn, handle.default_version_id
        );

        let document = self
            .source
            .get_policy_version(&handle.arn, &handle.default_version_id)
            .await?;

        let policy = decode_policy_document(&document)?;
        debug!(
            "Fetched policy '{}' with {} statements",
            handle.arn,
            policy.len()
        );
        Ok(policy)
    }
}
