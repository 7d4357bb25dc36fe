//! AWS SDK integration: the IAM operations the fetcher depends on, their
//! aws-sdk-iam implementation, and policy document decoding.

pub(crate) mod document;
pub(crate) mod iam_client;

use async_trait::async_trait;

use crate::error::FetchResult;

pub(crate) const GET_POLICY: &str = "GetPolicy";
pub(crate) const GET_POLICY_VERSION: &str = "GetPolicyVersion";

/// A managed policy as returned by `GetPolicy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyHandle {
    pub arn: String,
    pub default_version_id: String,
}

/// The two IAM operations a [`crate::PolicyFetcher`] calls, in order.
///
/// Implementations report failures as [`crate::FetchError::Upstream`].
#[async_trait]
pub trait PolicySource: Send + Sync {
    /// Resolve a policy ARN to its canonical ARN and default version.
    async fn get_policy(&self, policy_arn: &str) -> FetchResult<PolicyHandle>;

    /// The document of one policy version, still URL-encoded.
    async fn get_policy_version(&self, policy_arn: &str, version_id: &str) -> FetchResult<String>;
}

/// Overrides applied on top of the default AWS configuration chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
}

impl ClientConfig {
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Load AWS configuration using the standard credential provider chain.
    pub async fn load(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        loader.load().await
    }
}
