//! AWS IAM client wrapper for managed policy reads

use async_trait::async_trait;
use aws_sdk_iam::Client as IamClient;
use log::debug;

use super::{PolicyHandle, PolicySource, GET_POLICY, GET_POLICY_VERSION};
use crate::error::{FetchError, FetchResult};

/// [`PolicySource`] backed by the AWS SDK IAM client.
#[derive(Debug, Clone)]
pub struct AwsIamClient {
    client: IamClient,
}

impl AwsIamClient {
    pub fn new(client: IamClient) -> Self {
        Self { client }
    }

    pub fn from_conf(config: &aws_config::SdkConfig) -> Self {
        Self::new(IamClient::new(config))
    }

    pub fn client(&self) -> &IamClient {
        &self.client
    }
}

#[async_trait]
impl PolicySource for AwsIamClient {
    async fn get_policy(&self, policy_arn: &str) -> FetchResult<PolicyHandle> {
        debug!("Calling {GET_POLICY} for '{policy_arn}'");
        let response = self
            .client
            .get_policy()
            .policy_arn(policy_arn)
            .send()
            .await
            .map_err(|e| FetchError::upstream(GET_POLICY, aws_sdk_iam::Error::from(e)))?;

        let policy = response
            .policy()
            .ok_or_else(|| FetchError::missing_field(GET_POLICY, "Policy"))?;
        let arn = policy
            .arn()
            .ok_or_else(|| FetchError::missing_field(GET_POLICY, "Policy.Arn"))?;
        let default_version_id = policy
            .default_version_id()
            .ok_or_else(|| FetchError::missing_field(GET_POLICY, "Policy.DefaultVersionId"))?;

        Ok(PolicyHandle {
            arn: arn.to_string(),
            default_version_id: default_version_id.to_string(),
        })
    }

    async fn get_policy_version(&self, policy_arn: &str, version_id: &str) -> FetchResult<String> {
        debug!("Calling {GET_POLICY_VERSION} for '{policy_arn}' version '{version_id}'");
        let response = self
            .client
            .get_policy_version()
            .policy_arn(policy_arn)
            .version_id(version_id)
            .send()
            .await
            .map_err(|e| FetchError::upstream(GET_POLICY_VERSION, aws_sdk_iam::Error::from(e)))?;

        response
            .policy_version()
            .and_then(|version| version.document())
            .map(str::to_string)
            .ok_or_else(|| FetchError::missing_field(GET_POLICY_VERSION, "PolicyVersion.Document"))
    }
}
