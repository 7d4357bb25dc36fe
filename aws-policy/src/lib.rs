//! This crate provides the core logic for working with AWS IAM policy documents:
//! - Fetching the default version of a managed policy by ARN
//! - Splitting a policy into fragments that fit IAM size quotas
//! - Merging fragments back into a single policy
//!

mod aws;
mod error;
mod fetch;
mod limits;
mod merge;
mod size;
mod split;
mod types;

// Re-exports for a small, focused public API
pub use aws::document::decode_policy_document;
pub use aws::iam_client::AwsIamClient;
pub use aws::{ClientConfig, PolicyHandle, PolicySource};
pub use error::{BoxError, DecodeError, FetchError, FetchResult};
pub use fetch::PolicyFetcher;
pub use limits::PolicySizeLimit;
pub use merge::merge;
pub use size::json_size;
pub use split::{split, split_for};
pub use types::{
    Effect, Policy, Statement, StringOrList, LEGACY_POLICY_VERSION, POLICY_VERSION,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_then_merge_sample_document() {
        let document = r#"{
            "Version": "2012-10-17",
            "Id": "Workers",
            "Statement": [
                {"Sid": "Read", "Effect": "Allow", "Action": ["s3:GetObject", "s3:ListBucket"], "Resource": "*"},
                {"Sid": "Queue", "Effect": "Allow", "Action": "sqs:*", "Resource": "arn:aws:sqs:us-east-1:123456789012:jobs"},
                {"Sid": "NoIam", "Effect": "Deny", "NotAction": "iam:PassRole", "Resource": "*"}
            ]
        }"#;
        let policy = decode_policy_document(document).expect("should decode");
        assert_eq!(policy.id.as_deref(), Some("Workers"));

        let fragments = split(&policy, 150);
        assert!(fragments.len() > 1);

        let merged = merge("Workers", POLICY_VERSION, &fragments);
        assert_eq!(merged.statement, policy.statement);
    }
}
