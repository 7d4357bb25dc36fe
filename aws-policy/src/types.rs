//! IAM policy document value types

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Current IAM policy language version.
pub const POLICY_VERSION: &str = "2012-10-17";

/// Version IAM assumes when a document omits `Version`.
pub const LEGACY_POLICY_VERSION: &str = "2008-10-17";

fn legacy_version() -> String {
    LEGACY_POLICY_VERSION.to_string()
}

/// An IAM policy document.
///
/// Statement order is significant and is kept as-is by split and merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Policy {
    #[serde(default = "legacy_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub statement: Vec<Statement>,
}

impl Policy {
    /// An empty policy with the given language version and no id.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            id: None,
            statement: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_statement(mut self, statement: Statement) -> Self {
        self.statement.push(statement);
        self
    }

    pub fn len(&self) -> usize {
        self.statement.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statement.is_empty()
    }

    /// Parse a policy from (already URL-decoded) JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Compact JSON, the form IAM size quotas are measured against.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// IAM accepts `"Statement": {..}` as shorthand for a one-element list.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Statement>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        single @ Value::Object(_) => serde_json::from_value(single)
            .map(|statement| vec![statement])
            .map_err(D::Error::custom),
        other => Err(D::Error::custom(format!(
            "expected a statement object or list of statements, found {other}"
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// A single string or a list of strings, as IAM allows for `Action`,
/// `Resource` and their `Not*` forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    Single(String),
    Multiple(Vec<String>),
}

impl StringOrList {
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for StringOrList {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for StringOrList {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

/// One permission statement.
///
/// Keys this type does not model are kept in `extra` and written back
/// unchanged, so a fetched document survives split and merge intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    pub effect: Effect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_principal: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<StringOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_action: Option<StringOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<StringOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_resource: Option<StringOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Statement {
    pub fn new(effect: Effect) -> Self {
        Self {
            sid: None,
            effect,
            principal: None,
            not_principal: None,
            action: None,
            not_action: None,
            resource: None,
            not_resource: None,
            condition: None,
            extra: BTreeMap::new(),
        }
    }

    /// Shorthand for an `Allow` statement over the given actions and resources.
    pub fn allow(action: impl Into<StringOrList>, resource: impl Into<StringOrList>) -> Self {
        Self::new(Effect::Allow)
            .with_action(action)
            .with_resource(resource)
    }

    pub fn with_sid(mut self, sid: impl Into<String>) -> Self {
        self.sid = Some(sid.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<StringOrList>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_resource(mut self, resource: impl Into<StringOrList>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_condition(mut self, condition: Value) -> Self {
        self.condition = Some(condition);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_policy() -> Policy {
        Policy::new(POLICY_VERSION)
            .with_id("ReadOnly")
            .with_statement(
                Statement::allow("s3:GetObject", "arn:aws:s3:::bucket/*").with_sid("Read"),
            )
    }

    #[test]
    fn test_policy_json_uses_iam_keys() {
        let json = sample_policy().to_json().expect("serializes");
        assert_eq!(
            json,
            r#"{"Version":"2012-10-17","Id":"ReadOnly","Statement":[{"Sid":"Read","Effect":"Allow","Action":"s3:GetObject","Resource":"arn:aws:s3:::bucket/*"}]}"#
        );
    }

    #[test]
    fn test_policy_without_id_omits_key() {
        let json = Policy::new(POLICY_VERSION).to_json().expect("serializes");
        assert_eq!(json, r#"{"Version":"2012-10-17","Statement":[]}"#);
    }

    #[test]
    fn test_single_statement_object_is_normalized() {
        let policy = Policy::from_json(
            r#"{"Version":"2012-10-17","Statement":{"Effect":"Deny","Action":"*","Resource":"*"}}"#,
        )
        .expect("parses");
        assert_eq!(policy.len(), 1);
        assert_eq!(policy.statement[0].effect, Effect::Deny);
        assert!(policy.to_json().expect("serializes").contains(r#""Statement":[{"#));
    }

    #[test]
    fn test_statement_scalar_is_rejected() {
        let result = Policy::from_json(r#"{"Version":"2012-10-17","Statement":"nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_version_defaults_to_legacy() {
        let policy = Policy::from_json(r#"{"Statement":[]}"#).expect("parses");
        assert_eq!(policy.version, LEGACY_POLICY_VERSION);
        assert!(policy.is_empty());
    }

    #[test]
    fn test_action_list_and_condition_round_trip() {
        let source = json!({
            "Version": "2012-10-17",
            "Statement": [{
                "Sid": "Tagged",
                "Effect": "Allow",
                "Action": ["ec2:StartInstances", "ec2:StopInstances"],
                "Resource": "*",
                "Condition": {"StringEquals": {"aws:ResourceTag/team": "infra"}}
            }]
        });
        let policy: Policy = serde_json::from_value(source.clone()).expect("parses");
        let statement = &policy.statement[0];
        assert_eq!(
            statement.action.as_ref().map(StringOrList::values),
            Some(vec!["ec2:StartInstances", "ec2:StopInstances"])
        );
        assert_eq!(serde_json::to_value(&policy).expect("serializes"), source);
    }

    #[test]
    fn test_unknown_statement_keys_are_preserved() {
        let source = json!({
            "Version": "2012-10-17",
            "Statement": [{"Effect": "Allow", "NotAction": "iam:*", "Resource": "*", "Custom": [1, 2]}]
        });
        let policy: Policy = serde_json::from_value(source.clone()).expect("parses");
        let statement = &policy.statement[0];
        assert_eq!(statement.not_action, Some(StringOrList::from("iam:*")));
        assert_eq!(statement.extra.get("Custom"), Some(&json!([1, 2])));
        assert_eq!(serde_json::to_value(&policy).expect("serializes"), source);
    }
}
