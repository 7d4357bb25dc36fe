//! Error types for policy retrieval and document decoding

use std::str::Utf8Error;
use thiserror::Error;

/// Boxed cause carried by [`FetchError::Upstream`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while fetching a managed policy document.
///
/// Each variant names the step that failed and keeps the underlying cause
/// reachable through [`std::error::Error::source`]. Nothing here is retried.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The IAM call failed or returned an incomplete response.
    #[error("IAM {operation} failed: {source}")]
    Upstream {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    /// The document text was not valid percent-encoding.
    #[error("Failed to URL decode policy document: {0}")]
    Decode(#[from] DecodeError),

    /// The decoded document was not a valid policy JSON.
    #[error("Failed to parse policy document JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Wrap a failed IAM call.
    pub fn upstream(operation: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Upstream {
            operation,
            source: source.into(),
        }
    }

    /// A successful IAM response that lacks a field we depend on.
    pub(crate) fn missing_field(operation: &'static str, field: &str) -> Self {
        Self::upstream(operation, format!("response is missing {field}"))
    }
}

/// Errors from percent-decoding a policy document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid percent-escape at byte offset {offset}")]
    InvalidEscape { offset: usize },

    #[error("decoded document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

pub type FetchResult<T> = Result<T, FetchError>;
