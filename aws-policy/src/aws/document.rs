//! Decoding of policy documents as IAM returns them (URL-encoded JSON)

use percent_encoding::percent_decode_str;

use crate::error::{DecodeError, FetchResult};
use crate::types::Policy;

/// Decode a URL-encoded policy document into a [`Policy`].
///
/// Fails with [`crate::FetchError::Decode`] on a malformed escape or
/// non-UTF-8 content and with [`crate::FetchError::Parse`] on invalid JSON.
pub fn decode_policy_document(text: &str) -> FetchResult<Policy> {
    let json = unescape_document(text)?;
    Ok(Policy::from_json(&json)?)
}

/// Query-string unescaping: `+` is a space and every `%` must start a
/// two-digit hex escape.
pub(crate) fn unescape_document(text: &str) -> Result<String, DecodeError> {
    let bytes = text.as_bytes();
    for (offset, _) in text.match_indices('%') {
        let valid = bytes
            .get(offset + 1..offset + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(DecodeError::InvalidEscape { offset });
        }
    }

    let spaced = text.replace('+', " ");
    let decoded = percent_decode_str(&spaced).decode_utf8()?;
    Ok(decoded.into_owned())
}
