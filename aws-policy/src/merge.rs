//! Merging policy fragments back into one document

use log::debug;

use crate::types::Policy;

/// Concatenate the statements of `policies`, in order, into one policy with
/// the given id and version.
///
/// Statements are not deduplicated, reordered or size-checked. Merging the
/// output of [`crate::split`] gives back the original statement list.
pub fn merge<'a, I>(name: impl Into<String>, version: impl Into<String>, policies: I) -> Policy
where
    I: IntoIterator<Item = &'a Policy>,
{
    let mut result = Policy::new(version).with_id(name);
    let mut sources = 0usize;
    for policy in policies {
        result.statement.extend(policy.statement.iter().cloned());
        sources += 1;
    }
    debug!(
        "Merged {} policies into {} statements",
        sources,
        result.statement.len()
    );
    result
}
