//! Splitting a policy into fragments that fit a size quota
//!
//! Statements are packed greedily, in order, into fragments whose compact JSON
//! stays within the limit. Concatenating the fragments' statements gives back
//! the original list exactly.

use log::{debug, warn};

use crate::limits::PolicySizeLimit;
use crate::size::json_size;
use crate::types::Policy;

/// Split `policy` into fragments no larger than `limit` bytes.
///
/// A policy already smaller than `limit` comes back unchanged as the only
/// element. Otherwise fragments carry the policy's version and no id. A
/// statement that is larger than `limit` on its own gets a fragment to
/// itself; it is never dropped or cut. No fragment is ever empty, and a
/// `limit` of zero yields one statement per fragment.
pub fn split(policy: &Policy, limit: usize) -> Vec<Policy> {
    let total = json_size(policy);
    if total < limit {
        return vec![policy.clone()];
    }

    let empty_fragment = || Policy::new(policy.version.clone());
    let empty_size = json_size(&empty_fragment());

    let mut fragments = Vec::new();
    let mut current = empty_fragment();
    let mut current_size = empty_size;

    for statement in &policy.statement {
        let statement_size = json_size(statement);

        // +1 for the `,` before a non-first array element.
        if !current.is_empty() && current_size + 1 + statement_size > limit {
            fragments.push(std::mem::replace(&mut current, empty_fragment()));
            current_size = empty_size;
        }

        if statement_size > limit {
            warn!(
                "Statement {:?} is {} bytes, over the {} byte limit on its own",
                statement.sid, statement_size, limit
            );
        }

        current_size += usize::from(!current.is_empty()) + statement_size;
        current.statement.push(statement.clone());
    }

    if !current.is_empty() {
        fragments.push(current);
    }

    debug!(
        "Split policy of {} bytes and {} statements into {} fragments (limit {})",
        total,
        policy.len(),
        fragments.len(),
        limit
    );
    fragments
}

/// [`split`] against one of the IAM quotas.
pub fn split_for(policy: &Policy, limit: PolicySizeLimit) -> Vec<Policy> {
    split(policy, limit.bytes())
}
