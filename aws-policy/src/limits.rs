//! IAM policy document size quotas
//!
//! AWS measures these in characters with whitespace removed; for the ASCII
//! documents IAM accepts that matches the byte length of the compact JSON.

/// Size quota a policy document has to fit when published to IAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicySizeLimit {
    /// Customer managed policy.
    Managed,
    /// Inline policy on a role (aggregate per role).
    RoleInline,
    /// Inline policy on a user (aggregate per user).
    UserInline,
    /// Inline policy on a group (aggregate per group).
    GroupInline,
    Custom(usize),
}

impl PolicySizeLimit {
    pub const MANAGED_BYTES: usize = 6_144;
    pub const ROLE_INLINE_BYTES: usize = 10_240;
    pub const USER_INLINE_BYTES: usize = 2_048;
    pub const GROUP_INLINE_BYTES: usize = 5_120;

    pub fn bytes(self) -> usize {
        match self {
            Self::Managed => Self::MANAGED_BYTES,
            Self::RoleInline => Self::ROLE_INLINE_BYTES,
            Self::UserInline => Self::USER_INLINE_BYTES,
            Self::GroupInline => Self::GROUP_INLINE_BYTES,
            Self::Custom(bytes) => bytes,
        }
    }
}

impl From<usize> for PolicySizeLimit {
    fn from(bytes: usize) -> Self {
        Self::Custom(bytes)
    }
}
