//! User reference - the slice of a user account a log entry points at

use serde::{Deserialize, Serialize};

/// Reference to a user account as seen by the moderation log
///
/// Only the fields the log needs are carried: the display name used for
/// profile links and the account status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub name: String,
    #[serde(default)]
    pub status: i32,
}

impl UserRef {
    /// Account status for an active account
    pub const STATUS_OK: i32 = 0;
    /// Account status for a deleted account
    pub const STATUS_DELETED: i32 = 10;

    /// Create a reference to an active account
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Self::STATUS_OK,
        }
    }

    /// Create a reference to a deleted account
    pub fn deleted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Self::STATUS_DELETED,
        }
    }

    /// Check if the account was deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.status == Self::STATUS_DELETED
    }
}
