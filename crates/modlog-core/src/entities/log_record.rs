//! Log record entity - one raw row of a sub's moderation log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actions::{ActionKind, ActionPayload};

use super::UserRef;

/// A moderation log record as supplied by the data layer
///
/// `link` is overloaded: for [`ActionKind::UserBanned`] it holds the ban
/// duration in days, for every other action it is an external URL. Use
/// [`LogRecord::payload`] and [`LogRecord::external_link`] instead of reading
/// it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub time: DateTime<Utc>,
    pub action: i32,
    #[serde(default)]
    pub moderator: Option<UserRef>,
    #[serde(default)]
    pub target: Option<UserRef>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl LogRecord {
    /// Create a bare record for an action code
    pub fn new(action: i32, time: DateTime<Utc>) -> Self {
        Self {
            time,
            action,
            moderator: None,
            target: None,
            description: None,
            link: None,
        }
    }

    /// Set the moderator who performed the action
    pub fn with_moderator(mut self, moderator: UserRef) -> Self {
        self.moderator = Some(moderator);
        self
    }

    /// Set the user the action was performed on
    pub fn with_target(mut self, target: UserRef) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the free-text description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the raw link field
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Known action kind for this record, if the code is recognised
    pub fn kind(&self) -> Option<ActionKind> {
        ActionKind::from_code(self.action)
    }

    /// Decode the action-specific payload
    pub fn payload(&self) -> ActionPayload<'_> {
        ActionPayload::decode(self)
    }

    /// External URL attached to the record
    ///
    /// Always `None` for bans, where `link` carries the duration.
    pub fn external_link(&self) -> Option<&str> {
        match self.kind() {
            Some(kind) if kind.rule().link_is_duration => None,
            _ => self.raw_link(),
        }
    }

    /// Stored `link`, with an empty string treated as absent
    pub(crate) fn raw_link(&self) -> Option<&str> {
        self.link.as_deref().filter(|link| !link.is_empty())
    }
}
