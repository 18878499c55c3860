//! Per-action payloads decoded from a raw log record

use crate::entities::{LogRecord, UserRef};

use super::{ActionKind, ActionRule, RuleFamily};

/// Length of a temporary ban
///
/// The stored value is never parsed; anything other than `"1"` is shown
/// verbatim as a number of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BanDuration<'a> {
    OneDay,
    Days(&'a str),
}

impl<'a> BanDuration<'a> {
    /// Decode the raw duration string
    pub fn parse(raw: &'a str) -> Self {
        if raw == "1" {
            Self::OneDay
        } else {
            Self::Days(raw)
        }
    }
}

/// Action data in the shape each action family needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionPayload<'a> {
    Plain {
        rule: &'static ActionRule,
    },
    Targeted {
        rule: &'static ActionRule,
        target: Option<&'a UserRef>,
    },
    Reasoned {
        rule: &'static ActionRule,
        reason: Option<&'a str>,
    },
    /// `duration` is `None` for a permanent ban
    Ban {
        rule: &'static ActionRule,
        target: Option<&'a UserRef>,
        reason: Option<&'a str>,
        duration: Option<BanDuration<'a>>,
    },
    Transfer {
        rule: &'static ActionRule,
        new_owner: Option<&'a str>,
    },
    Unknown {
        code: i32,
        description: Option<&'a str>,
    },
}

impl<'a> ActionPayload<'a> {
    /// Decode a record according to its action rule
    pub fn decode(record: &'a LogRecord) -> Self {
        let Some(rule) = ActionKind::from_code(record.action).map(ActionKind::rule) else {
            return Self::Unknown {
                code: record.action,
                description: record.description.as_deref(),
            };
        };

        match rule.family {
            RuleFamily::Plain => Self::Plain { rule },
            RuleFamily::Targeted => Self::Targeted {
                rule,
                target: record.target.as_ref(),
            },
            RuleFamily::Reasoned => Self::Reasoned {
                rule,
                reason: record.description.as_deref(),
            },
            RuleFamily::Ban => Self::Ban {
                rule,
                target: record.target.as_ref(),
                reason: record.description.as_deref(),
                duration: record.raw_link().map(BanDuration::parse),
            },
            RuleFamily::Transfer => Self::Transfer {
                rule,
                new_owner: record.description.as_deref(),
            },
        }
    }

    /// Rule backing this payload, `None` for unknown codes
    pub fn rule(&self) -> Option<&'static ActionRule> {
        match self {
            Self::Plain { rule }
            | Self::Targeted { rule, .. }
            | Self::Reasoned { rule, .. }
            | Self::Ban { rule, .. }
            | Self::Transfer { rule, .. } => Some(rule),
            Self::Unknown { .. } => None,
        }
    }
}
