//! Action table - the closed set of moderation actions the log knows about
//!
//! Every known action code maps to exactly one [`ActionRule`]. The rule
//! decides how the action text is rendered and whether the target user gets
//! its own column. Codes outside the table fall back to the generic
//! `[Type N]` rendering.

mod payload;

pub use payload::{ActionPayload, BanDuration};

/// How an action's text is assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFamily {
    /// Static sentence with no embedded references
    Plain,
    /// Sentence embedding a link to the target user
    Targeted,
    /// Sentence embedding the escaped description as a reason
    Reasoned,
    /// Temporary or permanent ban
    Ban,
    /// Ownership transfer; the new owner's name lives in the description
    Transfer,
}

/// Rendering rule for a known action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRule {
    pub kind: ActionKind,
    /// Translation key of the action sentence
    pub key: &'static str,
    pub family: RuleFamily,
    /// Show the target user in the separate target column
    pub reveals_target: bool,
    /// The record's `link` field holds a ban duration instead of a URL
    pub link_is_duration: bool,
}

impl ActionRule {
    const fn new(kind: ActionKind, key: &'static str, family: RuleFamily) -> Self {
        Self {
            kind,
            key,
            family,
            reveals_target: false,
            link_is_duration: false,
        }
    }

    const fn revealing(mut self) -> Self {
        self.reveals_target = true;
        self
    }

    const fn with_duration(mut self) -> Self {
        self.link_is_duration = true;
        self
    }
}

/// Known moderation actions, discriminants are the stored action codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ActionKind {
    SubCreated = 20,
    SettingsChanged = 21,
    UserBanned = 22,
    UserUnbanned = 23,
    ModInviteSent = 24,
    ModInviteAccepted = 25,
    ModRemoved = 26,
    ModInviteRevoked = 27,
    ModInviteDeclined = 28,
    StylesheetEdited = 29,
    OwnershipTransferred = 30,
    PostStickied = 50,
    PostUnstickied = 51,
    PostDeleted = 52,
    PostUndeleted = 53,
    CommentDeleted = 58,
    CommentUndeleted = 59,
    StickySortNew = 73,
    StickySortBest = 74,
}

/// Rule table, one entry per [`ActionKind`]
///
/// Bans reveal the target even though the ban sentence already links it;
/// both links are shown.
pub static ACTION_TABLE: [ActionRule; 19] = [
    ActionRule::new(ActionKind::SubCreated, "log.sub_created", RuleFamily::Plain),
    ActionRule::new(ActionKind::SettingsChanged, "log.settings_changed", RuleFamily::Plain),
    ActionRule::new(ActionKind::UserBanned, "log.ban_permanent", RuleFamily::Ban)
        .revealing()
        .with_duration(),
    ActionRule::new(ActionKind::UserUnbanned, "log.unbanned", RuleFamily::Targeted).revealing(),
    ActionRule::new(ActionKind::ModInviteSent, "log.mod_invite_sent", RuleFamily::Targeted)
        .revealing(),
    ActionRule::new(ActionKind::ModInviteAccepted, "log.mod_invite_accepted", RuleFamily::Plain),
    ActionRule::new(ActionKind::ModRemoved, "log.mod_removed", RuleFamily::Targeted).revealing(),
    ActionRule::new(ActionKind::ModInviteRevoked, "log.mod_invite_revoked", RuleFamily::Targeted)
        .revealing(),
    ActionRule::new(ActionKind::ModInviteDeclined, "log.mod_invite_declined", RuleFamily::Targeted)
        .revealing(),
    ActionRule::new(ActionKind::StylesheetEdited, "log.stylesheet_edited", RuleFamily::Plain),
    ActionRule::new(
        ActionKind::OwnershipTransferred,
        "log.ownership_transferred",
        RuleFamily::Transfer,
    ),
    ActionRule::new(ActionKind::PostStickied, "log.post_stickied", RuleFamily::Plain),
    ActionRule::new(ActionKind::PostUnstickied, "log.post_unstickied", RuleFamily::Plain),
    ActionRule::new(ActionKind::PostDeleted, "log.post_deleted", RuleFamily::Reasoned).revealing(),
    ActionRule::new(ActionKind::PostUndeleted, "log.post_undeleted", RuleFamily::Reasoned)
        .revealing(),
    ActionRule::new(ActionKind::CommentDeleted, "log.comment_deleted", RuleFamily::Reasoned)
        .revealing(),
    ActionRule::new(ActionKind::CommentUndeleted, "log.comment_undeleted", RuleFamily::Reasoned)
        .revealing(),
    ActionRule::new(ActionKind::StickySortNew, "log.sticky_sort_new", RuleFamily::Plain),
    ActionRule::new(ActionKind::StickySortBest, "log.sticky_sort_best", RuleFamily::Plain),
];

/// Translation keys used outside the table
pub mod keys {
    pub const BAN_ONE_DAY: &str = "log.ban_one_day";
    pub const BAN_DAYS: &str = "log.ban_days";
    pub const BAN_PERMANENT: &str = "log.ban_permanent";
    pub const UNKNOWN: &str = "log.unknown";
    pub const DELETED_USER: &str = "log.deleted_user";
    pub const LINK: &str = "log.link";
}

impl ActionKind {
    /// Look up the action for a stored code
    pub fn from_code(code: i32) -> Option<Self> {
        ACTION_TABLE
            .iter()
            .find(|rule| rule.kind.code() == code)
            .map(|rule| rule.kind)
    }

    /// Stored action code
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Rendering rule for this action
    pub fn rule(self) -> &'static ActionRule {
        ACTION_TABLE
            .iter()
            .find(|rule| rule.kind == self)
            .unwrap_or_else(|| unreachable!("every ActionKind has a table entry"))
    }
}
