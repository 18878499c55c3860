//! Log entry view model - what the presentation layer renders

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::traits::Escaper;

/// Link to a user's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileLink {
    pub name: String,
    pub url: String,
}

impl ProfileLink {
    /// Inline `<a>` markup with both the url and the name escaped
    pub fn to_html(&self, escaper: &dyn Escaper) -> String {
        format!(
            r#"<a href="{}">{}</a>"#,
            escaper.escape(&self.url),
            escaper.escape(&self.name)
        )
    }
}

/// Generic external link shown after the action text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

/// How the moderator column is displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModeratorDisplay {
    /// Link to the moderator's profile
    Profile(ProfileLink),
    /// Moderator account was deleted; shown as a plain label
    Deleted { label: String },
    /// No moderator recorded
    Hidden,
}

impl ModeratorDisplay {
    #[inline]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// A formatted log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntryView {
    pub action: i32,
    pub timestamp: DateTime<Utc>,
    /// RFC 3339 form of `timestamp`
    pub timestamp_iso: String,
    /// Human-readable form of `timestamp`
    pub timestamp_display: String,
    pub moderator: ModeratorDisplay,
    /// Localised description, may contain inline links
    pub action_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<ProfileLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_link: Option<ExternalLink>,
}
