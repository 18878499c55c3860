//! Log entry formatter - turns raw log records into displayable entries
//!
//! Formatting is total: missing moderators, targets or descriptions only
//! drop the fragment that depends on them, and codes outside the action
//! table render through the `[Type N]` fallback.

use chrono::SecondsFormat;

use crate::actions::{keys, ActionPayload, BanDuration};
use crate::entities::{LogRecord, UserRef};
use crate::page::LogPage;
use crate::traits::{Escaper, Route, Translator, UrlBuilder};
use crate::view::{ExternalLink, LogEntryView, ModeratorDisplay, ProfileLink};

/// Formatter for moderation log records
#[derive(Clone, Copy)]
pub struct LogEntryFormatter<'a> {
    translator: &'a dyn Translator,
    urls: &'a dyn UrlBuilder,
    escaper: &'a dyn Escaper,
}

impl<'a> LogEntryFormatter<'a> {
    /// Create a formatter over the given collaborators
    pub fn new(
        translator: &'a dyn Translator,
        urls: &'a dyn UrlBuilder,
        escaper: &'a dyn Escaper,
    ) -> Self {
        Self {
            translator,
            urls,
            escaper,
        }
    }

    /// Format a single record
    pub fn format(&self, record: &LogRecord) -> LogEntryView {
        LogEntryView {
            action: record.action,
            timestamp: record.time,
            timestamp_iso: record.time.to_rfc3339_opts(SecondsFormat::Secs, true),
            timestamp_display: record.time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            moderator: self.moderator_display(record.moderator.as_ref()),
            action_text: self.action_text(record.payload()),
            target: self.target_display(record),
            trailing_link: self.trailing_link(record),
        }
    }

    /// Format every record of a page, in order
    pub fn format_page(&self, page: LogPage<LogRecord>) -> LogPage<LogEntryView> {
        page.map_entries(|record| self.format(&record))
    }

    fn moderator_display(&self, moderator: Option<&UserRef>) -> ModeratorDisplay {
        match moderator {
            None => ModeratorDisplay::Hidden,
            Some(user) if user.is_deleted() => ModeratorDisplay::Deleted {
                label: self.translator.translate(keys::DELETED_USER, &[]),
            },
            Some(user) => ModeratorDisplay::Profile(self.profile_link(&user.name)),
        }
    }

    fn action_text(&self, payload: ActionPayload<'_>) -> String {
        match payload {
            ActionPayload::Plain { rule } => self.translator.translate(rule.key, &[]),
            ActionPayload::Targeted { rule, target } => {
                let user = self.user_markup(target.map(|t| t.name.as_str()));
                self.translator.translate(rule.key, &[("user", &user)])
            }
            ActionPayload::Reasoned { rule, reason } => {
                let reason = self.escaper.escape(reason.unwrap_or_default());
                self.translator.translate(rule.key, &[("reason", &reason)])
            }
            ActionPayload::Ban {
                target,
                reason,
                duration,
                ..
            } => {
                let user = self.user_markup(target.map(|t| t.name.as_str()));
                let reason = self.escaper.escape(reason.unwrap_or_default());
                match duration {
                    Some(BanDuration::OneDay) => self
                        .translator
                        .translate(keys::BAN_ONE_DAY, &[("user", &user), ("reason", &reason)]),
                    Some(BanDuration::Days(days)) => {
                        let days = self.escaper.escape(days);
                        self.translator.translate(
                            keys::BAN_DAYS,
                            &[("user", &user), ("days", &days), ("reason", &reason)],
                        )
                    }
                    None => self
                        .translator
                        .translate(keys::BAN_PERMANENT, &[("user", &user), ("reason", &reason)]),
                }
            }
            ActionPayload::Transfer { rule, new_owner } => {
                let user = self.user_markup(new_owner);
                self.translator.translate(rule.key, &[("user", &user)])
            }
            ActionPayload::Unknown { code, description } => {
                let code = code.to_string();
                let description = self.escaper.escape(description.unwrap_or_default());
                self.translator.translate(
                    keys::UNKNOWN,
                    &[("code", &code), ("description", &description)],
                )
            }
        }
    }

    fn target_display(&self, record: &LogRecord) -> Option<ProfileLink> {
        let rule = record.kind()?.rule();
        if !rule.reveals_target {
            return None;
        }
        record
            .target
            .as_ref()
            .map(|target| self.profile_link(&target.name))
    }

    fn trailing_link(&self, record: &LogRecord) -> Option<ExternalLink> {
        record.external_link().map(|url| ExternalLink {
            label: self.translator.translate(keys::LINK, &[]),
            url: url.to_string(),
        })
    }

    fn profile_link(&self, name: &str) -> ProfileLink {
        ProfileLink {
            name: name.to_string(),
            url: self.urls.build_url(Route::UserProfile { name }),
        }
    }

    /// Inline `<a>` markup for a user, empty when there is no user
    fn user_markup(&self, name: Option<&str>) -> String {
        name.map(|name| self.profile_link(name).to_html(self.escaper))
            .unwrap_or_default()
    }
}
