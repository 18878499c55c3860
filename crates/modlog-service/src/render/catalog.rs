//! English string catalog for log entries

use std::collections::HashMap;

use modlog_core::Translator;

/// Built-in English templates, keyed by translation key
const ENGLISH: &[(&str, &str)] = &[
    ("log.sub_created", "Created the sub"),
    ("log.settings_changed", "Changed the sub's settings"),
    (
        "log.ban_one_day",
        "Temporarily banned {user} for 1 day with reason `{reason}`",
    ),
    (
        "log.ban_days",
        "Temporarily banned {user} for {days} days with reason `{reason}`",
    ),
    ("log.ban_permanent", "Banned {user} with reason `{reason}`"),
    ("log.unbanned", "Unbanned {user}"),
    ("log.mod_invite_sent", "Invited {user} to the mod team"),
    ("log.mod_invite_accepted", "Accepted an invitation to the mod team"),
    ("log.mod_removed", "Removed {user} from the mod team"),
    ("log.mod_invite_revoked", "Revoked {user}'s invitation to the mod team"),
    ("log.mod_invite_declined", "{user} declined an invitation to the mod team"),
    ("log.stylesheet_edited", "Edited the sub's stylesheet"),
    ("log.ownership_transferred", "Transferred the sub to {user}"),
    ("log.post_stickied", "Stickied a post"),
    ("log.post_unstickied", "Removed a sticky post"),
    ("log.post_deleted", "Deleted a post with reason `{reason}`"),
    ("log.post_undeleted", "Un-deleted a post with reason `{reason}`"),
    ("log.comment_deleted", "Deleted a comment with reason `{reason}`"),
    ("log.comment_undeleted", "Un-deleted a comment with reason `{reason}`"),
    ("log.sticky_sort_new", "Set sticky post sorting to new"),
    ("log.sticky_sort_best", "Set sticky post sorting to best"),
    ("log.unknown", "[Type {code}] {description}"),
    ("log.deleted_user", "[Deleted]"),
    ("log.link", "Link"),
];

/// Template catalog with `{name}` placeholders
///
/// Unknown keys translate to the key itself. Placeholders without a matching
/// parameter are left in place.
#[derive(Debug, Clone)]
pub struct StringCatalog {
    templates: HashMap<String, String>,
}

impl StringCatalog {
    /// Create an empty catalog
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Create the built-in English catalog
    pub fn english() -> Self {
        Self {
            templates: ENGLISH
                .iter()
                .map(|(key, template)| ((*key).to_string(), (*template).to_string()))
                .collect(),
        }
    }

    /// Add or replace a template
    pub fn with_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(key.into(), template.into());
        self
    }

    /// Check if a key has a template
    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }
}

impl Default for StringCatalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Translator for StringCatalog {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.templates.get(key) {
            Some(template) => interpolate(template, params),
            None => key.to_string(),
        }
    }
}

/// Substitute `{name}` placeholders in a single pass
///
/// Substituted values are never rescanned, so a parameter containing braces
/// is inserted verbatim.
fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match params.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
