//! Presentation collaborators used while formatting log entries

/// Localised string lookup
///
/// Implementations must be total: a missing key still yields some text.
pub trait Translator: Send + Sync {
    /// Translate `key`, substituting `{name}` placeholders from `params`
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;
}

/// Named routes the log links to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    UserProfile { name: &'a str },
    SubLog { sub: &'a str, page: u32 },
}

/// URL construction for named routes
pub trait UrlBuilder: Send + Sync {
    fn build_url(&self, route: Route<'_>) -> String;
}

/// Markup escaping for free text interpolated into generated markup
pub trait Escaper: Send + Sync {
    fn escape(&self, text: &str) -> String;
}
