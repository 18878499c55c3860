//! Path-based URL construction

use modlog_core::{Route, UrlBuilder};

/// Builds site-relative paths, optionally prefixed with a base URL
#[derive(Debug, Clone, Default)]
pub struct PathUrlBuilder {
    base_url: String,
}

impl PathUrlBuilder {
    /// Create a builder producing `/`-rooted paths
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder prefixing every path with `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl UrlBuilder for PathUrlBuilder {
    fn build_url(&self, route: Route<'_>) -> String {
        match route {
            Route::UserProfile { name } => {
                format!("{}/u/{}", self.base_url, urlencoding::encode(name))
            }
            Route::SubLog { sub, page } => {
                format!("{}/s/{}/log/{page}", self.base_url, urlencoding::encode(sub))
            }
        }
    }
}
