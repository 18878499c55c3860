//! Response DTOs

use chrono::{DateTime, Utc};
use modlog_core::{LogEntryView, LogPage};
use serde::Serialize;

// ============================================================================
// Log Responses
// ============================================================================

/// One formatted page of a sub's moderation log
#[derive(Debug, Clone, Serialize)]
pub struct LogPageResponse {
    pub sub: String,
    pub page: u32,
    pub has_previous: bool,
    pub has_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    pub entries: Vec<LogEntryView>,
}

impl LogPageResponse {
    /// Build from a formatted page; navigation URLs are filled by the caller
    pub fn from_page(sub: impl Into<String>, page: LogPage<LogEntryView>) -> Self {
        Self {
            sub: sub.into(),
            page: page.page_number,
            has_previous: page.has_previous,
            has_next: page.has_next,
            previous_url: None,
            next_url: None,
            entries: page.entries,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok(version: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}
