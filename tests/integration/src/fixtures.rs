//! Test fixtures and data generators
//!
//! Provides log records, seed files and response shapes for integration
//! tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use modlog_core::{LogRecord, UserRef};
use modlog_store::InMemoryLogRepository;
use serde::Deserialize;
use serde_json::{json, Value};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Fixed base time plus `minutes`, so ordering is predictable
pub fn at(minutes: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default() + Duration::minutes(minutes)
}

/// `count` settings-changed records, one minute apart
pub fn filler_records(count: usize) -> Vec<LogRecord> {
    (0..count)
        .map(|i| LogRecord::new(21, at(i as i64)).with_moderator(UserRef::new("mod")))
        .collect()
}

/// Repository holding `count` filler records for `sub`
pub fn repo_with_filler(sub: &str, count: usize) -> InMemoryLogRepository {
    let repo = InMemoryLogRepository::new();
    repo.create_sub(sub);
    repo.extend(sub, filler_records(count));
    repo
}

/// Records covering each kind of rendering, oldest first
pub fn mixed_records() -> Vec<LogRecord> {
    vec![
        LogRecord::new(20, at(0)).with_moderator(UserRef::new("founder")),
        LogRecord::new(22, at(1))
            .with_moderator(UserRef::new("mod"))
            .with_target(UserRef::new("troll"))
            .with_description("<script>")
            .with_link("1"),
        LogRecord::new(52, at(2))
            .with_moderator(UserRef::deleted("gone"))
            .with_description("spam")
            .with_link("https://example.com/p/1"),
        LogRecord::new(30, at(3))
            .with_moderator(UserRef::new("founder"))
            .with_target(UserRef::new("ignored"))
            .with_description("heir"),
        LogRecord::new(999, at(4)).with_description("future action"),
    ]
}

/// Seed document in the on-disk format
pub fn seed_json(subs: &[(&str, Vec<LogRecord>)]) -> Value {
    let subs: serde_json::Map<String, Value> = subs
        .iter()
        .map(|(sub, records)| ((*sub).to_string(), json!(records)))
        .collect();
    json!({ "subs": subs })
}

/// Seed file written to the temp directory, removed on drop
pub struct TempSeedFile {
    pub path: PathBuf,
}

impl TempSeedFile {
    pub fn write(seed: &Value) -> Result<Self> {
        let path = std::env::temp_dir().join(format!(
            "modlog-seed-{}-{}.json",
            std::process::id(),
            unique_suffix()
        ));
        std::fs::write(&path, serde_json::to_vec(seed)?)?;
        Ok(Self { path })
    }
}

impl Drop for TempSeedFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Log page response
#[derive(Debug, Deserialize)]
pub struct LogPageResponse {
    pub sub: String,
    pub page: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_url: Option<String>,
    pub next_url: Option<String>,
    pub entries: Vec<LogEntryResponse>,
}

/// One rendered log entry
#[derive(Debug, Deserialize)]
pub struct LogEntryResponse {
    pub action: i32,
    pub timestamp_iso: String,
    pub timestamp_display: String,
    pub moderator: Value,
    pub action_text: String,
    pub target: Option<LinkResponse>,
    pub trailing_link: Option<ExternalLinkResponse>,
}

/// Profile link
#[derive(Debug, Deserialize)]
pub struct LinkResponse {
    pub name: String,
    pub url: String,
}

/// External link
#[derive(Debug, Deserialize)]
pub struct ExternalLinkResponse {
    pub label: String,
    pub url: String,
}

/// Health response
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
