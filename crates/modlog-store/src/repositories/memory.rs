//! In-memory implementation of ModLogRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use modlog_core::traits::{ModLogRepository, RepoResult};
use modlog_core::{LogPage, LogRecord, PAGE_SIZE};

use super::error::sub_not_found;

/// Moderation logs kept in memory, keyed by lowercase sub name
///
/// Each sub's records are kept sorted newest first. Clones share the same
/// underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryLogRepository {
    logs: Arc<RwLock<HashMap<String, Vec<LogRecord>>>>,
}

impl InMemoryLogRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn key(sub_name: &str) -> String {
        sub_name.to_lowercase()
    }

    /// Register a sub with an empty log; existing logs are left untouched
    pub fn create_sub(&self, sub_name: &str) {
        self.logs.write().entry(Self::key(sub_name)).or_default();
    }

    /// Append a record to a sub's log, creating the sub if needed
    pub fn append(&self, sub_name: &str, record: LogRecord) {
        let mut logs = self.logs.write();
        let log = logs.entry(Self::key(sub_name)).or_default();
        // Newest first; equal timestamps keep insertion order
        let at = log.partition_point(|existing| existing.time >= record.time);
        log.insert(at, record);
    }

    /// Append many records to a sub's log
    pub fn extend<I>(&self, sub_name: &str, records: I)
    where
        I: IntoIterator<Item = LogRecord>,
    {
        let mut logs = self.logs.write();
        let log = logs.entry(Self::key(sub_name)).or_default();
        log.extend(records);
        log.sort_by(|a, b| b.time.cmp(&a.time));
    }

    /// Check if a sub is known
    pub fn contains_sub(&self, sub_name: &str) -> bool {
        self.logs.read().contains_key(&Self::key(sub_name))
    }

    /// Number of records in a sub's log
    pub fn len(&self, sub_name: &str) -> Option<usize> {
        self.logs.read().get(&Self::key(sub_name)).map(Vec::len)
    }

    /// Number of known subs
    pub fn sub_count(&self) -> usize {
        self.logs.read().len()
    }
}

impl std::fmt::Debug for InMemoryLogRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryLogRepository")
            .field("subs", &self.sub_count())
            .finish()
    }
}

#[async_trait]
impl ModLogRepository for InMemoryLogRepository {
    #[instrument(skip(self))]
    async fn fetch_log_page(&self, sub_name: &str, page_number: u32) -> RepoResult<Vec<LogRecord>> {
        let logs = self.logs.read();
        let log = logs
            .get(&Self::key(sub_name))
            .ok_or_else(|| sub_not_found(sub_name))?;

        let records: Vec<LogRecord> = log
            .iter()
            .skip(LogPage::<LogRecord>::offset(page_number))
            .take(PAGE_SIZE)
            .cloned()
            .collect();

        debug!(count = records.len(), "Fetched log page");
        Ok(records)
    }
}
