//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::LogRecord;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Moderation Log Repository
// ============================================================================

#[async_trait]
pub trait ModLogRepository: Send + Sync {
    /// Fetch one page of a sub's log, newest first
    ///
    /// Returns at most [`crate::PAGE_SIZE`] records starting at
    /// [`crate::LogPage::offset`] for `page_number`. Fails with
    /// [`DomainError::SubNotFound`] when the sub does not exist.
    async fn fetch_log_page(&self, sub_name: &str, page_number: u32) -> RepoResult<Vec<LogRecord>>;
}
