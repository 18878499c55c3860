//! Moderation log service
//!
//! Fetches one page of a sub's log and renders it for display.

use modlog_core::{ActionKind, DomainError, LogPage, LogRecord, Route};
use tracing::{debug, instrument};

use crate::dto::LogPageResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Moderation log service
pub struct ModLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModLogService<'a> {
    /// Create a new ModLogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get one formatted page of a sub's moderation log
    ///
    /// Pages are 1-indexed. A page past the end of the log is empty, not an
    /// error.
    #[instrument(skip(self))]
    pub async fn get_log_page(&self, sub: &str, page: u32) -> ServiceResult<LogPageResponse> {
        if page == 0 {
            return Err(DomainError::InvalidPage(page).into());
        }

        let records = self.ctx.log_repo().fetch_log_page(sub, page).await?;
        log_unknown_actions(&records);

        let formatted = self
            .ctx
            .formatter()
            .format_page(LogPage::paginate(records, page));

        let urls = self.ctx.urls();
        let previous_url = formatted
            .previous_page()
            .map(|page| urls.build_url(Route::SubLog { sub, page }));
        let next_url = formatted
            .next_page()
            .map(|page| urls.build_url(Route::SubLog { sub, page }));

        debug!(entries = formatted.len(), has_next = formatted.has_next, "Log page rendered");

        Ok(LogPageResponse {
            previous_url,
            next_url,
            ..LogPageResponse::from_page(sub, formatted)
        })
    }
}

fn log_unknown_actions(records: &[LogRecord]) {
    for record in records {
        if ActionKind::from_code(record.action).is_none() {
            debug!(action = record.action, "Unknown moderation action code");
        }
    }
}
