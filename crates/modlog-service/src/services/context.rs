//! Service context - dependency container for services
//!
//! Holds the log repository and the presentation collaborators handed to the
//! formatter.

use std::sync::Arc;

use modlog_common::ModLogConfig;
use modlog_core::{Escaper, LogEntryFormatter, ModLogRepository, Translator, UrlBuilder};

use super::error::{ServiceError, ServiceResult};
use crate::render::{HtmlEscaper, PathUrlBuilder, StringCatalog};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    log_repo: Arc<dyn ModLogRepository>,
    translator: Arc<dyn Translator>,
    urls: Arc<dyn UrlBuilder>,
    escaper: Arc<dyn Escaper>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        log_repo: Arc<dyn ModLogRepository>,
        translator: Arc<dyn Translator>,
        urls: Arc<dyn UrlBuilder>,
        escaper: Arc<dyn Escaper>,
    ) -> Self {
        Self {
            log_repo,
            translator,
            urls,
            escaper,
        }
    }

    /// Get the moderation log repository
    pub fn log_repo(&self) -> &dyn ModLogRepository {
        self.log_repo.as_ref()
    }

    /// Get the translator
    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// Get the URL builder
    pub fn urls(&self) -> &dyn UrlBuilder {
        self.urls.as_ref()
    }

    /// Get the escaper
    pub fn escaper(&self) -> &dyn Escaper {
        self.escaper.as_ref()
    }

    /// Formatter borrowing this context's collaborators
    pub fn formatter(&self) -> LogEntryFormatter<'_> {
        LogEntryFormatter::new(self.translator(), self.urls(), self.escaper())
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("log_repo", &"dyn ModLogRepository")
            .field("collaborators", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// Only the repository is required. Translator, URL builder and escaper
/// default to the English catalog, root-relative paths and HTML escaping.
#[derive(Default)]
pub struct ServiceContextBuilder {
    log_repo: Option<Arc<dyn ModLogRepository>>,
    translator: Option<Arc<dyn Translator>>,
    urls: Option<Arc<dyn UrlBuilder>>,
    escaper: Option<Arc<dyn Escaper>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from application config (link prefix)
    pub fn from_config(config: &ModLogConfig) -> Self {
        Self::new().urls(Arc::new(PathUrlBuilder::with_base_url(
            config.base_url.as_str(),
        )))
    }

    pub fn log_repo(mut self, repo: Arc<dyn ModLogRepository>) -> Self {
        self.log_repo = Some(repo);
        self
    }

    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn urls(mut self, urls: Arc<dyn UrlBuilder>) -> Self {
        self.urls = Some(urls);
        self
    }

    pub fn escaper(mut self, escaper: Arc<dyn Escaper>) -> Self {
        self.escaper = Some(escaper);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.log_repo
                .ok_or_else(|| ServiceError::validation("log_repo is required"))?,
            self.translator
                .unwrap_or_else(|| Arc::new(StringCatalog::english())),
            self.urls.unwrap_or_else(|| Arc::new(PathUrlBuilder::new())),
            self.escaper.unwrap_or_else(|| Arc::new(HtmlEscaper)),
        ))
    }
}
