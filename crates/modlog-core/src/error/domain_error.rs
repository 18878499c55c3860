//! Domain errors - error types for the domain layer
//!
//! Formatting and pagination never fail; these errors come from the data
//! collaborator side of the domain.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Sub not found: {0}")]
    SubNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid page number: {0} (pages start at 1)")]
    InvalidPage(u32),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store error: {0}")]
    StoreError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::SubNotFound(_) => "UNKNOWN_SUB",
            Self::InvalidPage(_) => "INVALID_PAGE",
            Self::StoreError(_) => "STORE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SubNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPage(_))
    }
}
