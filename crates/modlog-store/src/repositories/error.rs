//! Error handling utilities for repositories

use modlog_core::error::DomainError;

/// Create a "sub not found" error
pub fn sub_not_found(name: &str) -> DomainError {
    DomainError::SubNotFound(name.to_string())
}

/// Wrap any store-side failure
pub fn store_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::StoreError(e.to_string())
}
