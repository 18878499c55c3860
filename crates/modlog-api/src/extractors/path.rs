//! Path parameter extractors
//!
//! Typed extraction of the sub name and log page number.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with only a sub name
#[derive(Debug, Deserialize)]
pub struct SubPath {
    pub sub: String,
}

#[derive(Debug, Deserialize)]
struct RawLogPagePath {
    sub: String,
    page: String,
}

/// Sub name plus a 1-indexed page number
///
/// Rejects non-numeric and zero page numbers with `INVALID_PATH_PARAMETER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPagePath {
    pub sub: String,
    pub page: u32,
}

impl LogPagePath {
    fn parse_page(raw: &str) -> Result<u32, ApiError> {
        match raw.parse::<u32>() {
            Ok(0) | Err(_) => Err(ApiError::invalid_path(format!(
                "page must be a positive integer, got '{raw}'"
            ))),
            Ok(page) => Ok(page),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for LogPagePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<RawLogPagePath>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(Self {
            page: Self::parse_page(&raw.page)?,
            sub: raw.sub,
        })
    }
}
