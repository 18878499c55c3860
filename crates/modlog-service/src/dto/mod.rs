//! Data transfer objects for API responses

pub mod responses;

pub use responses::{HealthResponse, LogPageResponse};
