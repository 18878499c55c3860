//! Axum extractors for request handling

mod path;

pub use path::{LogPagePath, SubPath};
