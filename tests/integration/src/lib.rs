//! Integration test utilities for the moderation log server
//!
//! This crate provides helpers for running end-to-end tests against
//! the JSON API over real HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
