//! Repository implementations
//!
//! Implementations of the repository traits defined in modlog-core.

mod error;
mod memory;

pub use error::{store_error, sub_not_found};
pub use memory::InMemoryLogRepository;
