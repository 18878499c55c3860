//! Business logic services

pub mod context;
pub mod error;
pub mod modlog;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use modlog::ModLogService;
