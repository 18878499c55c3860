//! # modlog-service
//!
//! Application layer: turns a sub name and page number into a formatted log
//! page, wiring the domain formatter to its default collaborators.

pub mod dto;
pub mod render;
pub mod services;

pub use dto::{HealthResponse, LogPageResponse};
pub use render::{HtmlEscaper, PathUrlBuilder, StringCatalog};
pub use services::{ModLogService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
