//! # modlog-core
//!
//! Domain layer for a sub's moderation log: raw log records, the action
//! table, the entry formatter, page navigation, and the traits the outer
//! layers implement. This crate has zero dependencies on infrastructure
//! (storage, web framework, etc.).

pub mod actions;
pub mod entities;
pub mod error;
pub mod formatter;
pub mod page;
pub mod traits;
pub mod view;

// Re-export commonly used types at crate root
pub use actions::{ActionKind, ActionPayload, ActionRule, BanDuration, RuleFamily, ACTION_TABLE};
pub use entities::{LogRecord, UserRef};
pub use error::DomainError;
pub use formatter::LogEntryFormatter;
pub use page::{LogPage, PAGE_SIZE};
pub use traits::{Escaper, ModLogRepository, RepoResult, Route, Translator, UrlBuilder};
pub use view::{ExternalLink, LogEntryView, ModeratorDisplay, ProfileLink};
