//! Domain entities - raw log input

mod log_record;
mod user;

pub use log_record::LogRecord;
pub use user::UserRef;
