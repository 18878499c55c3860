//! # modlog-api
//!
//! JSON API server exposing sub moderation logs, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_app_state_with_repo, run, run_server};
pub use state::AppState;
