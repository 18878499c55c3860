//! # modlog-store
//!
//! Log record source implementing the repository traits from `modlog-core`.
//!
//! Records are held in memory and can be seeded from a JSON file; the store
//! only reads what it is given and never persists anything.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modlog_store::load_seed_file;
//! use modlog_core::traits::ModLogRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = load_seed_file("seed.json".as_ref()).await?;
//!     let records = repo.fetch_log_page("pics", 1).await?;
//!     Ok(())
//! }
//! ```

pub mod repositories;
pub mod seed;

// Re-export commonly used types
pub use repositories::InMemoryLogRepository;
pub use seed::{load_seed_file, SeedFile};
