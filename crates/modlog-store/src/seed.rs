//! Seed data loading
//!
//! A seed file is a JSON object mapping sub names to their log records:
//!
//! ```json
//! {
//!   "subs": {
//!     "pics": [
//!       { "time": "2024-01-01T12:00:00Z", "action": 52, "description": "spam",
//!         "moderator": { "name": "alice" }, "target": { "name": "bob" } }
//!     ]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, instrument};

use modlog_core::traits::RepoResult;
use modlog_core::LogRecord;

use crate::repositories::{store_error, InMemoryLogRepository};

/// Parsed seed file
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub subs: HashMap<String, Vec<LogRecord>>,
}

impl SeedFile {
    /// Parse seed data from a JSON string
    pub fn from_json(json: &str) -> RepoResult<Self> {
        serde_json::from_str(json).map_err(store_error)
    }

    /// Load every sub into a repository
    pub fn load_into(self, repo: &InMemoryLogRepository) {
        for (sub, records) in self.subs {
            repo.create_sub(&sub);
            repo.extend(&sub, records);
        }
    }
}

/// Build a repository from a seed file on disk
#[instrument]
pub async fn load_seed_file(path: &Path) -> RepoResult<InMemoryLogRepository> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| store_error(format!("{}: {e}", path.display())))?;
    let seed = SeedFile::from_json(&json)?;

    let repo = InMemoryLogRepository::new();
    seed.load_into(&repo);
    info!(subs = repo.sub_count(), "Seed data loaded");
    Ok(repo)
}
