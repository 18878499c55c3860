//! Traits (ports) implemented by the outer layers

mod collaborators;
mod repositories;

pub use collaborators::{Escaper, Route, Translator, UrlBuilder};
pub use repositories::{ModLogRepository, RepoResult};
