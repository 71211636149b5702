//! Repository search results.

use serde::Deserialize;

/// Response of `GET /search/repositories`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySearch {
    #[serde(default)]
    pub total_count: u64,
    pub items: Vec<Repository>,
}

/// Repository owner.
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// A public repository returned by search.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: Owner,
}

impl Repository {
    /// `owner/name` form.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}
