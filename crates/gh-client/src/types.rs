//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from octocrab's models to keep the
//! consuming application independent of the underlying HTTP library.

use serde::{Deserialize, Serialize};

/// A repository from the GitHub API
///
/// Only the fields the application renders are decoded; everything else
/// in the API response is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Stable repository id (unique across GitHub)
    pub id: u64,

    /// Repository name (e.g., "query")
    pub name: String,

    /// Repository description (null for repositories without one)
    pub description: Option<String>,

    /// Number of stargazers
    pub stargazers_count: u32,

    /// Repository URL for opening in a browser
    pub html_url: String,
}

impl Repository {
    /// Description text, falling back to a fixed placeholder
    pub fn description_or_placeholder(&self) -> &str {
        self.description.as_deref().unwrap_or("No description")
    }
}
