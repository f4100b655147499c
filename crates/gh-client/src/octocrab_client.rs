//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab
//! library. This client makes real API calls against the public API and
//! needs no authentication.

use crate::client::{GitHubClient, REPOS_PER_PAGE};
use crate::types::Repository;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

/// Query parameters for the user-repositories listing endpoint
#[derive(Serialize)]
struct ListReposParams {
    sort: &'static str,
    per_page: u8,
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_user_repos(&self, username: &str) -> anyhow::Result<Vec<Repository>> {
        debug!("Fetching repositories for user {}", username);

        // Raw GET since octocrab has no typed builder for the
        // user-repositories listing with sort parameters.
        let route = format!("/users/{}/repos", username);
        let params = ListReposParams {
            sort: "updated",
            per_page: REPOS_PER_PAGE,
        };
        let repos: Vec<octocrab::models::Repository> =
            self.octocrab.get(route, Some(&params)).await?;

        let repos: Vec<Repository> = repos.iter().map(convert_repository).collect();

        debug!("Fetched {} repositories for user {}", repos.len(), username);
        Ok(repos)
    }
}

/// Convert octocrab Repository to our Repository type
fn convert_repository(repo: &octocrab::models::Repository) -> Repository {
    Repository {
        id: repo.id.0,
        name: repo.name.clone(),
        description: repo.description.clone(),
        stargazers_count: repo.stargazers_count.unwrap_or(0),
        html_url: repo
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
    }
}
