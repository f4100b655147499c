//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy.

use crate::types::Repository;
use async_trait::async_trait;

/// Number of repositories requested per listing call
pub const REPOS_PER_PAGE: u8 = 10;

/// GitHub API client trait
///
/// Defines the interface for reading from the GitHub API. Implementations
/// can be direct (hitting the API) or decorated with caching, rate
/// limiting, retry logic, etc.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, Repository};
///
/// async fn latest(client: &dyn GitHubClient) -> anyhow::Result<Vec<Repository>> {
///     client.fetch_user_repos("tanstack").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch a user's most recently updated repositories
    ///
    /// Issues a single read for "repositories owned by `username`, sorted
    /// by most-recently-updated, page size [`REPOS_PER_PAGE`]" and returns
    /// the decoded list in the order the service returned it. No retries
    /// are performed.
    ///
    /// # Arguments
    ///
    /// * `username` - GitHub login of the user; must be non-empty (callers
    ///   suppress the operation entirely for an empty username)
    ///
    /// # Returns
    ///
    /// The user's repositories, or an error carrying a human-readable
    /// message when the call does not complete successfully.
    async fn fetch_user_repos(&self, username: &str) -> anyhow::Result<Vec<Repository>>;
}
