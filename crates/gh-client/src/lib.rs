//! GitHub API client for listing a user's repositories
//!
//! This crate provides a trait-based GitHub API client so the application
//! can depend on the `GitHubClient` interface rather than on a concrete
//! HTTP implementation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_user_repos()                            │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let octocrab = octocrab::Octocrab::builder().build()?;
//! let client = OctocrabClient::new(Arc::new(octocrab));
//!
//! let repos = client.fetch_user_repos("tanstack").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod types;

pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use types::Repository;

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
