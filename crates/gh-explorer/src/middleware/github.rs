//! GitHub Operations Middleware
//!
//! Central middleware for GitHub interactions:
//! - repository fetches (`Query::Fetch`)
//! - opening repository pages in the system browser
//!
//! Fetches run on this middleware's tokio runtime; completions re-enter
//! the middleware chain via the dispatcher, tagged with the generation
//! token they were dispatched with.

use crate::actions::{Action, QueryAction, RepoListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use gh_client::{octocrab::Octocrab, GitHubClient, OctocrabClient};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for GitHub API operations
pub struct GitHubMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    /// GitHub client (unauthenticated, public API)
    client: Arc<dyn GitHubClient>,
}

impl GitHubMiddleware {
    /// Create a new GitHub middleware with the default octocrab client
    pub fn new() -> anyhow::Result<Self> {
        let octocrab = Octocrab::builder().build()?;
        let client = Arc::new(OctocrabClient::new(Arc::new(octocrab)));
        Self::with_client(client)
    }

    /// Create a middleware backed by the given client
    pub fn with_client(client: Arc<dyn GitHubClient>) -> anyhow::Result<Self> {
        let runtime = Runtime::new()?;
        Ok(Self { runtime, client })
    }

    /// Spawn the fetch for a minted generation
    fn handle_fetch(&self, username: String, generation: u64, dispatcher: &Dispatcher) {
        log::info!(
            "Spawning fetch for user {} (generation {})",
            username,
            generation
        );

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            match client.fetch_user_repos(&username).await {
                Ok(repos) => {
                    log::info!("Fetched {} repositories for {}", repos.len(), username);
                    dispatcher.dispatch(Action::Query(QueryAction::Loaded {
                        username,
                        generation,
                        repos,
                    }));
                }
                Err(e) => {
                    log::error!("Failed to fetch repositories for {}: {}", username, e);
                    dispatcher.dispatch(Action::Query(QueryAction::Failed {
                        username,
                        generation,
                        error: e.to_string(),
                    }));
                }
            }
        });
    }

    /// Open the selected repository's page in the system browser
    fn handle_open_in_browser(&self, state: &AppState) {
        let Some(repo) = state.query.selected_repo() else {
            log::warn!("No repository selected for opening in browser");
            return;
        };
        if repo.html_url.is_empty() {
            log::warn!("Repository {} has no URL", repo.name);
            return;
        }

        log::info!("Opening {} in browser", repo.html_url);

        let url = repo.html_url.clone();
        self.runtime.spawn(async move {
            #[cfg(target_os = "macos")]
            let _ = tokio::process::Command::new("open").arg(&url).spawn();

            #[cfg(target_os = "linux")]
            let _ = tokio::process::Command::new("xdg-open").arg(&url).spawn();

            #[cfg(target_os = "windows")]
            let _ = tokio::process::Command::new("cmd")
                .args(["/C", "start", &url])
                .spawn();
        });
    }
}

impl Middleware for GitHubMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Query(QueryAction::Fetch {
                username,
                generation,
            }) => {
                self.handle_fetch(username.clone(), *generation, dispatcher);
                false // Consume action
            }

            Action::Repos(RepoListAction::OpenInBrowser) => {
                self.handle_open_in_browser(state);
                false // Consume action
            }

            _ => true, // Pass through other actions
        }
    }
}
