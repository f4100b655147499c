//! Favorites Middleware
//!
//! Resolves `Favorite::Request` against the selected repository and runs
//! the recorder on its tokio runtime. While a repository's recorder call
//! is in flight the control is disabled: further requests for that
//! repository are dropped. Requests for other repositories stay
//! dispatchable and resolve independently.

use crate::actions::{Action, FavoriteAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::recorder::{FavoriteRecorder, SimulatedRecorder};
use crate::state::AppState;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for favorite mutations
pub struct FavoritesMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    /// The recorder capability (simulated by default)
    recorder: Arc<dyn FavoriteRecorder>,
}

impl FavoritesMiddleware {
    /// Create a new favorites middleware with the simulated recorder
    pub fn new() -> anyhow::Result<Self> {
        Self::with_recorder(Arc::new(SimulatedRecorder::new()))
    }

    /// Create a middleware backed by the given recorder
    pub fn with_recorder(recorder: Arc<dyn FavoriteRecorder>) -> anyhow::Result<Self> {
        let runtime = Runtime::new()?;
        Ok(Self { runtime, recorder })
    }

    /// Handle a favorite request for the selected repository
    fn handle_request(&self, state: &AppState, dispatcher: &Dispatcher) {
        let Some(repo) = state.query.selected_repo() else {
            log::warn!("No repository selected for favoriting");
            return;
        };

        if state.favorites.is_pending(repo.id) {
            log::debug!("Favorite for {} already in flight", repo.name);
            return;
        }

        let repo = repo.clone();
        dispatcher.dispatch(Action::Favorite(FavoriteAction::Started {
            repo: repo.clone(),
        }));

        let recorder = Arc::clone(&self.recorder);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            let id = repo.id;
            match recorder.record(repo).await {
                Ok(saved) => {
                    dispatcher.dispatch(Action::Favorite(FavoriteAction::Recorded { repo: saved }));
                }
                Err(e) => {
                    log::error!("Favorite call failed: {}", e);
                    dispatcher.dispatch(Action::Favorite(FavoriteAction::Failed {
                        id,
                        error: e.to_string(),
                    }));
                }
            }
        });
    }
}

impl Middleware for FavoritesMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Favorite(FavoriteAction::Request) => {
                self.handle_request(state, dispatcher);
                false // Consume action
            }

            _ => true, // Pass through other actions
        }
    }
}
