//! Application state
//!
//! State is owned by the main thread and mutated only through reducers;
//! the background worker reads a cloned snapshot.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Local};
use gh_client::Repository;

use crate::theme::Theme;

/// Username shown (and fetched) on first launch
pub const SEED_USERNAME: &str = "tanstack";

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub query: QueryState,
    pub favorites: FavoritesState,
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            query: QueryState::default(),
            favorites: FavoritesState::default(),
            theme: Theme::default(),
        }
    }
}

/// Fetch lifecycle of a single attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Fetched data for one username
#[derive(Debug, Clone, Default)]
pub struct QueryEntry {
    /// Lifecycle of the most recent fetch for this username
    pub loading: LoadingState,
    /// Set once a fetch for this username succeeded; kept on later errors
    pub repos: Option<Vec<Repository>>,
    /// Cursor position in the repository table
    pub selected: usize,
    /// Timestamp of the last successful load
    pub last_updated: Option<DateTime<Local>>,
}

/// Fetch state keyed by the username input
///
/// Every edit of a non-empty username mints a new generation token and
/// marks that username's entry as loading. Resolutions carry the token
/// back; only the latest generation may update state, so a fetch that was
/// superseded while in flight can never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct QueryState {
    /// Current username input (drives fetch re-execution)
    pub username: String,
    /// Latest minted generation token
    pub generation: u64,
    /// Highest generation already handed to the middleware chain
    pub dispatched: u64,
    /// Results per username, kept across username changes
    pub entries: HashMap<String, QueryEntry>,
}

impl Default for QueryState {
    fn default() -> Self {
        let mut state = Self {
            username: String::new(),
            generation: 0,
            dispatched: 0,
            entries: HashMap::new(),
        };
        state.edit_username(SEED_USERNAME.to_string());
        state
    }
}

impl QueryState {
    /// Replace the username and, when non-empty, request a fetch for it
    pub fn edit_username(&mut self, next: String) {
        self.username = next;
        if !self.username.is_empty() {
            self.generation += 1;
            let entry = self.entries.entry(self.username.clone()).or_default();
            entry.loading = LoadingState::Loading;
        }
    }

    /// Hand out the fetch for the latest generation, at most once
    pub fn due_fetch(&mut self) -> Option<crate::actions::QueryAction> {
        if self.generation > self.dispatched && !self.username.is_empty() {
            self.dispatched = self.generation;
            Some(crate::actions::QueryAction::Fetch {
                username: self.username.clone(),
                generation: self.generation,
            })
        } else {
            None
        }
    }

    /// Entry for the current username
    pub fn current(&self) -> Option<&QueryEntry> {
        self.entries.get(&self.username)
    }

    /// Mutable entry for the current username
    pub fn current_mut(&mut self) -> Option<&mut QueryEntry> {
        self.entries.get_mut(&self.username)
    }

    /// The repository under the cursor, if any
    pub fn selected_repo(&self) -> Option<&Repository> {
        let entry = self.current()?;
        entry.repos.as_ref()?.get(entry.selected)
    }

    /// No username entered: no fetch is issued, nothing is shown
    pub fn is_disabled(&self) -> bool {
        self.username.is_empty()
    }

    /// A fetch for the current username is in flight (including
    /// revalidation of already-cached data)
    pub fn is_fetching(&self) -> bool {
        matches!(
            self.current().map(|e| &e.loading),
            Some(LoadingState::Loading)
        )
    }

    /// First fetch for the current username, no cached data yet
    pub fn is_loading(&self) -> bool {
        self.is_fetching() && self.current().map_or(true, |e| e.repos.is_none())
    }

    /// Error message of the most recent attempt for the current username
    pub fn error(&self) -> Option<&str> {
        match self.current().map(|e| &e.loading) {
            Some(LoadingState::Error(message)) => Some(message),
            _ => None,
        }
    }

    /// Repositories of the current username, once a fetch succeeded
    pub fn repos(&self) -> Option<&[Repository]> {
        self.current()?.repos.as_deref()
    }
}

/// Favorites list plus the lifecycle of in-flight favorite calls
///
/// The list is append-only within a session, unique by repository id, and
/// lost when the application exits.
#[derive(Debug, Clone, Default)]
pub struct FavoritesState {
    /// Favorited repositories in append order
    pub repos: Vec<Repository>,
    /// Repository ids with an in-flight recorder call
    pub pending: HashSet<u64>,
    /// Message of the most recent failed recorder call
    pub last_error: Option<String>,
}

impl FavoritesState {
    pub fn contains(&self, id: u64) -> bool {
        self.repos.iter().any(|repo| repo.id == id)
    }

    pub fn is_pending(&self, id: u64) -> bool {
        self.pending.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(id: u64, name: &str) -> Repository {
        Repository {
            id,
            name: name.to_string(),
            description: None,
            stargazers_count: 0,
            html_url: format!("https://github.com/{}/{}", name, name),
        }
    }

    #[test]
    fn test_default_seeds_username_and_fetch() {
        let mut query = QueryState::default();
        assert_eq!(query.username, SEED_USERNAME);
        assert!(query.is_loading());

        let fetch = query.due_fetch();
        match fetch {
            Some(crate::actions::QueryAction::Fetch {
                username,
                generation,
            }) => {
                assert_eq!(username, SEED_USERNAME);
                assert_eq!(generation, 1);
            }
            other => panic!("expected a fetch, got {:?}", other),
        }

        // The same generation is never handed out twice
        assert!(query.due_fetch().is_none());
    }

    #[test]
    fn test_empty_username_is_disabled() {
        let mut query = QueryState::default();
        query.edit_username(String::new());

        assert!(query.is_disabled());
        assert!(!query.is_fetching());
        assert!(!query.is_loading());
        assert!(query.error().is_none());
        assert!(query.repos().is_none());
        // No fetch is issued for an empty username
        assert!(query.due_fetch().is_none());
    }

    #[test]
    fn test_loading_vs_fetching_with_cached_data() {
        let mut query = QueryState::default();
        let entry = query.current_mut().unwrap();
        entry.repos = Some(vec![repo(1, "query")]);
        entry.loading = LoadingState::Loading;

        // Cached data exists, so this is a revalidation, not a first load
        assert!(query.is_fetching());
        assert!(!query.is_loading());
    }

    #[test]
    fn test_every_edit_mints_a_generation() {
        let mut query = QueryState::default();
        let first = query.generation;
        query.edit_username("tanstac".to_string());
        query.edit_username("tanstack".to_string());
        assert_eq!(query.generation, first + 2);

        // Only the latest generation is dispatched
        match query.due_fetch() {
            Some(crate::actions::QueryAction::Fetch { generation, .. }) => {
                assert_eq!(generation, first + 2)
            }
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_favorites_contains_and_pending() {
        let mut favorites = FavoritesState::default();
        favorites.repos.push(repo(1, "query"));
        favorites.pending.insert(2);

        assert!(favorites.contains(1));
        assert!(!favorites.contains(2));
        assert!(favorites.is_pending(2));
        assert!(!favorites.is_pending(1));
    }
}
