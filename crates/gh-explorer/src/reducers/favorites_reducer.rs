//! Favorites Reducer
//!
//! Reconciles recorder results into the favorites list. The list is
//! unique by repository id: recording the same repository twice appends
//! it exactly once.

use crate::actions::{Action, FavoriteAction};
use crate::state::FavoritesState;

/// Reduce favorites state based on actions
pub fn reduce(mut state: FavoritesState, action: &Action) -> FavoritesState {
    match action {
        Action::Favorite(FavoriteAction::Started { repo }) => {
            state.pending.insert(repo.id);
            log::debug!("Favorite call started for {}", repo.name);
        }

        Action::Favorite(FavoriteAction::Recorded { repo }) => {
            state.pending.remove(&repo.id);
            // Append only if it's not already there
            if !state.contains(repo.id) {
                log::info!("Added {} to favorites", repo.name);
                state.repos.push(repo.clone());
            }
        }

        Action::Favorite(FavoriteAction::Failed { id, error }) => {
            state.pending.remove(id);
            state.last_error = Some(error.clone());
            log::error!("Favorite call failed for repository {}: {}", id, error);
        }

        // The request itself is resolved by the favorites middleware
        Action::Favorite(FavoriteAction::Request) => {}

        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_client::Repository;

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
    fn test_started_marks_pending() {
        let state = FavoritesState::default();
        let state = reduce(
            state,
            &Action::Favorite(FavoriteAction::Started { repo: repo(1, "query") }),
        );

        assert!(state.is_pending(1));
        assert!(state.repos.is_empty());
    }

    #[test]
    fn test_recorded_appends_and_clears_pending() {
        let state = FavoritesState::default();
        let state = reduce(
            state,
            &Action::Favorite(FavoriteAction::Started { repo: repo(1, "query") }),
        );
        let state = reduce(
            state,
            &Action::Favorite(FavoriteAction::Recorded { repo: repo(1, "query") }),
        );

        assert!(!state.is_pending(1));
        assert_eq!(state.repos.len(), 1);
        assert_eq!(state.repos[0].name, "query");
    }

    #[test]
    fn test_recording_twice_appends_once() {
        let mut state = FavoritesState::default();
        for _ in 0..2 {
            state = reduce(
                state,
                &Action::Favorite(FavoriteAction::Recorded { repo: repo(1, "query") }),
            );
        }

        assert_eq!(state.repos.len(), 1);
    }

    #[test]
    fn test_append_order_is_preserved() {
        let mut state = FavoritesState::default();
        for (id, name) in [(2, "router"), (1, "query"), (3, "table")] {
            state = reduce(
                state,
                &Action::Favorite(FavoriteAction::Recorded { repo: repo(id, name) }),
            );
        }

        let names: Vec<&str> = state.repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["router", "query", "table"]);
    }

    #[test]
    fn test_failed_leaves_the_list_unchanged() {
        let state = FavoritesState::default();
        let state = reduce(
            state,
            &Action::Favorite(FavoriteAction::Started { repo: repo(1, "query") }),
        );
        let state = reduce(
            state,
            &Action::Favorite(FavoriteAction::Failed {
                id: 1,
                error: "backend unavailable".to_string(),
            }),
        );

        assert!(state.repos.is_empty());
        assert!(!state.is_pending(1));
        assert_eq!(state.last_error.as_deref(), Some("backend unavailable"));
    }
}
