//! Query Reducer
//!
//! Handles username edits, repository fetch resolutions, and list
//! navigation. Fetch resolutions are accepted only when their generation
//! token matches the latest minted one: a fetch that was superseded while
//! in flight resolves into the void instead of overwriting newer state.

use chrono::Local;

use crate::actions::{Action, QueryAction, RepoListAction, UsernameAction};
use crate::state::{LoadingState, QueryState};

/// Reduce query state based on actions
pub fn reduce(mut state: QueryState, action: &Action) -> QueryState {
    match action {
        Action::Username(edit) => {
            let next = edit.apply(&state.username);
            log::debug!("Username edited: {:?} -> {:?}", state.username, next);
            state.edit_username(next);
        }

        Action::Query(QueryAction::Loaded {
            username,
            generation,
            repos,
        }) => {
            if *generation != state.generation {
                log::debug!(
                    "Discarding stale result for {} (generation {} superseded by {})",
                    username,
                    generation,
                    state.generation
                );
                return state;
            }
            let entry = state.entries.entry(username.clone()).or_default();
            entry.repos = Some(repos.clone());
            entry.loading = LoadingState::Loaded;
            entry.selected = 0;
            entry.last_updated = Some(Local::now());
            log::info!("Loaded {} repositories for {}", repos.len(), username);
        }

        Action::Query(QueryAction::Failed {
            username,
            generation,
            error,
        }) => {
            if *generation != state.generation {
                log::debug!(
                    "Discarding stale error for {} (generation {} superseded by {})",
                    username,
                    generation,
                    state.generation
                );
                return state;
            }
            let entry = state.entries.entry(username.clone()).or_default();
            entry.loading = LoadingState::Error(error.clone());
            log::error!("Failed to load repositories for {}: {}", username, error);
        }

        // The fetch itself is consumed by the GitHub middleware
        Action::Query(QueryAction::Fetch { .. }) => {}

        Action::Repos(RepoListAction::NavigateNext) => {
            if let Some(entry) = state.current_mut() {
                if let Some(repos) = &entry.repos {
                    if !repos.is_empty() {
                        entry.selected = (entry.selected + 1) % repos.len();
                    }
                }
            }
        }

        Action::Repos(RepoListAction::NavigatePrevious) => {
            if let Some(entry) = state.current_mut() {
                if let Some(repos) = &entry.repos {
                    if !repos.is_empty() {
                        entry.selected = if entry.selected == 0 {
                            repos.len() - 1
                        } else {
                            entry.selected - 1
                        };
                    }
                }
            }
        }

        // Handled by middleware
        Action::Repos(RepoListAction::OpenInBrowser) => {}

        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SEED_USERNAME;
    use gh_client::Repository;

    fn repo(id: u64, name: &str) -> Repository {
        Repository {
            id,
            name: name.to_string(),
            description: None,
            stargazers_count: 1,
            html_url: format!("https://github.com/{}/{}", name, name),
        }
    }

    fn loaded(username: &str, generation: u64, repos: Vec<Repository>) -> Action {
        Action::Query(QueryAction::Loaded {
            username: username.to_string(),
            generation,
            repos,
        })
    }

    #[test]
    fn test_username_edit_marks_entry_loading() {
        let state = QueryState::default();
        let before = state.generation;

        let state = reduce(state, &Action::Username(UsernameAction::Char('x')));
        assert_eq!(state.username, format!("{}x", SEED_USERNAME));
        assert_eq!(state.generation, before + 1);
        assert!(state.is_loading());
    }

    #[test]
    fn test_clearing_username_disables_the_query() {
        let state = QueryState::default();
        let before = state.generation;

        let state = reduce(state, &Action::Username(UsernameAction::ClearLine));
        assert!(state.is_disabled());
        assert!(!state.is_fetching());
        assert!(state.error().is_none());
        assert!(state.repos().is_none());
        // No generation is minted for an empty username
        assert_eq!(state.generation, before);
    }

    #[test]
    fn test_loaded_resolution_applies_data() {
        let state = QueryState::default();
        let generation = state.generation;

        let state = reduce(
            state,
            &loaded(SEED_USERNAME, generation, vec![repo(1, "query")]),
        );

        assert!(!state.is_fetching());
        assert_eq!(state.repos().unwrap().len(), 1);
        let entry = state.current().unwrap();
        assert_eq!(entry.loading, LoadingState::Loaded);
        assert_eq!(entry.selected, 0);
        assert!(entry.last_updated.is_some());
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        // Fetch for the seed username is in flight, then the user types on:
        // the in-flight resolution must not overwrite the newer state.
        let state = QueryState::default();
        let stale_generation = state.generation;

        let state = reduce(state, &Action::Username(UsernameAction::Char('x')));
        let state = reduce(
            state,
            &loaded(SEED_USERNAME, stale_generation, vec![repo(1, "stale")]),
        );

        // The newer username's entry is still loading and the stale data
        // was not applied anywhere.
        assert!(state.is_loading());
        assert!(state.entries[SEED_USERNAME].repos.is_none());
    }

    #[test]
    fn test_stale_resolution_loses_regardless_of_real_time_order() {
        // Two fetches for different usernames resolve out of order: the
        // eventual state reflects the latest-dispatched one.
        let state = QueryState::default();
        let first_generation = state.generation;

        let state = reduce(state, &Action::Username(UsernameAction::Char('x')));
        let current = state.username.clone();
        let current_generation = state.generation;

        // Latest fetch resolves first...
        let state = reduce(
            state,
            &loaded(&current, current_generation, vec![repo(2, "fresh")]),
        );
        // ...then the superseded one arrives late.
        let state = reduce(
            state,
            &loaded(SEED_USERNAME, first_generation, vec![repo(1, "stale")]),
        );

        assert_eq!(state.repos().unwrap()[0].name, "fresh");
        assert!(state.entries[SEED_USERNAME].repos.is_none());
    }

    #[test]
    fn test_failed_resolution_surfaces_the_message() {
        let state = QueryState::default();
        let generation = state.generation;

        let state = reduce(
            state,
            &Action::Query(QueryAction::Failed {
                username: SEED_USERNAME.to_string(),
                generation,
                error: "404 Not Found".to_string(),
            }),
        );

        assert_eq!(state.error(), Some("404 Not Found"));
        assert!(!state.is_fetching());
    }

    #[test]
    fn test_error_keeps_previously_loaded_data() {
        let state = QueryState::default();
        let generation = state.generation;
        let state = reduce(
            state,
            &loaded(SEED_USERNAME, generation, vec![repo(1, "query")]),
        );

        // Revalidation for the same username fails
        let state = reduce(state, &Action::Username(UsernameAction::Char('x')));
        let state = reduce(state, &Action::Username(UsernameAction::Backspace));
        let generation = state.generation;
        let state = reduce(
            state,
            &Action::Query(QueryAction::Failed {
                username: SEED_USERNAME.to_string(),
                generation,
                error: "rate limited".to_string(),
            }),
        );

        assert_eq!(state.error(), Some("rate limited"));
        assert!(state.repos().is_some());
    }

    #[test]
    fn test_zero_repositories_is_a_success() {
        let state = QueryState::default();
        let generation = state.generation;

        let state = reduce(state, &loaded(SEED_USERNAME, generation, vec![]));

        assert!(state.error().is_none());
        assert_eq!(state.repos().unwrap().len(), 0);
    }

    #[test]
    fn test_loaded_order_is_preserved() {
        let state = QueryState::default();
        let generation = state.generation;
        let repos = vec![repo(3, "third"), repo(1, "first"), repo(2, "second")];

        let state = reduce(state, &loaded(SEED_USERNAME, generation, repos.clone()));

        let names: Vec<&str> = state
            .repos()
            .unwrap()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["third", "first", "second"]);
    }

    #[test]
    fn test_navigation_wraps() {
        let state = QueryState::default();
        let generation = state.generation;
        let state = reduce(
            state,
            &loaded(SEED_USERNAME, generation, vec![repo(1, "a"), repo(2, "b")]),
        );

        let state = reduce(state, &Action::Repos(RepoListAction::NavigateNext));
        assert_eq!(state.current().unwrap().selected, 1);
        let state = reduce(state, &Action::Repos(RepoListAction::NavigateNext));
        assert_eq!(state.current().unwrap().selected, 0);
        let state = reduce(state, &Action::Repos(RepoListAction::NavigatePrevious));
        assert_eq!(state.current().unwrap().selected, 1);
    }

    #[test]
    fn test_navigation_without_data_is_a_noop() {
        let state = QueryState::default();
        let state = reduce(state, &Action::Repos(RepoListAction::NavigateNext));
        assert_eq!(state.current().unwrap().selected, 0);
    }
}
