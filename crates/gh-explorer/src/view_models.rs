//! View models
//!
//! Separates presentation logic from state and rendering: all display
//! text and colors are pre-computed here so the views only place widgets.

use ratatui::style::Color;

use crate::state::AppState;

/// What the main content area shows, by fetch lifecycle
#[derive(Debug, Clone)]
pub enum MainContentViewModel {
    /// Empty username: the query is disabled
    Hint(EmptyStateViewModel),
    /// First load for the current username, nothing cached yet
    Loading(EmptyStateViewModel),
    /// The most recent fetch failed and nothing is cached
    Error(EmptyStateViewModel),
    /// Repository table (possibly revalidating in the background)
    Table(RepoTableViewModel),
}

/// Centered message replacing the repository table
#[derive(Debug, Clone)]
pub struct EmptyStateViewModel {
    pub message: String,
    pub color: Color,
}

/// View model for the repository table
#[derive(Debug, Clone)]
pub struct RepoTableViewModel {
    /// Block title: " Repositories of <username> "
    pub title: String,
    /// Right-aligned status: revalidation notice, error, or last update
    pub status_text: String,
    pub status_color: Color,
    /// Pre-computed rows ready to display
    pub rows: Vec<RepoRowViewModel>,
    /// Current cursor position
    pub selected_index: usize,
}

/// View model for a single repository row
#[derive(Debug, Clone)]
pub struct RepoRowViewModel {
    pub name: String,
    pub stars: String,
    pub description: String,
    /// Favorite cell: "Adding..." while pending, "★" once favorited
    pub favorite: String,
    pub favorite_color: Color,

    pub fg_color: Color,
    pub bg_color: Color,
}

/// Determine what the main content area shows
pub fn determine_main_content(state: &AppState) -> MainContentViewModel {
    let theme = &state.theme;
    let query = &state.query;

    if query.is_disabled() {
        return MainContentViewModel::Hint(EmptyStateViewModel {
            message: "Enter a GitHub username to see their latest repositories.".to_string(),
            color: theme.text_muted,
        });
    }

    if query.repos().is_some() {
        return MainContentViewModel::Table(RepoTableViewModel::from_state(state));
    }

    if let Some(error) = query.error() {
        return MainContentViewModel::Error(EmptyStateViewModel {
            message: format!("An error occurred: {}", error),
            color: theme.status_error,
        });
    }

    MainContentViewModel::Loading(EmptyStateViewModel {
        message: "Loading data...".to_string(),
        color: theme.text_secondary,
    })
}

impl RepoTableViewModel {
    /// Transform state into a display-ready view model
    ///
    /// Only valid once data for the current username exists.
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let query = &state.query;

        let title = format!(" Repositories of {} ", query.username);

        let (status_text, status_color) = if query.is_fetching() {
            (
                "Looking for repositories... ".to_string(),
                theme.status_info,
            )
        } else if let Some(error) = query.error() {
            (format!("An error occurred: {} ", error), theme.status_error)
        } else {
            let updated = query
                .current()
                .and_then(|entry| entry.last_updated)
                .map(|ts| format!("Updated {} ", ts.format("%H:%M:%S")))
                .unwrap_or_default();
            (updated, theme.text_muted)
        };

        let repos = query.repos().unwrap_or_default();
        let rows = repos
            .iter()
            .enumerate()
            .map(|(index, repo)| {
                let favorited = state.favorites.contains(repo.id);
                let pending = state.favorites.is_pending(repo.id);

                let (favorite, favorite_color) = if pending {
                    ("Adding...".to_string(), theme.text_muted)
                } else if favorited {
                    ("★".to_string(), theme.status_warning)
                } else {
                    ("Favorite".to_string(), theme.accent_primary)
                };

                let bg_color = match index % 2 {
                    0 => theme.table_row_bg_normal,
                    _ => theme.table_row_bg_alt,
                };

                RepoRowViewModel {
                    name: repo.name.clone(),
                    stars: repo.stargazers_count.to_string(),
                    description: repo.description_or_placeholder().to_string(),
                    favorite,
                    favorite_color,
                    fg_color: theme.table_row_fg,
                    bg_color,
                }
            })
            .collect();

        Self {
            title,
            status_text,
            status_color,
            rows,
            selected_index: query.current().map(|entry| entry.selected).unwrap_or(0),
        }
    }
}

/// View model for the favorites sidebar
#[derive(Debug, Clone)]
pub struct FavoritesViewModel {
    /// One line per favorite, in append order
    pub lines: Vec<String>,
    /// Shown instead of the list while it is empty
    pub placeholder: Option<String>,
}

impl FavoritesViewModel {
    pub fn from_state(state: &AppState) -> Self {
        if state.favorites.repos.is_empty() {
            return Self {
                lines: Vec::new(),
                placeholder: Some("Your favorite repos will appear here.".to_string()),
            };
        }

        Self {
            lines: state
                .favorites
                .repos
                .iter()
                .map(|repo| format!("★ {}", repo.name))
                .collect(),
            placeholder: None,
        }
    }
}
