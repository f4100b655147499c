//! Actions module
//!
//! All state changes in the application are expressed as actions, tagged by
//! the domain they affect. Keyboard input arrives as a `Global` action and
//! is translated by the keyboard middleware into the domain actions below.

use gh_client::Repository;
use ratatui::crossterm::event::KeyEvent;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions
    Global(GlobalAction),
    /// Username input edits
    Username(UsernameAction),
    /// Repository fetch lifecycle
    Query(QueryAction),
    /// Repository list interactions
    Repos(RepoListAction),
    /// Favorite mutation lifecycle
    Favorite(FavoriteAction),
}

/// Global actions (not tied to any domain)
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key press from the terminal (translated by keyboard middleware)
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
}

/// Edits to the username input field
#[derive(Debug, Clone)]
pub enum UsernameAction {
    /// Character typed into the input field
    Char(char),
    /// Backspace pressed in the input field
    Backspace,
    /// Clear the entire field (Ctrl+U / Esc)
    ClearLine,
}

impl UsernameAction {
    /// Apply this edit to the current input value
    pub fn apply(&self, current: &str) -> String {
        match self {
            Self::Char(c) => {
                let mut next = current.to_string();
                next.push(*c);
                next
            }
            Self::Backspace => {
                let mut next = current.to_string();
                next.pop();
                next
            }
            Self::ClearLine => String::new(),
        }
    }
}

/// Repository fetch lifecycle actions
///
/// `Fetch` is consumed by the GitHub middleware; `Loaded`/`Failed` are
/// dispatched back by it when the API call resolves. All three carry the
/// generation token minted when the fetch was requested, so resolutions
/// of superseded fetches can be discarded.
#[derive(Debug, Clone)]
pub enum QueryAction {
    /// Fetch the given user's repositories
    Fetch { username: String, generation: u64 },
    /// Repositories loaded successfully
    Loaded {
        username: String,
        generation: u64,
        repos: Vec<Repository>,
    },
    /// The fetch did not complete successfully
    Failed {
        username: String,
        generation: u64,
        error: String,
    },
}

/// Repository list interactions
#[derive(Debug, Clone)]
pub enum RepoListAction {
    /// Move the selection down (with wrapping)
    NavigateNext,
    /// Move the selection up (with wrapping)
    NavigatePrevious,
    /// Open the selected repository's page in the system browser
    OpenInBrowser,
}

/// Favorite mutation lifecycle actions
#[derive(Debug, Clone)]
pub enum FavoriteAction {
    /// Favorite the selected repository (resolved by favorites middleware)
    Request,
    /// The recorder call for this repository is in flight
    Started { repo: Repository },
    /// The recorder call resolved successfully
    Recorded { repo: Repository },
    /// The recorder call failed (unreachable with the simulated recorder)
    Failed { id: u64, error: String },
}
