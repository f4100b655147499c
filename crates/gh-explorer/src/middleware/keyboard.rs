//! KeyboardMiddleware - translates key presses into domain actions
//!
//! The username input is always focused, so plain characters and
//! backspace edit it directly. A small set of non-character keys drives
//! the repository list:
//!
//! - Up/Down move the selection
//! - Enter favorites the selected repository
//! - Ctrl+O opens the selected repository in the browser
//! - Esc / Ctrl+U clear the input
//! - Ctrl+C quits

use crate::actions::{Action, FavoriteAction, GlobalAction, RepoListAction, UsernameAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key event and dispatch the resulting action
    fn handle_key(&self, key: KeyEvent, dispatcher: &Dispatcher) -> bool {
        // Priority keys: always work regardless of input state
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    log::debug!("Ctrl+C - dispatching Quit");
                    dispatcher.dispatch(Action::Global(GlobalAction::Quit));
                }
                // Ctrl+U - Unix line kill
                KeyCode::Char('u') => {
                    dispatcher.dispatch(Action::Username(UsernameAction::ClearLine));
                }
                KeyCode::Char('o') => {
                    dispatcher.dispatch(Action::Repos(RepoListAction::OpenInBrowser));
                }
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                dispatcher.dispatch(Action::Username(UsernameAction::Char(c)));
            }
            KeyCode::Backspace => {
                dispatcher.dispatch(Action::Username(UsernameAction::Backspace));
            }
            KeyCode::Esc => {
                dispatcher.dispatch(Action::Username(UsernameAction::ClearLine));
            }
            KeyCode::Down => {
                dispatcher.dispatch(Action::Repos(RepoListAction::NavigateNext));
            }
            KeyCode::Up => {
                dispatcher.dispatch(Action::Repos(RepoListAction::NavigatePrevious));
            }
            KeyCode::Enter => {
                dispatcher.dispatch(Action::Favorite(FavoriteAction::Request));
            }
            _ => {}
        }

        // Key presses never reach the reducer directly
        false
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            return self.handle_key(*key, dispatcher);
        }

        // All other actions pass through
        true
    }
}
