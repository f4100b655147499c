use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod favorites;
pub mod github;
pub mod keyboard;
pub mod logging;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread, so it can perform blocking
/// operations (API calls, process spawning) without affecting the UI
/// render loop.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter the chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
