use crate::actions::{Action, GlobalAction};
use crate::reducers::{favorites_reducer, query_reducer};
use crate::state::AppState;

/// Root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    // Handle global actions first
    if let Action::Global(GlobalAction::Quit) = action {
        state.running = false;
        return state;
    }

    // Run sub-reducers for domain-specific actions
    state.query = query_reducer::reduce(state.query, action);
    state.favorites = favorites_reducer::reduce(state.favorites, action);

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_stops_the_application() {
        let state = AppState::default();
        assert!(state.running);

        let state = reduce(state, &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }
}
