//! Reducers - pure functions that produce new state from state + action
//!
//! All state transitions happen here, on the main thread. Side effects
//! live in the middleware chain.

pub mod app_reducer;
pub mod favorites_reducer;
pub mod query_reducer;
