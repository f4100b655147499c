//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering, reducing, and user input only
//! - Background thread runs the middleware chain (API calls, process
//!   spawning) against a shared state snapshot
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via the Dispatcher re-enter the chain,
//! so a key press can become a `Favorite::Request`, which becomes a
//! `Favorite::Started` plus an eventual `Favorite::Recorded`.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state that the background worker reads (the main thread writes
/// a fresh snapshot after every reduce)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from the main thread and from the
///   Dispatcher (re-entry)
/// - `action_tx`: used to create the Dispatcher for middleware
/// - `result_tx`: sends non-consumed actions to the main thread's reducers
/// - `state`: shared state snapshot for middleware to read
/// - `middleware`: the middleware chain
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    // Dispatcher that re-enters actions through the middleware chain
    let dispatcher = Dispatcher::new(action_tx);

    while let Ok(action) = action_rx.recv() {
        // Check for shutdown signal
        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            if result_tx.send(action).is_err() {
                log::error!("Failed to send quit action to main thread");
            }
            break;
        }

        // Get current state snapshot for middleware
        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        // Run action through middleware chain
        let mut should_forward = true;
        for mw in &mut middleware {
            let continue_chain = mw.handle(&action, &current_state, &dispatcher);
            if !continue_chain {
                should_forward = false;
                break;
            }
        }

        // If no middleware consumed the action, forward to the reducer
        if should_forward && result_tx.send(action).is_err() {
            log::error!("Result channel disconnected, shutting down");
            break;
        }
    }

    log::info!("Background worker stopped");
}
