use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod dispatcher;
mod logger;
mod middleware;
mod recorder;
mod reducers;
mod state;
mod theme;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use background::SharedState;
use middleware::{
    favorites::FavoritesMiddleware, github::GitHubMiddleware, keyboard::KeyboardMiddleware,
    logging::LoggingMiddleware, Middleware,
};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init();

    log::info!("Starting gh-explorer (log: {})", log_file.display());

    // Build the middleware chain before touching the terminal, so a failed
    // client setup surfaces as a plain error message.
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(GitHubMiddleware::new()?),
        Box::new(FavoritesMiddleware::new()?),
    ];

    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let shared: SharedState = Arc::new(RwLock::new(AppState::default()));

    let worker = background::spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared),
        middleware,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, shared, action_tx, result_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }
    let _ = worker.join();

    log::info!("Exiting gh-explorer");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shared: SharedState,
    action_tx: Sender<Action>,
    result_rx: Receiver<Action>,
) -> io::Result<()> {
    let mut state = AppState::default();

    loop {
        // Apply actions forwarded by the background worker
        while let Ok(action) = result_rx.try_recv() {
            state = reducers::app_reducer::reduce(state, &action);
        }

        // Hand freshly minted fetch generations to the middleware chain
        if let Some(fetch) = state.query.due_fetch() {
            if action_tx.send(Action::Query(fetch)).is_err() {
                break;
            }
        }

        // Publish a snapshot for middleware running on the worker thread
        match shared.write() {
            Ok(mut guard) => *guard = state.clone(),
            Err(e) => log::error!("Failed to publish state snapshot: {}", e),
        }

        // Render
        terminal.draw(|frame| {
            views::render(&state, frame.area(), frame);
        })?;

        // Check if we should quit
        if !state.running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press
                    && action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .is_err()
                {
                    break;
                }
            }
        }
    }

    Ok(())
}
