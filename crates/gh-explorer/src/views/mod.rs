//! Views - ratatui rendering over the view models
//!
//! Layout:
//!
//! ```text
//! ┌ GitHub Explorer ────────────────────────────────┐
//! │ username input                                   │
//! ├──────────────────────────────┬──────────────────┤
//! │ repository table             │ favorites        │
//! ├──────────────────────────────┴──────────────────┤
//! │ help line                                        │
//! └──────────────────────────────────────────────────┘
//! ```

use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

pub mod favorites_view;
pub mod repo_table_view;
pub mod username_input_view;

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username input
            Constraint::Min(0),    // Content area
            Constraint::Length(1), // Help line
        ])
        .split(area);

    username_input_view::render(state, chunks[0], f);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(68), // Repository table
            Constraint::Percentage(32), // Favorites sidebar
        ])
        .split(chunks[1]);

    repo_table_view::render(state, columns[0], f);
    favorites_view::render(state, columns[1], f);

    render_help_line(state, chunks[2], f);
}

fn render_help_line(state: &AppState, area: Rect, f: &mut Frame) {
    let help = Paragraph::new(" ↑/↓ select · Enter favorite · Ctrl+O open · Esc clear · Ctrl+C quit")
        .style(state.theme.muted());
    f.render_widget(help, area);
}
