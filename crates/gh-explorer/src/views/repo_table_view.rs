//! Repository table view
//!
//! Renders the main content area: the fetched repositories, or a
//! centered lifecycle message while there is nothing to list.

use crate::state::AppState;
use crate::view_models::{
    determine_main_content, EmptyStateViewModel, MainContentViewModel, RepoTableViewModel,
};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    match determine_main_content(state) {
        MainContentViewModel::Hint(vm)
        | MainContentViewModel::Loading(vm)
        | MainContentViewModel::Error(vm) => render_empty_state(state, &vm, area, f),
        MainContentViewModel::Table(vm) => render_repo_table(state, &vm, area, f),
    }
}

/// Render a centered lifecycle message in place of the table
fn render_empty_state(state: &AppState, vm: &EmptyStateViewModel, area: Rect, f: &mut Frame) {
    let block = Block::bordered()
        .border_style(state.theme.border())
        .title(" Repositories ");

    let paragraph = Paragraph::new(vm.message.clone())
        .block(block)
        .style(Style::default().fg(vm.color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

/// Render the repository table for the current username
fn render_repo_table(state: &AppState, vm: &RepoTableViewModel, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let status_line = Line::from(vm.status_text.clone())
        .style(Style::default().fg(vm.status_color))
        .right_aligned();

    let block = Block::bordered()
        .border_style(theme.border())
        .title(vm.title.clone())
        .title(status_line);

    let header_cells = ["Name", "Stars", "Description", "Favorite"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header()));
    let header = Row::new(header_cells).style(theme.table_header()).height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.name.clone()).style(Style::default().fg(theme.accent_primary)),
                Cell::from(row.stars.clone()),
                Cell::from(row.description.clone()),
                Cell::from(row.favorite.clone()).style(Style::default().fg(row.favorite_color)),
            ])
            .style(Style::default().fg(row.fg_color).bg(row.bg_color))
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Percentage(24), // Name
        Constraint::Length(8),      // Stars
        Constraint::Min(20),        // Description
        Constraint::Length(10),     // Favorite
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.table_selected())
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(Some(vm.selected_index));

    f.render_stateful_widget(table, area, &mut table_state);
}
