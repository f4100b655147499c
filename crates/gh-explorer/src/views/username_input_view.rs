//! Username input view
//!
//! The input is always focused: plain characters edit it directly.

use crate::state::AppState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let block = Block::bordered()
        .border_style(theme.border())
        .title(" GitHub Explorer ");

    let line = if state.query.username.is_empty() {
        Line::from(Span::styled("e.g., facebook", theme.muted()))
    } else {
        Line::from(vec![
            Span::styled(
                state.query.username.clone(),
                Style::default().fg(theme.text_primary),
            ),
            Span::styled("▏", Style::default().fg(theme.accent_primary)),
        ])
    };

    let paragraph = Paragraph::new(line).block(block);
    f.render_widget(paragraph, area);
}
