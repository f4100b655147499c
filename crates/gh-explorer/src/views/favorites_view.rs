//! Favorites sidebar view

use crate::state::AppState;
use crate::view_models::FavoritesViewModel;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = FavoritesViewModel::from_state(state);

    let block = Block::bordered()
        .border_style(theme.border())
        .title(" Favorites ");

    if let Some(placeholder) = vm.placeholder {
        let paragraph = Paragraph::new(placeholder)
            .block(block)
            .style(theme.muted())
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = vm
        .lines
        .iter()
        .map(|line| ListItem::new(line.clone()))
        .collect();
    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(theme.text_secondary));

    f.render_widget(list, area);
}
