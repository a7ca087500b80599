use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::model::Region;
use crate::tui::state::TuiState;

/// Render the selectable list of region codes.
pub fn draw_region_list(f: &mut Frame, area: Rect, state: &TuiState) {
    let items: Vec<ListItem> = Region::all()
        .map(|region| ListItem::new(region.as_str()))
        .collect();

    let list = List::new(items)
        .block(Block::default().title("Region").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}
