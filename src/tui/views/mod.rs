use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Cell;

mod banner;
mod help;
mod observations;
mod regions;
mod weekdays;

pub use banner::draw_banner;
pub use help::draw_help_overlay;
pub use observations::draw_observation_table;
pub use regions::draw_region_list;
pub use weekdays::draw_weekday_chart;

/// Convenience helper to build a styled table header cell.
pub(crate) fn header_cell(text: &str, color: Color) -> Cell<'static> {
    Cell::from(text.to_string()).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}
