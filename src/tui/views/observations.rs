use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use super::header_cell;
use crate::report::RegionReport;
use crate::tui::draw::{committer_color, get_intensity_color};
use crate::tui::layout::visible_rows;
use crate::tui::state::TuiState;

/// Render the aggregated commit table for the selected region.
pub fn draw_observation_table(f: &mut Frame, area: Rect, report: &RegionReport, state: &TuiState) {
    let total = report.observations.len();
    let range = visible_rows(total, state.table_offset, area.height as usize);
    let max_gap = report
        .observations
        .iter()
        .map(|row| row.gap_days.max(0) as usize)
        .max()
        .unwrap_or(0);

    let rows: Vec<Row> = report.observations[range.clone()]
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.date.to_string()),
                Cell::from(row.committer.label())
                    .style(Style::default().fg(committer_color(row.committer))),
                Cell::from(format!("{:>5}", row.count)),
                Cell::from(format!("{:>4}d", row.gap_days))
                    .style(get_intensity_color(row.gap_days.max(0) as usize, max_gap)),
                Cell::from(row.weekday.clone()),
            ])
        })
        .collect();

    let title = if total == 0 {
        format!("Commit data of {} (none since {})", report.region, report.window.start)
    } else {
        format!(
            "Commit data of {} ({}-{} of {}, PgUp/PgDn to scroll)",
            report.region,
            range.start + 1,
            range.end,
            total
        )
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Min(10),
        ],
    )
    .header(Row::new(vec![
        header_cell("Date", Color::Cyan),
        header_cell("Committer", Color::Cyan),
        header_cell("Count", Color::Cyan),
        header_cell("Gap", Color::Cyan),
        header_cell("Weekday", Color::Cyan),
    ]))
    .block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(table, area);
}
