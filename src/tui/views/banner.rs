use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::output::banner_text;
use crate::tui::draw::status_style;
use crate::tui::state::TuiState;

/// Render the next-update banner, or the last error.
pub fn draw_banner(f: &mut Frame, area: Rect, state: &TuiState) {
    let (text, style) = match (&state.error, &state.report) {
        (Some(err), _) => (format!("Error: {err}"), Style::default().fg(Color::Red)),
        (None, Some(report)) => (
            banner_text(report.prediction.as_ref()),
            status_style(report.prediction.as_ref().map(|p| p.status)),
        ),
        (None, None) => ("Loading data...".to_string(), Style::default().fg(Color::Gray)),
    };

    let title = match &state.report {
        Some(report) => format!(
            "Weekday of commits over last {} weeks for {}",
            report.window.weeks, report.region
        ),
        None => "Next commit".to_string(),
    };

    let banner = Paragraph::new(text)
        .style(style)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(banner, area);
}
