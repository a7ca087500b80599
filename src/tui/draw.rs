use ratatui::style::{Color, Modifier, Style};

use crate::model::{CommitterCategory, PredictionStatus};

/// Chooses a style/color based on how large `value` is relative to `max`.
pub fn get_intensity_color(value: usize, max: usize) -> Style {
    if max == 0 {
        return Style::default().fg(Color::White);
    }

    let ratio = value as f64 / max as f64;
    if ratio > 0.8 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if ratio > 0.6 {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if ratio > 0.4 {
        Style::default().fg(Color::Green)
    } else if ratio > 0.2 {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Blue)
    }
}

pub fn committer_color(category: CommitterCategory) -> Color {
    match category {
        CommitterCategory::Scraper => Color::Green,
        CommitterCategory::Other => Color::Blue,
    }
}

/// Banner background: red when overdue, blue when upcoming.
pub fn status_style(status: Option<PredictionStatus>) -> Style {
    match status {
        Some(PredictionStatus::Overdue) => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        Some(PredictionStatus::Upcoming) => Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::Yellow),
    }
}
