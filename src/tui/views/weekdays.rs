use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use crate::model::CommitterCategory;
use crate::report::RegionReport;
use crate::tui::draw::committer_color;

/// Render commits per weekday, one Scraper and one Others bar per day.
pub fn draw_weekday_chart(f: &mut Frame, area: Rect, report: &RegionReport) {
    let mut chart = BarChart::default()
        .block(
            Block::default()
                .title("Commits per weekday (green: Scraper, blue: Others)")
                .borders(Borders::ALL),
        )
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2)
        .value_style(Style::default().fg(Color::Black).add_modifier(Modifier::BOLD));

    for row in &report.histogram {
        let short: String = row.weekday.chars().take(3).collect();
        let bars = [
            Bar::default()
                .value(row.scraper as u64)
                .style(Style::default().fg(committer_color(CommitterCategory::Scraper))),
            Bar::default()
                .value(row.other as u64)
                .style(Style::default().fg(committer_color(CommitterCategory::Other))),
        ];
        chart = chart.data(BarGroup::default().label(Line::from(short)).bars(&bars));
    }

    f.render_widget(chart, area);
}
