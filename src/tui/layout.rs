use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::ops::Range;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Rows of a `total`-row table that fit in `height` lines starting near `offset`.
pub fn visible_rows(total: usize, offset: usize, height: usize) -> Range<usize> {
    // borders and header
    let view_height = height.saturating_sub(3);
    if total == 0 || view_height == 0 {
        return 0..0;
    }
    let start = offset.min(total.saturating_sub(view_height));
    let end = (start + view_height).min(total);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_rows_clamp_to_table() {
        assert_eq!(visible_rows(0, 0, 20), 0..0);
        assert_eq!(visible_rows(5, 0, 20), 0..5);
        assert_eq!(visible_rows(30, 0, 13), 0..10);
        assert_eq!(visible_rows(30, 25, 13), 20..30);
        assert_eq!(visible_rows(30, 4, 13), 4..14);
    }
}
