use std::io;
use std::time::Duration;

use crossterm::event::{poll, read, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use tracing::warn;

use super::events::{handle_key_event, Action};
use super::state::TuiState;
use super::views::{
    draw_banner, draw_help_overlay, draw_observation_table, draw_region_list, draw_weekday_chart,
};
use crate::git::CommitSource;
use crate::model::Region;
use crate::predict::SystemClock;
use crate::report::Analyzer;

pub fn run<S: CommitSource>(analyzer: &mut Analyzer<S>, initial: Option<Region>) -> io::Result<()> {
    let mut state = TuiState::default();
    if let Some(region) = initial {
        state.selected = region.index();
    }
    load(analyzer, &mut state, false);

    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, analyzer, &mut state);

    terminal.clear()?;
    disable_raw_mode()?;
    result
}

fn event_loop<B: Backend, S: CommitSource>(
    terminal: &mut Terminal<B>,
    analyzer: &mut Analyzer<S>,
    state: &mut TuiState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        if !poll(Duration::from_millis(200))? {
            continue;
        }
        if let Event::Key(key_event) = read()? {
            match handle_key_event(key_event, state) {
                Action::Quit => break,
                Action::Load => load(analyzer, state, false),
                Action::Refresh => {
                    load(analyzer, state, true);
                    if state.error.is_none() {
                        state.set_status("History re-read");
                    }
                }
                Action::None => {}
            }
        }
    }
    Ok(())
}

/// Compute the selected region's report; failures are shown, not fatal.
fn load<S: CommitSource>(analyzer: &mut Analyzer<S>, state: &mut TuiState, refresh: bool) {
    let Some(region) = state.selected_region() else {
        return;
    };

    let outcome = if refresh {
        analyzer.refresh(region, &SystemClock)
    } else {
        analyzer.report(region, &SystemClock)
    };

    state.table_offset = 0;
    match outcome {
        Ok(report) => {
            state.report = Some(report);
            state.error = None;
        }
        Err(e) => {
            warn!("Failed to load report for {}: {}", region, e);
            state.report = None;
            state.error = Some(e.to_string());
        }
    }
}

fn render(f: &mut Frame, state: &TuiState) {
    let size = f.size();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(size);

    draw_region_list(f, columns[0], state);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(55),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(columns[1]);

    draw_banner(f, rows[0], state);
    if let Some(report) = &state.report {
        draw_weekday_chart(f, rows[1], report);
        draw_observation_table(f, rows[2], report, state);
    }

    let footer = state
        .status()
        .unwrap_or("j/k select region · r refresh · h help · q quit");
    f.render_widget(
        Paragraph::new(footer).style(Style::default().fg(Color::Gray)),
        rows[3],
    );

    if state.show_help {
        draw_help_overlay(f, size);
    }
}
