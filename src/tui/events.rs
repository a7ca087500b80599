use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::state::TuiState;

/// What the run loop has to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Selection changed; compute the report (cache permitting).
    Load,
    /// Drop the cached extraction and recompute.
    Refresh,
}

/// Handle a keyboard event, mutating selection state.
pub fn handle_key_event(key_event: KeyEvent, state: &mut TuiState) -> Action {
    if key_event.kind != KeyEventKind::Press {
        return Action::None;
    }

    if state.show_help {
        if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1)) {
            state.show_help = false;
        }
        return Action::None;
    }

    let last = state.region_count().saturating_sub(1);
    let previous = state.selected;

    match key_event.code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('h') | KeyCode::F(1) => state.show_help = true,
        KeyCode::Char('r') => return Action::Refresh,
        KeyCode::Up | KeyCode::Char('k') => state.selected = state.selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => state.selected = (state.selected + 1).min(last),
        KeyCode::Char('g') | KeyCode::Home => state.selected = 0,
        KeyCode::Char('G') | KeyCode::End => state.selected = last,
        KeyCode::PageUp => state.table_offset = state.table_offset.saturating_sub(10),
        KeyCode::PageDown => {
            state.table_offset = (state.table_offset + 10)
                .min(state.observation_count().saturating_sub(1));
        }
        _ => {}
    }

    if state.selected != previous {
        Action::Load
    } else {
        Action::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn moving_selection_requests_load() {
        let mut state = TuiState::default();
        assert_eq!(handle_key_event(press(KeyCode::Down), &mut state), Action::Load);
        assert_eq!(state.selected, 1);
        assert_eq!(handle_key_event(press(KeyCode::Char('G')), &mut state), Action::Load);
        assert_eq!(state.selected, 25);
        assert_eq!(handle_key_event(press(KeyCode::Char('j')), &mut state), Action::None);
        assert_eq!(state.selected, 25);
    }

    #[test]
    fn top_of_list_stays_put() {
        let mut state = TuiState::default();
        assert_eq!(handle_key_event(press(KeyCode::Up), &mut state), Action::None);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut state = TuiState::default();
        handle_key_event(press(KeyCode::Char('h')), &mut state);
        assert!(state.show_help);
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut state), Action::None);
        handle_key_event(press(KeyCode::Esc), &mut state);
        assert!(!state.show_help);
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut state), Action::Quit);
    }

    #[test]
    fn refresh_key() {
        let mut state = TuiState::default();
        assert_eq!(handle_key_event(press(KeyCode::Char('r')), &mut state), Action::Refresh);
    }
}
