//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::MindfulError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the session.
    Toggle,
    /// Reset the session.
    Reset,
}

/// Handle terminal events, polling up to `timeout`.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<Option<Action>, MindfulError> {
    if !event::poll(timeout).map_err(|e| MindfulError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| MindfulError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    // Windows terminals deliver both press and release events.
    if key.kind == KeyEventKind::Release {
        return Ok(None);
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    // The settings panel is modal: while open it owns the keyboard.
    if app.show_settings {
        match key.code {
            KeyCode::Char('s') => app.settings.toggle_sound(),
            KeyCode::Char('t') => app.settings.cycle_theme(),
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => app.toggle_settings(),
            _ => {}
        }
        return Ok(None);
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

        // Session control
        KeyCode::Char(' ') => return Ok(Some(Action::Toggle)),
        KeyCode::Char('r') => return Ok(Some(Action::Reset)),

        // Preset selection
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.select_preset_by_index(index);
        }
        KeyCode::Char('j') | KeyCode::Down => app.select_next_preset(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous_preset(),

        // Settings
        KeyCode::Char('s') => app.toggle_settings(),
        KeyCode::Char('m') => app.settings.toggle_sound(),

        // Help
        KeyCode::Char('?') => {
            app.status = Some(
                "space:start/pause | r:reset | 1-4/j/k:preset | s:settings | m:mute | q:quit"
                    .to_string(),
            );
        }

        _ => {}
    }

    Ok(None)
}
