//! Terminal User Interface (TUI) for mindful.
//!
//! Renders the meditation timer and handles keyboard input.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::MindfulError;

/// Interval between session ticks. Both the countdown and the breathing
/// cycle advance once per interval.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(mut app: App) -> Result<(), MindfulError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| MindfulError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| MindfulError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| MindfulError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
///
/// Key events and one-second ticks are processed sequentially on this
/// thread; the tick clock keeps running while input is idle by bounding
/// the event poll timeout with the time until the next tick.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), MindfulError> {
    let mut last_tick = Instant::now();

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| MindfulError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events until the next tick is due
        let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
        if let Some(action) = event::handle_events(app, timeout)? {
            match action {
                event::Action::Quit => break,
                event::Action::Toggle => app.toggle_running(),
                event::Action::Reset => app.reset(),
            }
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
