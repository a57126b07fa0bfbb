//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::config::Theme;
use crate::session::PRESETS;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, gauge, readout, preset grid, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Progress gauge
            Constraint::Length(6), // Time readout + breath guide
            Constraint::Min(0),    // Preset grid
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_progress(frame, app, chunks[1]);
    render_readout(frame, app, chunks[2]);
    render_presets(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);

    if app.show_settings {
        render_settings(frame, app);
    }
}

/// Primary color of the active theme.
const fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Twilight => Color::Magenta,
        Theme::Forest => Color::Green,
        Theme::Ember => Color::Red,
    }
}

/// Secondary color of the active theme.
const fn soft(theme: Theme) -> Color {
    match theme {
        Theme::Twilight => Color::LightMagenta,
        Theme::Forest => Color::Cyan,
        Theme::Ember => Color::Yellow,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Mindful",
            Style::default()
                .fg(accent(app.settings.theme))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Find your inner peace",
            Style::default().fg(soft(app.settings.theme)),
        )),
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent(app.settings.theme))),
    );

    frame.render_widget(header, area);
}

/// Render the session progress gauge.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = app.controller.progress_percent().clamp(0.0, 100.0) as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(accent(app.settings.theme)))
        .percent(percent);

    frame.render_widget(gauge, area);
}

/// Render the time readout and breathing guide.
fn render_readout(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            app.controller.format_remaining(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    // The breathing guide only appears while a session is running.
    if app.controller.is_running() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            app.controller.breath_phase().instruction().to_uppercase(),
            Style::default()
                .fg(soft(app.settings.theme))
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let readout = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(readout, area);
}

/// Render the 2x2 preset grid. Hidden while a session is running.
fn render_presets(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if app.controller.is_running() {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4)])
        .split(area);

    for (row_index, row) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);

        for (col_index, cell) in cells.iter().enumerate() {
            let index = row_index * 2 + col_index;
            render_preset_cell(frame, app, *cell, index);
        }
    }
}

/// Render one preset cell, highlighting the selected one.
fn render_preset_cell(frame: &mut Frame<'_>, app: &App, area: Rect, index: usize) {
    let Some(preset) = PRESETS.get(index) else {
        return;
    };

    let selected = index == app.preset_cursor;
    let border_style = if selected {
        Style::default()
            .fg(accent(app.settings.theme))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(format!("{} {}", preset.icon, preset.name)),
        Line::from(Span::styled(
            format!("{} minutes", preset.duration_minutes),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let cell = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", index + 1)),
        );

    frame.render_widget(cell, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | r:reset | 1-4/j/k:preset | s:settings | m:mute | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Render the settings panel as a centered modal.
fn render_settings(frame: &mut Frame<'_>, app: &App) {
    let area = centered_rect(40, 9, frame.area());

    let sound = if app.settings.sound_enabled {
        Span::styled("On", Style::default().fg(Color::Green))
    } else {
        Span::styled("Off", Style::default().fg(Color::Red))
    };

    let lines = vec![
        Line::default(),
        Line::from(vec![Span::raw("Sound Effects: "), sound]),
        Line::from(format!("Theme: {}", app.settings.theme)),
        Line::default(),
        Line::from(Span::styled(
            "s:sound | t:theme | Esc:close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent(app.settings.theme)))
            .title(" Settings "),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(panel, area);
}

/// Compute a centered rectangle of fixed size within `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
