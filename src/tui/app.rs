//! Application state for the TUI.

use crate::config::Settings;
use crate::session::{chime, Preset, SessionController, PRESETS};

/// Application state.
pub struct App {
    /// The session controller owning all timer state.
    pub controller: SessionController,
    /// Runtime settings (sound, theme).
    pub settings: Settings,
    /// Index into [`PRESETS`] of the highlighted grid entry.
    pub preset_cursor: usize,
    /// Whether the settings panel is open.
    pub show_settings: bool,
    /// Status message to display.
    pub status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new app instance with the default preset selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: SessionController::new(),
            settings: Settings::default(),
            preset_cursor: 0,
            show_settings: false,
            status: Some("Press ? for help".to_string()),
        }
    }

    /// Create an app with a specific preset selected.
    #[must_use]
    pub fn with_preset(preset: Preset, muted: bool) -> Self {
        let mut app = Self::new();
        app.select_preset_by_index(
            PRESETS
                .iter()
                .position(|p| *p == preset)
                .unwrap_or_default(),
        );
        app.settings.sound_enabled = !muted;
        app.status = Some(format!("{preset} selected"));
        app
    }

    /// Select the preset at the given grid index.
    pub fn select_preset_by_index(&mut self, index: usize) {
        if let Some(preset) = PRESETS.get(index) {
            self.preset_cursor = index;
            self.controller.select_preset(*preset);
            self.status = Some(format!("{preset} selected"));
        }
    }

    /// Move the preset cursor down and select that preset.
    pub fn select_next_preset(&mut self) {
        if self.preset_cursor + 1 < PRESETS.len() {
            self.select_preset_by_index(self.preset_cursor + 1);
        }
    }

    /// Move the preset cursor up and select that preset.
    pub fn select_previous_preset(&mut self) {
        if self.preset_cursor > 0 {
            self.select_preset_by_index(self.preset_cursor - 1);
        }
    }

    /// Start or pause the session.
    pub fn toggle_running(&mut self) {
        self.controller.toggle_running();
        self.status = if self.controller.is_running() {
            Some("Session started".to_string())
        } else if self.controller.remaining_seconds() == 0 {
            Some("Session complete - press r to reset".to_string())
        } else {
            Some("Paused".to_string())
        };
    }

    /// Reset the session to the selected preset's full duration.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.status = Some("Reset".to_string());
    }

    /// Advance the session by one second.
    ///
    /// Rings the chime when the countdown completes, unless muted.
    pub fn tick(&mut self) {
        if self.controller.tick().is_some() {
            if self.settings.sound_enabled {
                chime::ring();
            }
            self.status = Some("Session complete".to_string());
        }
    }

    /// Toggle the settings panel.
    pub fn toggle_settings(&mut self) {
        self.show_settings = !self.show_settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::session::BreathPhase;

    #[test]
    fn test_new_app_defaults() {
        let app = App::new();
        assert_eq!(app.controller.remaining_seconds(), 300);
        assert!(!app.controller.is_running());
        assert!(!app.show_settings);
        assert_eq!(app.preset_cursor, 0);
    }

    #[test]
    fn test_with_preset() {
        let preset = Preset::by_name("Stress Relief").unwrap();
        let app = App::with_preset(preset, true);

        assert_eq!(app.preset_cursor, 2);
        assert_eq!(app.controller.remaining_seconds(), 900);
        assert!(!app.settings.sound_enabled);
    }

    #[test]
    fn test_select_preset_by_index() {
        let mut app = App::new();
        app.select_preset_by_index(3);
        assert_eq!(app.controller.preset().name, "Full Session");
        assert_eq!(app.controller.remaining_seconds(), 1200);

        // Out-of-range index is ignored.
        app.select_preset_by_index(9);
        assert_eq!(app.preset_cursor, 3);
    }

    #[test]
    fn test_cursor_movement_clamps() {
        let mut app = App::new();
        app.select_previous_preset();
        assert_eq!(app.preset_cursor, 0);

        for _ in 0..10 {
            app.select_next_preset();
        }
        assert_eq!(app.preset_cursor, PRESETS.len() - 1);
    }

    #[test]
    fn test_tick_advances_session() {
        let mut app = App::new();
        app.toggle_running();
        app.tick();
        assert_eq!(app.controller.remaining_seconds(), 299);
        assert_ne!(app.controller.breath_phase(), BreathPhase::Exhale);
    }

    #[test]
    fn test_settings_toggle() {
        let mut app = App::new();
        app.toggle_settings();
        assert!(app.show_settings);

        app.settings.cycle_theme();
        assert_eq!(app.settings.theme, Theme::Forest);

        app.toggle_settings();
        assert!(!app.show_settings);
    }
}
