//! In-memory application settings.
//!
//! Settings live only for the duration of the process; they are adjusted
//! from the settings panel and are deliberately not written to disk.

use serde::Serialize;

/// Runtime settings, adjustable from the settings panel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Settings {
    /// Whether the completion chime sounds.
    pub sound_enabled: bool,
    /// Active color theme.
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            theme: Theme::Twilight,
        }
    }
}

impl Settings {
    /// Flip the chime on or off.
    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    /// Move to the next theme, wrapping around.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
    }
}

/// Color theme for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Indigo and magenta.
    Twilight,
    /// Green and cyan.
    Forest,
    /// Orange and red.
    Ember,
}

impl Theme {
    /// The next theme in display order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Twilight => Self::Forest,
            Self::Forest => Self::Ember,
            Self::Ember => Self::Twilight,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Twilight => "Twilight",
            Self::Forest => "Forest",
            Self::Ember => "Ember",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
