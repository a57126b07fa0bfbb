//! Built-in session presets.
//!
//! The preset list is fixed for the lifetime of the process; every session
//! is started from one of these four entries.

use serde::Serialize;

/// A named, fixed-duration meditation session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Display name.
    pub name: &'static str,
    /// Session length in minutes.
    pub duration_minutes: u32,
    /// Decorative icon shown in the preset grid.
    pub icon: &'static str,
}

/// The built-in presets, in display order.
pub const PRESETS: [Preset; 4] = [
    Preset {
        name: "Quick Calm",
        duration_minutes: 5,
        icon: "🌅",
    },
    Preset {
        name: "Deep Focus",
        duration_minutes: 10,
        icon: "🧘",
    },
    Preset {
        name: "Stress Relief",
        duration_minutes: 15,
        icon: "🌊",
    },
    Preset {
        name: "Full Session",
        duration_minutes: 20,
        icon: "🌸",
    },
];

/// Index of the default preset (Quick Calm, 5 minutes).
pub const DEFAULT_PRESET: usize = 0;

impl Preset {
    /// Session length in seconds.
    #[must_use]
    pub const fn duration_seconds(&self) -> u32 {
        self.duration_minutes * 60
    }

    /// Look up a preset by name (case-insensitive).
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .copied()
    }

    /// Look up a preset by its duration in minutes.
    #[must_use]
    pub fn by_minutes(minutes: u32) -> Option<Self> {
        PRESETS
            .iter()
            .find(|p| p.duration_minutes == minutes)
            .copied()
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} minutes)", self.name, self.duration_minutes)
    }
}
