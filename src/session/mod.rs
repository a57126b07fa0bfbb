//! Meditation session state and timing.
//!
//! Provides the session controller and its parts:
//! - Built-in presets
//! - One-second countdown timer
//! - Breathing guidance cycle
//! - Completion chime

pub mod breath;
pub mod chime;
pub mod controller;
pub mod preset;
pub mod timer;

pub use breath::{BreathCycle, BreathPhase, BREATH_CYCLE_SECONDS};
pub use controller::{SessionComplete, SessionController};
pub use preset::{Preset, DEFAULT_PRESET, PRESETS};
pub use timer::{format_mmss, Countdown};
