//! Session controller.
//!
//! Owns all mutable session state: the selected preset, the countdown, and
//! the breathing cycle. All mutation happens through the operations below,
//! driven from a single event loop, so no locking is needed.

use crate::session::breath::{BreathCycle, BreathPhase};
use crate::session::preset::{Preset, DEFAULT_PRESET, PRESETS};
use crate::session::timer::Countdown;

/// Signal emitted by [`SessionController::tick`] when the countdown
/// reaches zero. Fires exactly once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionComplete;

/// The single owner of meditation session state.
#[derive(Debug, Clone)]
pub struct SessionController {
    preset: Preset,
    countdown: Countdown,
    breath: BreathCycle,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionController {
    /// Create a controller with the default preset selected and stopped.
    #[must_use]
    pub const fn new() -> Self {
        let preset = PRESETS[DEFAULT_PRESET];
        Self {
            preset,
            countdown: Countdown::from_seconds(preset.duration_seconds()),
            breath: BreathCycle::new(),
        }
    }

    /// Select a preset: stops the session, restores the preset's full
    /// duration, and puts the breath cycle back at the inhale phase.
    pub fn select_preset(&mut self, preset: Preset) {
        self.preset = preset;
        self.countdown = Countdown::from_seconds(preset.duration_seconds());
        self.breath.restart();
    }

    /// Start or pause the session.
    ///
    /// Starting restarts the breath cycle at the inhale phase; pausing
    /// keeps the remaining time. Once the countdown has run out this is a
    /// no-op until the session is reset or a preset is selected.
    pub fn toggle_running(&mut self) {
        if self.countdown.is_running() {
            self.countdown.pause();
        } else {
            self.countdown.start();
            if self.countdown.is_running() {
                self.breath.restart();
            }
        }
    }

    /// Stop the session and restore the selected preset's full duration.
    pub fn reset(&mut self) {
        self.countdown.reset();
        self.breath.restart();
    }

    /// Advance both per-second processes by one tick.
    ///
    /// Does nothing unless the session is running. Returns the completion
    /// signal on the tick that exhausts the countdown.
    pub fn tick(&mut self) -> Option<SessionComplete> {
        if !self.countdown.is_running() {
            return None;
        }

        self.breath.tick();

        if self.countdown.tick() {
            Some(SessionComplete)
        } else {
            None
        }
    }

    /// The currently selected preset.
    #[must_use]
    pub const fn preset(&self) -> Preset {
        self.preset
    }

    /// Whether the session is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Remaining seconds in the session.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining_seconds()
    }

    /// Remaining time formatted as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        self.countdown.format_remaining()
    }

    /// Progress through the session as a percentage (0.0 - 100.0).
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.countdown.progress_percent()
    }

    /// The current breathing phase.
    #[must_use]
    pub const fn breath_phase(&self) -> BreathPhase {
        self.breath.phase()
    }
}
