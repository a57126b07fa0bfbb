//! Countdown timer for meditation sessions.

use chrono::Duration;

/// A one-second-resolution countdown timer.
///
/// The timer never decrements below zero, and stops itself on the tick
/// that reaches zero.
#[derive(Debug, Clone)]
pub struct Countdown {
    /// Total duration in seconds.
    total_seconds: u32,
    /// Remaining seconds.
    remaining_seconds: u32,
    /// Whether the countdown is advancing.
    running: bool,
}

impl Countdown {
    /// Create a stopped countdown from a length in seconds.
    #[must_use]
    pub const fn from_seconds(seconds: u32) -> Self {
        Self {
            total_seconds: seconds,
            remaining_seconds: seconds,
            running: false,
        }
    }

    /// Start or resume the countdown. Has no effect once it has run out.
    pub fn start(&mut self) {
        if self.remaining_seconds > 0 {
            self.running = true;
        }
    }

    /// Pause the countdown, keeping the remaining time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Advance the countdown by one second.
    ///
    /// Returns true on the tick that reaches zero; the countdown stops
    /// itself at that point, so the signal fires at most once per run.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining_seconds == 0 {
            return false;
        }

        self.remaining_seconds -= 1;

        if self.remaining_seconds == 0 {
            self.running = false;
            true
        } else {
            false
        }
    }

    /// Restore the full duration and stop.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.running = false;
    }

    /// Whether the countdown is advancing.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining seconds.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Remaining time as a `Duration`.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::seconds(i64::from(self.remaining_seconds))
    }

    /// Progress through the session as a percentage (0.0 - 100.0).
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.total_seconds == 0 {
            return 100.0;
        }
        let elapsed = f64::from(self.total_seconds - self.remaining_seconds);
        elapsed / f64::from(self.total_seconds) * 100.0
    }

    /// Format the remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining())
    }
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().max(0);
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_countdown_is_stopped() {
        let countdown = Countdown::from_seconds(300);
        assert_eq!(countdown.remaining_seconds(), 300);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_tick_requires_running() {
        let mut countdown = Countdown::from_seconds(300);
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining_seconds(), 300);
    }

    #[test]
    fn test_runs_down_and_completes_once() {
        let mut countdown = Countdown::from_seconds(60);
        countdown.start();

        for _ in 0..59 {
            assert!(!countdown.tick());
            assert!(countdown.is_running());
        }

        assert!(countdown.tick());
        assert_eq!(countdown.remaining_seconds(), 0);
        assert!(!countdown.is_running());

        // Further ticks do nothing and never re-fire the signal.
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining_seconds(), 0);
    }

    #[test]
    fn test_start_at_zero_is_a_no_op() {
        let mut countdown = Countdown::from_seconds(60);
        countdown.start();
        for _ in 0..60 {
            countdown.tick();
        }

        countdown.start();
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_pause_keeps_remaining() {
        let mut countdown = Countdown::from_seconds(300);
        countdown.start();
        countdown.tick();
        countdown.tick();
        countdown.tick();

        countdown.pause();
        assert!(!countdown.is_running());
        assert_eq!(countdown.remaining_seconds(), 297);

        countdown.start();
        countdown.tick();
        assert_eq!(countdown.remaining_seconds(), 296);
    }

    #[test]
    fn test_reset() {
        let mut countdown = Countdown::from_seconds(300);
        countdown.start();
        countdown.tick();

        countdown.reset();
        assert_eq!(countdown.remaining_seconds(), 300);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_progress_percent() {
        let mut countdown = Countdown::from_seconds(300);
        assert!(countdown.progress_percent().abs() < f64::EPSILON);

        countdown.start();
        for _ in 0..150 {
            countdown.tick();
        }
        assert!((countdown.progress_percent() - 50.0).abs() < 0.01);

        for _ in 0..150 {
            countdown.tick();
        }
        assert!((countdown.progress_percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(Duration::seconds(300)), "05:00");
        assert_eq!(format_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_mmss(Duration::zero()), "00:00");
        assert_eq!(format_mmss(Duration::seconds(605)), "10:05");
    }

    #[test]
    fn test_format_remaining_tracks_duration() {
        let mut countdown = Countdown::from_seconds(300);
        assert_eq!(countdown.remaining(), Duration::seconds(300));
        assert_eq!(countdown.format_remaining(), "05:00");

        countdown.start();
        for _ in 0..63 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining(), Duration::seconds(237));
        assert_eq!(countdown.format_remaining(), "03:57");
    }
}
