//! Breathing guidance cycle.
//!
//! A 16-second cycle: 4 seconds inhale, 4 seconds hold, 8 seconds exhale.
//! The cycle restarts from the inhale phase every time a session starts or
//! resumes; the phase offset is intentionally not preserved across pauses.

use serde::Serialize;

/// Length of one full breath cycle in seconds.
pub const BREATH_CYCLE_SECONDS: u32 = 16;

/// Phase of the breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    /// Seconds 0-3 of the cycle.
    Inhale,
    /// Seconds 4-7 of the cycle.
    Hold,
    /// Seconds 8-15 of the cycle.
    Exhale,
}

impl BreathPhase {
    /// Map a position within the cycle to its phase.
    #[must_use]
    pub const fn from_elapsed(elapsed: u32) -> Self {
        match elapsed % BREATH_CYCLE_SECONDS {
            0..=3 => Self::Inhale,
            4..=7 => Self::Hold,
            _ => Self::Exhale,
        }
    }

    /// Guidance text shown while a session is running.
    #[must_use]
    pub const fn instruction(&self) -> &'static str {
        match self {
            Self::Inhale => "Breathe In",
            Self::Hold => "Hold",
            Self::Exhale => "Breathe Out",
        }
    }
}

impl std::fmt::Display for BreathPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.instruction())
    }
}

/// Free-running breath cycle counter.
#[derive(Debug, Clone, Default)]
pub struct BreathCycle {
    /// Seconds elapsed within the current cycle, always `< BREATH_CYCLE_SECONDS`.
    elapsed: u32,
}

impl BreathCycle {
    /// Create a cycle positioned at the start of an inhale.
    #[must_use]
    pub const fn new() -> Self {
        Self { elapsed: 0 }
    }

    /// Advance the cycle by one second, wrapping around.
    pub fn tick(&mut self) {
        self.elapsed = (self.elapsed + 1) % BREATH_CYCLE_SECONDS;
    }

    /// Restart the cycle at the inhale phase.
    pub fn restart(&mut self) {
        self.elapsed = 0;
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> BreathPhase {
        BreathPhase::from_elapsed(self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_mapping() {
        let phases: Vec<BreathPhase> = (0..BREATH_CYCLE_SECONDS)
            .map(BreathPhase::from_elapsed)
            .collect();

        assert_eq!(phases[..4], [BreathPhase::Inhale; 4]);
        assert_eq!(phases[4..8], [BreathPhase::Hold; 4]);
        assert_eq!(phases[8..], [BreathPhase::Exhale; 8]);
    }

    #[test]
    fn test_cycle_repeats() {
        assert_eq!(BreathPhase::from_elapsed(16), BreathPhase::Inhale);
        assert_eq!(BreathPhase::from_elapsed(21), BreathPhase::Hold);
        assert_eq!(BreathPhase::from_elapsed(31), BreathPhase::Exhale);
    }

    #[test]
    fn test_cycle_sequence_over_16_ticks() {
        let mut cycle = BreathCycle::new();
        let mut observed = Vec::new();

        for _ in 0..BREATH_CYCLE_SECONDS {
            observed.push(cycle.phase());
            cycle.tick();
        }

        let inhales = observed.iter().filter(|p| **p == BreathPhase::Inhale).count();
        let holds = observed.iter().filter(|p| **p == BreathPhase::Hold).count();
        let exhales = observed.iter().filter(|p| **p == BreathPhase::Exhale).count();
        assert_eq!((inhales, holds, exhales), (4, 4, 8));

        // Back at the start of an inhale.
        assert_eq!(cycle.phase(), BreathPhase::Inhale);
    }

    #[test]
    fn test_restart() {
        let mut cycle = BreathCycle::new();
        for _ in 0..10 {
            cycle.tick();
        }
        assert_eq!(cycle.phase(), BreathPhase::Exhale);

        cycle.restart();
        assert_eq!(cycle.phase(), BreathPhase::Inhale);
    }

    #[test]
    fn test_instruction_labels() {
        assert_eq!(BreathPhase::Inhale.instruction(), "Breathe In");
        assert_eq!(BreathPhase::Hold.instruction(), "Hold");
        assert_eq!(BreathPhase::Exhale.instruction(), "Breathe Out");
    }
}
