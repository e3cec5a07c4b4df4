//! Generation run state.
//!
//! A run moves `Idle -> Running -> Done -> Idle`. Progress only grows
//! while Running and is clamped at 100; the tick that reaches 100 is the
//! only one that reports [`TickOutcome::Done`].

use std::fmt;

use crate::progress::ProgressSource;

/// Upper bound of a run's progress, in percent.
pub const COMPLETE: u8 = 100;

/// Lifecycle state of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunStatus {
    /// No run in flight. Generate is available when both slots are filled.
    #[default]
    Idle,
    /// Ticking towards 100%.
    Running,
    /// Reached 100%; waiting for the output to be revealed.
    Done,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Done => "Done",
        })
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The run is not Running; nothing changed.
    Inactive,
    /// Progress moved to the contained percentage (below 100).
    Advanced(u8),
    /// Progress reached 100 on this tick.
    Done,
}

/// One simulated generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationRun {
    progress: u8,
    status: RunStatus,
    ticks: u32,
}

impl GenerationRun {
    /// Current progress in percent (0..=100).
    ///
    /// After a run is revealed this keeps its final value of 100 until
    /// the next run starts.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn status(&self) -> RunStatus {
        self.status
    }

    /// Ticks applied since the run started.
    #[must_use]
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Whether a run is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    /// Reset to a fresh Running state at 0%.
    pub(crate) fn start(&mut self) {
        *self = Self {
            progress: 0,
            status: RunStatus::Running,
            ticks: 0,
        };
    }

    /// Advance by the source's next increment.
    pub(crate) fn tick(&mut self, source: &mut impl ProgressSource) -> TickOutcome {
        if self.status != RunStatus::Running {
            return TickOutcome::Inactive;
        }

        let increment = source.next_increment().max(1);
        self.progress = self.progress.saturating_add(increment).min(COMPLETE);
        self.ticks += 1;

        if self.progress >= COMPLETE {
            self.status = RunStatus::Done;
            TickOutcome::Done
        } else {
            TickOutcome::Advanced(self.progress)
        }
    }

    /// Leave the Done state. Returns `false` if the run was not Done.
    pub(crate) fn settle(&mut self) -> bool {
        if self.status == RunStatus::Done {
            self.status = RunStatus::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::FixedStep;

    #[test]
    fn idle_run_ignores_ticks() {
        let mut run = GenerationRun::default();
        assert_eq!(run.tick(&mut FixedStep(50)), TickOutcome::Inactive);
        assert_eq!(run.progress(), 0);
        assert_eq!(run.status(), RunStatus::Idle);
    }

    #[test]
    fn clamps_at_exactly_100() {
        let mut run = GenerationRun::default();
        run.start();
        assert_eq!(run.tick(&mut FixedStep(60)), TickOutcome::Advanced(60));
        assert_eq!(run.tick(&mut FixedStep(60)), TickOutcome::Done);
        assert_eq!(run.progress(), 100);
        assert_eq!(run.status(), RunStatus::Done);
    }

    #[test]
    fn max_increment_does_not_overflow() {
        let mut run = GenerationRun::default();
        run.start();
        run.tick(&mut FixedStep(99));
        assert_eq!(run.tick(&mut FixedStep(u8::MAX)), TickOutcome::Done);
        assert_eq!(run.progress(), 100);
    }

    #[test]
    fn zero_increment_still_advances() {
        let mut run = GenerationRun::default();
        run.start();
        assert_eq!(run.tick(&mut FixedStep(0)), TickOutcome::Advanced(1));

        let mut ticks = 1;
        while run.tick(&mut FixedStep(0)) != TickOutcome::Done {
            ticks += 1;
            assert!(ticks < 100, "zero-increment run failed to terminate");
        }
        assert_eq!(run.ticks(), 100);
    }

    #[test]
    fn done_is_reported_once() {
        let mut run = GenerationRun::default();
        run.start();
        assert_eq!(run.tick(&mut FixedStep(100)), TickOutcome::Done);
        assert_eq!(run.tick(&mut FixedStep(100)), TickOutcome::Inactive);
    }

    #[test]
    fn settle_only_from_done() {
        let mut run = GenerationRun::default();
        assert!(!run.settle());
        run.start();
        assert!(!run.settle());
        run.tick(&mut FixedStep(100));
        assert!(run.settle());
        assert_eq!(run.status(), RunStatus::Idle);
        assert_eq!(run.progress(), 100);
        assert!(!run.settle());
    }

    #[test]
    fn restart_resets_progress() {
        let mut run = GenerationRun::default();
        run.start();
        run.tick(&mut FixedStep(100));
        run.settle();
        run.start();
        assert_eq!(run.progress(), 0);
        assert_eq!(run.ticks(), 0);
        assert!(run.is_running());
    }
}
