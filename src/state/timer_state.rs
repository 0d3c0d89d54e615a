//! Countdown state machine

use serde::{Deserialize, Serialize};

/// The two countdown states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No countdown is active (`finished == true`)
    Idle,
    /// Counting down (`finished == false`)
    Running,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was idle, nothing changed
    Ignored,
    /// One second elapsed, the countdown continues
    Counting { remaining: u32 },
    /// The countdown just reached zero and the timer is idle again
    Finished,
}

/// Countdown timer for a fixed duration in whole seconds.
///
/// There is no cancel or pause: once started, the countdown runs to zero.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    duration: u32,
    remaining: u32,
    phase: Phase,
}

impl CountdownTimer {
    /// Create an idle timer with `remaining == duration`
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            phase: Phase::Idle,
        }
    }

    /// Start a new countdown. Returns `false` (and changes nothing) while running.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Running {
            return false;
        }
        self.remaining = self.duration;
        self.phase = Phase::Running;
        true
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == Phase::Idle {
            return TickOutcome::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.phase = Phase::Idle;
            TickOutcome::Finished
        } else {
            TickOutcome::Counting { remaining: self.remaining }
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if no countdown is active
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Idle
    }
}
