//! Published view of the timer state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timer_state::Phase;

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub duration_secs: u32,
    pub remaining_secs: u32,
    pub finished: bool,
    pub phase: Phase,
    /// Recomputed from duration and remaining whenever a snapshot is taken
    pub progress_width: f64,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_runs: u64,
}

impl TimerSnapshot {
    /// Whether the Start control is enabled
    pub fn can_start(&self) -> bool {
        self.finished
    }
}
