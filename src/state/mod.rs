//! State management module
//!
//! This module contains the countdown state machine, the derived progress
//! width and the application shell that publishes snapshots.

pub mod app_state;
pub mod progress;
pub mod snapshot;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppShell, Labels};
pub use snapshot::TimerSnapshot;
pub use timer_state::{CountdownTimer, Phase, TickOutcome};
