//! Handwash Timer - a terminal handwashing timer
//!
//! This library provides the countdown state machine, the derived progress
//! width, the application shell that owns the end-of-countdown sound, and the
//! tasks and renderers that drive them from a terminal.

pub mod config;
pub mod services;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppShell, CountdownTimer, TimerSnapshot};
pub use utils::signals::shutdown_signal;
