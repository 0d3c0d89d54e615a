//! Utility functions module
//!
//! This module contains utility functions used throughout the application.

pub mod signals;

// Re-export main functions
pub use signals::{install_shutdown_signals, shutdown_signal};
