//! Background tasks module
//!
//! This module contains the countdown event loop and the tasks that feed it
//! input and draw its output.

pub mod countdown;
pub mod input;
pub mod render;

// Re-export main functions
pub use countdown::countdown_task;
pub use input::{input_task, parse_command, UserCommand};
pub use render::render_task;
