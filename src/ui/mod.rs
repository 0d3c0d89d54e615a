//! Terminal front end
//!
//! Renderers subscribe to timer snapshots and draw them, alongside a looping
//! instructional animation.

pub mod animation;
pub mod render;

pub use animation::Animation;
pub use render::{render_frame, JsonRenderer, Renderer, TerminalRenderer};
