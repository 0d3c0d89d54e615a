//! Platform services module
//!
//! This module contains the playback handles used when a countdown ends.

pub mod audio;

// Re-export main types
pub use audio::{
    build_player, check_player_available, check_sound_file, AudioPlayer, CommandPlayer,
    SilentPlayer, TerminalBell,
};
