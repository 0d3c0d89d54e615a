//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// Default countdown length in seconds
pub const DEFAULT_DURATION_SECS: u32 = 20;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "handwash-timer")]
#[command(about = "A terminal handwashing timer with a progress bar and end-of-wash sound")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Countdown length in seconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION_SECS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: u32,

    /// Sound file played when the countdown ends
    #[arg(short, long, default_value = "sound.wav")]
    pub sound: PathBuf,

    /// External program used to play the sound file
    #[arg(long, default_value = "aplay")]
    pub player: String,

    /// Ring the terminal bell instead of playing the sound file
    #[arg(long, conflicts_with = "mute")]
    pub bell: bool,

    /// Do not make any sound when the countdown ends
    #[arg(long)]
    pub mute: bool,

    /// Emit one JSON object per state change instead of drawing the screen
    #[arg(long)]
    pub json: bool,

    /// Animation frame period in milliseconds
    #[arg(long, default_value_t = 400,
          value_parser = clap::value_parser!(u64).range(50..))]
    pub frame_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the end-of-countdown sound should be produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerChoice {
    Command { program: String, sound: PathBuf },
    Bell,
    Silent,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Period between countdown ticks
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1)
    }

    /// Period between animation frames
    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn player_choice(&self) -> PlayerChoice {
        if self.mute {
            PlayerChoice::Silent
        } else if self.bell {
            PlayerChoice::Bell
        } else {
            PlayerChoice::Command {
                program: self.player.clone(),
                sound: self.sound.clone(),
            }
        }
    }
}
