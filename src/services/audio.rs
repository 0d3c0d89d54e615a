//! Playback of the end-of-countdown sound

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::PlayerChoice;

/// A handle that can make the end-of-countdown sound.
///
/// `play` must return quickly: it is called from the tick path and the
/// countdown loop does not wait for the sound to finish.
pub trait AudioPlayer: Send {
    fn play(&mut self) -> Result<(), String>;

    /// Short name for logs
    fn describe(&self) -> String;
}

/// Plays a sound file through an external program such as `aplay`
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    sound: PathBuf,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, sound: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            sound: sound.into(),
        }
    }
}

impl AudioPlayer for CommandPlayer {
    fn play(&mut self) -> Result<(), String> {
        debug!("Spawning {} {}", self.program, self.sound.display());

        let child = Command::new(&self.program)
            .arg(&self.sound)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(false)
            .spawn()
            .map_err(|e| format!("Failed to execute {}: {}", self.program, e))?;

        let program = self.program.clone();
        tokio::spawn(async move {
            match child.wait_with_output().await {
                Ok(output) if output.status.success() => {
                    debug!("{} finished playing", program);
                }
                Ok(output) => {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    warn!("{} exited with {}: {}", program, output.status, stderr.trim());
                }
                Err(e) => warn!("Failed to wait for {}: {}", program, e),
            }
        });

        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} {}", self.program, self.sound.display())
    }
}

/// Rings the terminal bell on stderr
#[derive(Debug, Clone, Default)]
pub struct TerminalBell;

impl AudioPlayer for TerminalBell {
    fn play(&mut self) -> Result<(), String> {
        let mut stderr = std::io::stderr();
        stderr
            .write_all(b"\x07")
            .and_then(|_| stderr.flush())
            .map_err(|e| format!("Failed to ring terminal bell: {}", e))
    }

    fn describe(&self) -> String {
        "terminal bell".to_string()
    }
}

/// Makes no sound at all
#[derive(Debug, Clone, Default)]
pub struct SilentPlayer;

impl AudioPlayer for SilentPlayer {
    fn play(&mut self) -> Result<(), String> {
        debug!("Sound is muted");
        Ok(())
    }

    fn describe(&self) -> String {
        "muted".to_string()
    }
}

/// Locate an external player program without running it.
///
/// A name with a path component is checked as given; a bare name is looked
/// up in each `PATH` directory. Returns the first executable match.
pub async fn check_player_available(program: &str) -> Result<PathBuf, String> {
    let candidates: Vec<PathBuf> = if Path::new(program).components().count() > 1 {
        vec![PathBuf::from(program)]
    } else {
        std::env::var_os("PATH")
            .map(|paths| std::env::split_paths(&paths).map(|dir| dir.join(program)).collect())
            .unwrap_or_default()
    };

    for candidate in candidates {
        if is_executable_file(&candidate).await {
            info!("{} is available at {}", program, candidate.display());
            return Ok(candidate);
        }
    }

    Err(format!("{} is not available: no executable found", program))
}

async fn is_executable_file(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata.is_file() && has_exec_permission(&metadata),
        Err(_) => false,
    }
}

#[cfg(unix)]
fn has_exec_permission(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_exec_permission(_metadata: &std::fs::Metadata) -> bool {
    true
}

/// Check that the sound file exists and is a regular file
pub async fn check_sound_file(path: &Path) -> Result<(), String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| format!("Sound file {} is not readable: {}", path.display(), e))?;

    if !metadata.is_file() {
        return Err(format!("Sound file {} is not a regular file", path.display()));
    }
    Ok(())
}

/// Build the playback handle for the configured choice.
///
/// An external player that cannot run, or a missing sound file, falls back
/// to the terminal bell.
pub async fn build_player(choice: PlayerChoice) -> Box<dyn AudioPlayer> {
    match choice {
        PlayerChoice::Silent => Box::new(SilentPlayer),
        PlayerChoice::Bell => Box::new(TerminalBell),
        PlayerChoice::Command { program, sound } => {
            let checks = match check_player_available(&program).await {
                Ok(_) => check_sound_file(&sound).await,
                Err(e) => Err(e),
            };
            match checks {
                Ok(()) => Box::new(CommandPlayer::new(program, sound)),
                Err(e) => {
                    warn!("{}, falling back to the terminal bell", e);
                    Box::new(TerminalBell)
                }
            }
        }
    }
}


#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::AudioPlayer;

    /// Counts how many times it was asked to play
    #[derive(Debug, Clone, Default)]
    pub struct RecordingPlayer {
        plays: Arc<AtomicUsize>,
        fail: bool,
    }

    impl RecordingPlayer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        pub fn plays(&self) -> usize {
            self.plays.load(Ordering::SeqCst)
        }
    }

    impl AudioPlayer for RecordingPlayer {
        fn play(&mut self) -> Result<(), String> {
            self.plays.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err("playback device unavailable".to_string())
            } else {
                Ok(())
            }
        }

        fn describe(&self) -> String {
            "recording".to_string()
        }
    }
}
