//! User input task: turns lines on stdin into commands

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use tracing::{debug, info, warn};

/// Requests the user can make
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Start,
    Quit,
}

/// Map one input line to a command. Empty lines start a countdown.
pub fn parse_command(line: &str) -> Option<UserCommand> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "s" | "start" => Some(UserCommand::Start),
        "q" | "quit" | "exit" => Some(UserCommand::Quit),
        _ => None,
    }
}

/// Read commands until EOF, a quit command, or the receiver goes away
pub async fn input_task<R>(reader: R, commands: mpsc::Sender<UserCommand>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("Input closed");
                break;
            }
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        };

        let Some(command) = parse_command(&line) else {
            debug!("Ignoring unknown input: {:?}", line);
            continue;
        };

        if commands.send(command).await.is_err() {
            debug!("Command receiver dropped, stopping input task");
            break;
        }
        if command == UserCommand::Quit {
            break;
        }
    }
}
