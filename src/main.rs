//! Handwash Timer - a terminal handwashing timer
//!
//! This is the main entry point for the handwash-timer application.

use std::io;
use tokio::{io::BufReader, sync::mpsc};
use tracing::{error, info};

use handwash_timer::{
    config::Config,
    services::build_player,
    state::AppShell,
    tasks::{countdown_task, input_task, render_task},
    ui::{JsonRenderer, Renderer, TerminalRenderer},
    utils::{install_shutdown_signals, shutdown_signal},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they never land inside the rendered frame
    tracing_subscriber::fmt()
        .with_env_filter(format!("handwash_timer={}", config.log_level()))
        .with_writer(io::stderr)
        .init();

    info!("Starting handwash-timer v1.0.0");
    info!("Configuration: duration={}s, sound={}, player={}, json={}",
          config.duration, config.sound.display(), config.player, config.json);

    let signals = install_shutdown_signals().map_err(anyhow::Error::msg)?;

    // Create application state
    let player = build_player(config.player_choice()).await;
    let shell = AppShell::new(config.duration, player);

    let renderer: Box<dyn Renderer> = if config.json {
        Box::new(JsonRenderer::new(io::stdout()))
    } else {
        Box::new(TerminalRenderer::new(io::stdout()))
    };
    let render = tokio::spawn(render_task(
        shell.subscribe(),
        shell.labels().clone(),
        renderer,
        config.frame_period(),
    ));

    let (command_tx, command_rx) = mpsc::channel(8);
    tokio::spawn(input_task(BufReader::new(tokio::io::stdin()), command_tx));

    let shutdown = async move {
        shutdown_signal(signals).await;
    };
    let shell = countdown_task(shell, command_rx, config.tick_period(), shutdown).await;
    let completed = shell.snapshot().completed_runs;
    drop(shell);

    let exit_code = match render.await {
        Ok(Ok(())) => 0,
        Ok(Err(e)) => {
            error!("Rendering failed: {}", e);
            1
        }
        Err(e) => {
            error!("Render task failed: {}", e);
            1
        }
    };

    info!("Shutdown complete after {} completed washes", completed);

    // The stdin reader may still be parked in a blocking read
    std::process::exit(exit_code);
}
