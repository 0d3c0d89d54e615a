//! Countdown event loop

use std::{future::Future, time::Duration};
use tokio::{
    sync::mpsc,
    time::{interval_at, Instant, Interval, MissedTickBehavior},
};
use tracing::{debug, info};

use super::input::UserCommand;
use crate::state::{AppShell, TickOutcome};

/// Single event loop that owns the shell and performs every state mutation.
///
/// The tick is armed only while a countdown runs; its first tick fires one
/// `tick_period` after the start. A quit command or closed input stops
/// reading commands; the loop then ends as soon as no countdown is running,
/// so a started countdown always reaches zero and plays. Only `shutdown`
/// ends the loop mid-run. The shell is handed back so callers can inspect
/// the final state.
pub async fn countdown_task<F>(
    mut shell: AppShell,
    mut commands: mpsc::Receiver<UserCommand>,
    tick_period: Duration,
    shutdown: F,
) -> AppShell
where
    F: Future<Output = ()>,
{
    info!("Starting countdown task");

    tokio::pin!(shutdown);
    let mut ticker: Option<Interval> = None;
    let mut input_open = true;

    loop {
        tokio::select! {
            command = commands.recv(), if input_open => match command {
                Some(UserCommand::Start) => {
                    if shell.request_start() {
                        ticker = Some(start_ticker(tick_period));
                    }
                }
                Some(UserCommand::Quit) | None => {
                    input_open = false;
                    if !shell.is_running() {
                        info!("Input finished while idle, stopping");
                        break;
                    }
                    info!("Input finished, letting the current countdown run out");
                }
            },

            _ = next_tick(&mut ticker) => {
                if shell.tick() == TickOutcome::Finished {
                    debug!("Disarming tick");
                    ticker = None;
                    if !input_open {
                        break;
                    }
                }
            }

            _ = &mut shutdown => {
                info!("Shutdown requested, stopping countdown task");
                break;
            }
        }
    }

    shell
}

fn start_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Wait for the next tick, or forever when no countdown is armed
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
