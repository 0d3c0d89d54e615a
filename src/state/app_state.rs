//! Application shell: countdown, labels and the playback handle

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, error, info};

use super::{
    progress,
    timer_state::{CountdownTimer, TickOutcome},
    TimerSnapshot,
};
use crate::services::AudioPlayer;

/// Static text shown around the countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub counter: &'static str,
    pub button: &'static str,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Handwashing",
            counter: "Time last:",
            button: "Start",
        }
    }
}

/// Owns the countdown and the audio handle, and publishes every state
/// change to its subscribers.
pub struct AppShell {
    countdown: CountdownTimer,
    player: Box<dyn AudioPlayer>,
    labels: Labels,
    // Display-only bookkeeping for snapshots; the countdown never reads these
    started_at: Option<DateTime<Utc>>,
    completed_runs: u64,
    snapshot_tx: watch::Sender<TimerSnapshot>,
}

impl AppShell {
    /// Create an idle shell for a countdown of `duration_secs`
    pub fn new(duration_secs: u32, player: Box<dyn AudioPlayer>) -> Self {
        let countdown = CountdownTimer::new(duration_secs);
        let initial = Self::build_snapshot(&countdown, None, 0);
        let (snapshot_tx, _) = watch::channel(initial);

        info!("Countdown ready: {}s, sound via {}", duration_secs, player.describe());

        Self {
            countdown,
            player,
            labels: Labels::default(),
            started_at: None,
            completed_runs: 0,
            snapshot_tx,
        }
    }

    /// Register a new subscriber; it sees the current snapshot immediately
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Handle an explicit user start action. Ignored while a countdown runs.
    pub fn request_start(&mut self) -> bool {
        if !self.countdown.start() {
            debug!("Start requested while running, ignoring");
            return false;
        }

        self.started_at = Some(Utc::now());
        info!("Countdown started: {}s", self.countdown.duration());
        self.publish();
        true
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.countdown.tick();
        match outcome {
            TickOutcome::Ignored => return outcome,
            TickOutcome::Counting { remaining } => {
                debug!("Tick: {}s remaining", remaining);
            }
            TickOutcome::Finished => {
                self.completed_runs += 1;
                info!("Countdown finished (run #{})", self.completed_runs);
                if let Err(e) = self.player.play() {
                    error!("Failed to play end-of-countdown sound: {}", e);
                }
            }
        }

        self.publish();
        outcome
    }

    pub fn is_running(&self) -> bool {
        !self.countdown.is_finished()
    }

    /// Current state, with the progress width recomputed
    pub fn snapshot(&self) -> TimerSnapshot {
        Self::build_snapshot(&self.countdown, self.started_at, self.completed_runs)
    }

    fn build_snapshot(
        countdown: &CountdownTimer,
        started_at: Option<DateTime<Utc>>,
        completed_runs: u64,
    ) -> TimerSnapshot {
        TimerSnapshot {
            duration_secs: countdown.duration(),
            remaining_secs: countdown.remaining(),
            finished: countdown.is_finished(),
            phase: countdown.phase(),
            progress_width: progress::width(countdown.remaining(), countdown.duration()),
            started_at,
            completed_runs,
        }
    }

    fn publish(&self) {
        // send_replace keeps the value even when nobody is subscribed
        self.snapshot_tx.send_replace(self.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::audio::testing::RecordingPlayer;
    use crate::state::Phase;

    fn shell(duration: u32) -> (AppShell, RecordingPlayer) {
        let player = RecordingPlayer::new();
        (AppShell::new(duration, Box::new(player.clone())), player)
    }

    #[test]
    fn starts_idle_with_full_countdown() {
        let (shell, player) = shell(20);
        let snapshot = shell.snapshot();

        assert!(snapshot.finished);
        assert!(snapshot.can_start());
        assert_eq!(snapshot.remaining_secs, 20);
        assert_eq!(snapshot.progress_width, 0.0);
        assert_eq!(snapshot.started_at, None);
        assert_eq!(player.plays(), 0);
    }

    #[test]
    fn twenty_second_scenario() {
        let (mut shell, player) = shell(20);
        assert!(shell.request_start());
        assert!(shell.snapshot().started_at.is_some());

        assert_eq!(shell.tick(), TickOutcome::Counting { remaining: 19 });
        let snapshot = shell.snapshot();
        assert_eq!(snapshot.remaining_secs, 19);
        assert_eq!(snapshot.progress_width, -5.0);
        assert!(!snapshot.can_start());

        for _ in 1..19 {
            shell.tick();
        }
        assert_eq!(player.plays(), 0);
        assert_eq!(shell.tick(), TickOutcome::Finished);

        let snapshot = shell.snapshot();
        assert_eq!(snapshot.remaining_secs, 0);
        assert_eq!(snapshot.progress_width, -100.0);
        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(snapshot.completed_runs, 1);
        assert_eq!(player.plays(), 1);

        assert_eq!(shell.tick(), TickOutcome::Ignored);
        assert_eq!(player.plays(), 1);
    }

    #[test]
    fn start_while_running_leaves_state_unchanged() {
        let (mut shell, _player) = shell(20);
        shell.request_start();
        shell.tick();
        let before = shell.snapshot();

        assert!(!shell.request_start());
        assert_eq!(shell.snapshot(), before);
    }

    #[test]
    fn subscribers_see_every_change() {
        let (mut shell, _player) = shell(3);
        let mut rx = shell.subscribe();
        assert!(!rx.has_changed().unwrap());

        shell.request_start();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().remaining_secs, 3);

        shell.tick();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().progress_width, progress::width(2, 3));
    }

    #[test]
    fn ignored_start_and_tick_do_not_notify() {
        let (mut shell, _player) = shell(3);
        let mut rx = shell.subscribe();

        shell.tick();
        assert!(!rx.has_changed().unwrap());

        shell.request_start();
        rx.borrow_and_update();
        shell.request_start();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn bookkeeping_only_moves_on_honored_transitions() {
        let (mut shell, _player) = shell(2);
        shell.tick();
        assert_eq!(shell.snapshot().started_at, None);
        assert_eq!(shell.snapshot().completed_runs, 0);

        shell.request_start();
        let started = shell.snapshot().started_at;
        assert!(started.is_some());

        shell.tick();
        assert!(!shell.request_start());
        assert_eq!(shell.snapshot().started_at, started);
        assert_eq!(shell.snapshot().completed_runs, 0);

        shell.tick();
        shell.tick();
        assert_eq!(shell.snapshot().completed_runs, 1);
        assert_eq!(shell.snapshot().started_at, started);
    }

    #[test]
    fn playback_failure_does_not_stop_the_countdown() {
        let player = RecordingPlayer::failing();
        let mut shell = AppShell::new(1, Box::new(player.clone()));
        shell.request_start();

        assert_eq!(shell.tick(), TickOutcome::Finished);
        assert_eq!(player.plays(), 1);
        assert!(!shell.is_running());
        assert!(shell.request_start());
    }

    #[test]
    fn default_labels() {
        let (shell, _player) = shell(20);
        assert_eq!(shell.labels().title, "Handwashing");
        assert_eq!(shell.labels().counter, "Time last:");
        assert_eq!(shell.labels().button, "Start");
    }
}
