//! Render task: redraws on every published snapshot and animation frame

use std::{io, time::Duration};
use tokio::{
    sync::watch,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    state::{Labels, TimerSnapshot},
    ui::{Animation, Renderer},
};

/// Draw until the snapshot publisher goes away
pub async fn render_task(
    mut snapshots: watch::Receiver<TimerSnapshot>,
    labels: Labels,
    mut renderer: Box<dyn Renderer>,
    frame_period: Duration,
) -> io::Result<()> {
    info!("Starting render task");

    let animate = renderer.animates();
    let mut animation = Animation::new();
    let mut frames = interval(frame_period);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let initial = snapshots.borrow_and_update().clone();
    renderer.draw(&initial, &labels, animation.current())?;

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    debug!("Snapshot publisher closed, stopping render task");
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                renderer.draw(&snapshot, &labels, animation.current())?;
            }

            _ = frames.tick(), if animate => {
                let frame = animation.advance();
                let snapshot = snapshots.borrow().clone();
                renderer.draw(&snapshot, &labels, frame)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        services::audio::testing::RecordingPlayer,
        state::AppShell,
        ui::JsonRenderer,
    };
    use std::{
        io::Write,
        sync::{Arc, Mutex},
    };

    /// Shared in-memory sink so the test can read what was written
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn lines(&self) -> Vec<TimerSnapshot> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    #[tokio::test]
    async fn json_output_follows_state_changes_until_shell_is_dropped() {
        let mut shell = AppShell::new(2, Box::new(RecordingPlayer::new()));
        let buf = SharedBuf::default();
        let task = tokio::spawn(render_task(
            shell.subscribe(),
            shell.labels().clone(),
            Box::new(JsonRenderer::new(buf.clone())),
            Duration::from_millis(50),
        ));
        tokio::task::yield_now().await;

        shell.request_start();
        tokio::task::yield_now().await;
        shell.tick();
        tokio::task::yield_now().await;
        shell.tick();
        drop(shell);

        task.await.unwrap().unwrap();

        let written = buf.lines();
        let first = written.first().unwrap();
        let last = written.last().unwrap();
        assert!(first.finished);
        assert_eq!(first.remaining_secs, 2);
        assert!(last.finished);
        assert_eq!(last.remaining_secs, 0);
        assert_eq!(last.completed_runs, 1);
    }
}
