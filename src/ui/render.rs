//! Frame rendering for the terminal and JSON outputs

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::state::{progress, Labels, TimerSnapshot};

const BAR_WIDTH: usize = 30;
const BAR_FULL: char = '█';
const BAR_EMPTY: char = '░';

/// Something that draws snapshots
pub trait Renderer: Send {
    fn draw(&mut self, snapshot: &TimerSnapshot, labels: &Labels, frame: &str) -> io::Result<()>;

    /// Whether the renderer wants to redraw on animation frames
    fn animates(&self) -> bool {
        true
    }
}

/// Progress bar of [`BAR_WIDTH`] cells filled by the magnitude of the width
pub fn render_bar(progress_width: f64) -> String {
    let filled = (progress::fill_ratio(progress_width) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);

    let mut bar = String::with_capacity(BAR_WIDTH * 3 + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(BAR_FULL).take(filled));
    bar.extend(std::iter::repeat(BAR_EMPTY).take(BAR_WIDTH - filled));
    bar.push(']');
    bar
}

/// Build the full text of one frame
pub fn render_frame(snapshot: &TimerSnapshot, labels: &Labels, frame: &str) -> String {
    let button = if snapshot.can_start() {
        format!("[ {} ]  press Enter", labels.button)
    } else {
        format!("( {} )  washing...", labels.button)
    };

    format!(
        "{}\n\n{} \t{}\n{}\n\n{}\n\n{}\n",
        labels.title,
        labels.counter,
        snapshot.remaining_secs,
        render_bar(snapshot.progress_width),
        button,
        frame,
    )
}

/// Redraws the whole screen on every change and animation frame
pub struct TerminalRenderer<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, snapshot: &TimerSnapshot, labels: &Labels, frame: &str) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        self.out.write_all(render_frame(snapshot, labels, frame).as_bytes())?;
        self.out.flush()
    }
}

/// Writes one JSON object per state change
pub struct JsonRenderer<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> Renderer for JsonRenderer<W> {
    fn draw(&mut self, snapshot: &TimerSnapshot, _labels: &Labels, _frame: &str) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    fn animates(&self) -> bool {
        false
    }
}
