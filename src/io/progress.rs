//! Progress display for debug rendering passes

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

use crate::io::draw::{Color, LineSink};
use crate::spatial::Vec3;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix:<10} {pos} lines {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates one spinner per rendering stage
///
/// Each stage wraps the destination sink in a [`TrackedSink`] that counts the
/// lines passing through it.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    stage_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to the terminal
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            stage_bars: Vec::new(),
        }
    }

    /// Create a progress manager that tracks counts without drawing
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            stage_bars: Vec::new(),
        }
    }

    /// Begin a named stage, returning a sink that forwards to `sink`
    pub fn track<'a, S>(&mut self, stage: &str, sink: &'a mut S) -> TrackedSink<'a, S>
    where
        S: LineSink + ?Sized,
    {
        let bar = self.multi_progress.add(ProgressBar::new_spinner());
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(stage.to_string());
        self.stage_bars.push(bar.clone());

        TrackedSink { inner: sink, bar }
    }

    /// Number of stages started so far
    pub fn stage_count(&self) -> usize {
        self.stage_bars.len()
    }

    /// Lines counted by a stage
    pub fn stage_lines(&self, stage: usize) -> Option<u64> {
        self.stage_bars.get(stage).map(ProgressBar::position)
    }

    /// Mark every stage as done and clear the display
    pub fn finish(&self) {
        for bar in &self.stage_bars {
            bar.finish_with_message("done");
        }
        let _ = self.multi_progress.clear();
    }
}

/// Line sink that counts forwarded lines on a progress bar
pub struct TrackedSink<'a, S: ?Sized> {
    inner: &'a mut S,
    bar: ProgressBar,
}

impl<S> TrackedSink<'_, S>
where
    S: ?Sized,
{
    /// Lines forwarded so far
    pub fn lines(&self) -> u64 {
        self.bar.position()
    }
}

impl<S> LineSink for TrackedSink<'_, S>
where
    S: LineSink + ?Sized,
{
    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color) {
        self.inner.draw_line(from, to, color);
        self.bar.inc(1);
    }
}
