//! Progress display while host frames are rendered

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} frames ({elapsed})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over the frames of one preview render
pub struct RenderProgress {
    bar: ProgressBar,
}

impl RenderProgress {
    /// Create a bar for `total_frames` frames labelled with `name`
    pub fn new(name: &str, total_frames: usize) -> Self {
        let bar = ProgressBar::new(total_frames as u64);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_prefix(name.to_string());
        Self { bar }
    }

    /// Create a bar that draws nothing, for quiet runs
    pub fn hidden(total_frames: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total_frames as u64);
        Self { bar }
    }

    /// Mark one more frame as rendered
    pub fn frame_rendered(&self) {
        self.bar.inc(1);
    }

    /// Frames rendered so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
