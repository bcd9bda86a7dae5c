//! Phase progress display for batch decoding and export

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates one progress bar per processing phase
///
/// Bars may be advanced from worker threads; finished phases stay visible
/// until [`ProgressManager::finish`].
pub struct ProgressManager {
    multi_progress: MultiProgress,
    phase_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            phase_bars: Vec::new(),
        }
    }

    /// Start a phase with a known number of steps
    pub fn start_phase(&mut self, label: &str, steps: usize) {
        if let Some(previous) = self.phase_bars.last() {
            previous.finish();
        }
        let bar = ProgressBar::new(steps as u64);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.phase_bars.push(self.multi_progress.add(bar));
    }

    /// Record one completed step of the current phase
    pub fn advance(&self) {
        if let Some(bar) = self.phase_bars.last() {
            bar.inc(1);
        }
    }

    /// Steps completed in the current phase
    pub fn position(&self) -> u64 {
        self.phase_bars.last().map_or(0, ProgressBar::position)
    }

    /// Number of phases started so far
    pub fn phase_count(&self) -> usize {
        self.phase_bars.len()
    }

    /// Close every bar
    pub fn finish(&self) {
        for bar in &self.phase_bars {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }
}
