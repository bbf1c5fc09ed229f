//! Stage progress display for a single mosaic run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Shows which pipeline stage is currently running
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a stage spinner with steady ticking
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(STAGE_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Announce the stage that is starting
    pub fn stage(&self, message: &'static str) {
        self.bar.set_message(message);
    }

    /// Clear the spinner once the run completes
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
