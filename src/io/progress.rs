//! Stage progress reporting for the batch pipeline

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display across the pipeline stages
///
/// One bar spans the whole run; the message shows the stage currently
/// executing.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress manager for the given number of stages
    pub fn new(stage_count: usize) -> Self {
        let bar = ProgressBar::new(stage_count as u64);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Announce the stage about to execute
    pub fn start_stage(&self, name: &str) {
        self.bar.set_message(name.to_owned());
    }

    /// Mark the current stage as completed
    pub fn complete_stage(&self) {
        self.bar.inc(1);
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message("pipeline complete");
    }
}
