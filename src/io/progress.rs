//! Per-image progress display

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STRATEGY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>14} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows one progress bar per strategy with the current image id
///
/// Created only when the user hasn't asked for quiet output; the pipeline
/// holds an `Option` of this and all calls no-op when absent.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Begin a bar for one strategy over `image_count` images
    pub fn start_strategy(&mut self, label: &str, image_count: usize) {
        let bar = ProgressBar::new(image_count as u64);
        bar.set_style(STRATEGY_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.bar = Some(bar);
    }

    /// Report the image currently being measured
    pub fn image_started(&self, id: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(id.to_string());
            bar.inc(1);
        }
    }

    /// Close out the current strategy's bar
    pub fn finish_strategy(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
