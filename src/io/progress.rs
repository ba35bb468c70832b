//! Progress display over the paintings of a run

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static GALLERY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Paintings: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many paintings of a run are finished
///
/// A single bar is shown; its message names the painting in progress and,
/// once it is written, the file it went to.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
        }
    }

    /// Show a bar for `painting_count` paintings
    pub fn initialize(&mut self, painting_count: usize) {
        let bar = ProgressBar::new(painting_count as u64);
        bar.set_style(GALLERY_STYLE.clone());
        self.bar = Some(bar);
        self.completed = 0;
    }

    /// Announce the painting being worked on
    pub fn start_painting(&self, name: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("Artist working... ({name})"));
        }
    }

    /// Record a written painting
    pub fn complete_painting(&mut self, path: &Path) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            bar.set_message(format!("✓ {}", path.display()));
        }
    }

    /// Paintings completed since the last initialization
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Leave the finished bar on screen
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All paintings saved");
        }
    }
}
