//! Terminal progress display for a running solve

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:40.cyan/blue}] {pos}/{len} cells {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the cells of one grid
///
/// Tracks collapsed cells; cells lost to contradictions are shown in the
/// message so a stalled bar is explained.
pub struct SolveProgress {
    bar: ProgressBar,
}

impl SolveProgress {
    /// Create a visible bar for `cells` cells labelled with `name`
    pub fn new(name: &str, cells: usize) -> Self {
        let bar = ProgressBar::new(cells as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(name.to_string());
        Self { bar }
    }

    /// Create a bar that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Report the current number of collapsed and contradictory cells
    pub fn update(&self, collapsed: usize, contradictions: usize) {
        self.bar.set_position(collapsed as u64);
        if contradictions > 0 {
            self.bar
                .set_message(format!("({contradictions} contradictions)"));
        }
    }

    /// Current position of the bar
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish and remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
