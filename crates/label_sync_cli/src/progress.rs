//! Spinner shown while a sync runs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use label_sync_core::SyncPhase;

/// Wraps an indicatif spinner whose message follows the sync phases.
///
/// indicatif draws to stderr and hides itself when stderr is not a terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(50));
        Self { bar }
    }

    pub fn set_phase(&self, phase: SyncPhase) {
        self.bar.set_message(phase.description());
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
