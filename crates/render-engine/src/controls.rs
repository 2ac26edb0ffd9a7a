//! User-facing controls driven by the studio and the export sequencer.

use framer_model::content::{counter_label, NavigationState};

/// Status label shown while a batch export runs.
pub const PROCESSING_STATUS: &str = "Processing...";

/// Buttons and labels the editing surface keeps in sync.
///
/// Implementations only reflect state; they never call back into the
/// session.
pub trait Controls {
    /// Enable or disable every interactive control.
    fn set_enabled(&mut self, enabled: bool);

    /// Replace the status label. An empty string clears it.
    fn set_status(&mut self, status: &str);

    /// Show the current position, `index` being 0-based.
    fn set_counter(&mut self, index: Option<usize>, len: usize);

    /// Enable or disable the previous/next buttons.
    fn set_navigation(&mut self, navigation: NavigationState);

    /// Mark the thumbnail at `index` as current.
    fn highlight(&mut self, index: Option<usize>);
}

/// Controls that ignore every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopControls;

impl Controls for NoopControls {
    fn set_enabled(&mut self, _enabled: bool) {}
    fn set_status(&mut self, _status: &str) {}
    fn set_counter(&mut self, _index: Option<usize>, _len: usize) {}
    fn set_navigation(&mut self, _navigation: NavigationState) {}
    fn highlight(&mut self, _index: Option<usize>) {}
}

/// Controls that report every change through `tracing`.
///
/// Used by the command-line tool, where there is no widget to update.
#[derive(Debug, Clone, Default)]
pub struct ConsoleControls {
    enabled: bool,
    status: String,
}

impl ConsoleControls {
    pub fn new() -> Self {
        Self {
            enabled: true,
            status: String::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

impl Controls for ConsoleControls {
    fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            tracing::debug!(enabled, "Controls toggled");
        }
        self.enabled = enabled;
    }

    fn set_status(&mut self, status: &str) {
        if !status.is_empty() {
            tracing::info!(status, "Status");
        }
        self.status = status.to_string();
    }

    fn set_counter(&mut self, index: Option<usize>, len: usize) {
        let label = counter_label(index, len);
        if !label.is_empty() {
            tracing::info!("{label}");
        }
    }

    fn set_navigation(&mut self, navigation: NavigationState) {
        tracing::trace!(
            previous = navigation.previous,
            next = navigation.next,
            "Navigation updated"
        );
    }

    fn highlight(&mut self, index: Option<usize>) {
        tracing::trace!(?index, "Selection highlighted");
    }
}
