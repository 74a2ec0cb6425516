use std::sync::Arc;
use tokio::sync::watch;

use crate::config::Config;
use crate::display::DisplayState;

/// Latest published display state; `None` until the first refresh completes.
pub type SharedDisplay = Option<Arc<DisplayState>>;

/// Write side of the display cell, owned by the refresh scheduler.
pub type DisplayPublisher = watch::Sender<SharedDisplay>;

/// Create the single-owner display cell.
///
/// The scheduler replaces the whole state each cycle; readers only ever see
/// a complete `DisplayState`.
#[must_use]
pub fn display_channel() -> (DisplayPublisher, watch::Receiver<SharedDisplay>) {
    watch::channel(None)
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub display: watch::Receiver<SharedDisplay>,
}

impl AppState {
    pub fn new(config: Config, display: watch::Receiver<SharedDisplay>) -> Self {
        Self {
            config: Arc::new(config),
            display,
        }
    }

    /// Snapshot of the currently published display state.
    #[must_use]
    pub fn current_display(&self) -> SharedDisplay {
        self.display.borrow().clone()
    }
}
