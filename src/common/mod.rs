pub mod state;

pub use state::{display_channel, AppState, DisplayPublisher, SharedDisplay};
