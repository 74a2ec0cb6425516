pub mod format;
pub mod readings;
pub mod state;
pub mod transform;

pub use readings::{LatestReading, Quantity, Readings, SeriesKind};
pub use state::{DisplayState, GraphSlot, Tile, ValueSlot};
