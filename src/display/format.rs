use chrono::{DateTime, Local};

use crate::display::readings::{LatestReading, Quantity};

/// Placeholder for a reading that is absent from the current refresh.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a value with the precision and unit of its quantity.
#[must_use]
pub fn format_value(quantity: Quantity, value: f64) -> String {
    format!(
        "{value:.prec$} {unit}",
        prec = quantity.precision(),
        unit = quantity.unit()
    )
}

/// Format an optional reading, falling back to `N/A`.
#[must_use]
pub fn format_reading(reading: Option<&LatestReading>) -> String {
    reading.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |r| format_value(r.quantity, r.value),
    )
}

#[must_use]
pub fn format_last_updated(now: DateTime<Local>) -> String {
    format!("Last updated: {}", now.format("%Y-%m-%d %H:%M:%S"))
}
