//! Plot adjustment and latest-value extraction.
//!
//! Upstream figures are rendered as-is except for a handful of layout
//! tweaks. The readings shown next to each chart come from the last point
//! of the relevant series.

use serde_json::Value;

use crate::display::readings::{LatestReading, Quantity, Readings, SeriesKind};
use crate::hydro::models::{Font, Margin, Plot, PlotResponse, Series, Title};
use crate::hydro::stations::{Metric, StationMetricRequest};

pub const HOVERINFO: &str = "x+y+name";
pub const TITLE_FONT_SIZE: f64 = 24.0;
pub const TITLE_X: f64 = 0.5;
pub const MARGIN_TOP: f64 = 50.0;

/// Rewrite hover info, title and top margin in place.
///
/// Only series that already declare `hoverinfo` (even as `null`) get it
/// rewritten; series without the key are left alone.
pub fn adjust_plot(plot: &mut Plot, title: &str) {
    for series in &mut plot.data {
        if series.hoverinfo.is_some() {
            series.hoverinfo = Some(Value::from(HOVERINFO));
        }
    }

    plot.layout.title = Some(Title {
        text: title.to_string(),
        font: Some(Font {
            size: Some(TITLE_FONT_SIZE),
            ..Font::default()
        }),
        x: Some(TITLE_X),
    });

    plot.layout
        .margin
        .get_or_insert_with(Margin::default)
        .t = Some(MARGIN_TOP);
}

/// Last (time, value) pair of a series.
///
/// `None` if either array is empty or the last value is `null`.
#[must_use]
pub fn latest_point(series: &Series) -> Option<(String, f64)> {
    let x = series.x.last()?;
    let y = (*series.y.last()?)?;
    Some((time_label(x), y))
}

fn time_label(x: &Value) -> String {
    match x {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Extract the latest readings from a plot.
///
/// Temperature plots read the first series. Discharge plots scan every
/// series and keep the last point per class; a later match replaces an
/// earlier one.
#[must_use]
pub fn extract_readings(plot: &Plot, metric: Metric) -> Readings {
    let mut readings = Readings::default();

    match metric {
        Metric::Temperature => {
            if let Some((time, value)) = plot.data.first().and_then(latest_point) {
                readings.set(LatestReading::new(Quantity::Temperature, time, value));
            }
        }
        Metric::Flow => {
            for series in &plot.data {
                let Some(kind) = series.name.as_deref().and_then(SeriesKind::classify) else {
                    continue;
                };
                if let Some((time, value)) = latest_point(series) {
                    readings.set(LatestReading::new(kind.quantity(), time, value));
                }
            }
        }
    }

    readings
}

/// Run one upstream response through extraction and adjustment.
#[must_use]
pub fn transform(response: PlotResponse, request: &StationMetricRequest) -> (Plot, Readings) {
    let mut plot = response.plot;
    let readings = extract_readings(&plot, request.metric);
    adjust_plot(&mut plot, &request.title);
    (plot, readings)
}
