use chrono::{DateTime, Local};
use serde::Serialize;
use utoipa::ToSchema;

use crate::display::format::{format_last_updated, format_reading};
use crate::display::readings::{Quantity, Readings};
use crate::error::AppResult;
use crate::hydro::models::Plot;
use crate::hydro::stations::{Metric, StationMetricRequest};

/// Result of fetching and transforming one station/metric plot.
#[derive(Debug)]
pub struct Tile {
    pub request: StationMetricRequest,
    pub outcome: AppResult<(Plot, Readings)>,
}

/// Everything the dashboard shows, rebuilt from scratch on every refresh.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DisplayState {
    /// One chart per station and metric
    pub graphs: Vec<GraphSlot>,
    /// Formatted latest values, per station: temperature, flow, level
    pub values: Vec<ValueSlot>,
    /// `Last updated: <local date-time>`
    pub last_updated: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GraphSlot {
    /// Slot identifier, e.g. `aare-flow`
    pub id: String,
    pub station: String,
    pub metric: Metric,
    /// Adjusted Plotly figure, absent if the upstream fetch failed
    #[schema(value_type = Option<Object>)]
    pub figure: Option<Plot>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValueSlot {
    /// Slot identifier, e.g. `reuss-level`
    pub id: String,
    pub label: String,
    pub quantity: Quantity,
    /// Display text such as `12.3 °C`, or `N/A`
    pub text: String,
    /// Upstream timestamp of the reading
    pub time: Option<String>,
}

/// Quantities read off a plot of the given metric, in display order.
#[must_use]
pub fn quantities_for(metric: Metric) -> &'static [Quantity] {
    match metric {
        Metric::Temperature => &[Quantity::Temperature],
        Metric::Flow => &[Quantity::FlowRate, Quantity::WaterLevel],
    }
}

impl DisplayState {
    /// Assemble a display state from the tiles of one refresh cycle.
    ///
    /// A failed tile yields an empty graph carrying the error and `N/A` for
    /// each of its values.
    #[must_use]
    pub fn build(tiles: Vec<Tile>, now: DateTime<Local>) -> Self {
        let mut graphs = Vec::with_capacity(tiles.len());
        let mut values = Vec::new();

        for Tile { request, outcome } in tiles {
            let slot_id = request.slot_id();
            let (figure, readings, error) = match outcome {
                Ok((plot, readings)) => (Some(plot), readings, None),
                Err(e) => (None, Readings::default(), Some(e.to_string())),
            };

            for &quantity in quantities_for(request.metric) {
                let reading = readings.get(quantity);
                values.push(ValueSlot {
                    id: format!("{}-{}", request.station_name.to_lowercase(), quantity.label()),
                    label: format!("{} {}", request.station_name, quantity.label()),
                    quantity,
                    text: format_reading(reading),
                    time: reading.map(|r| r.time.clone()),
                });
            }

            graphs.push(GraphSlot {
                id: slot_id,
                station: request.station_name,
                metric: request.metric,
                figure,
                error,
            });
        }

        Self {
            graphs,
            values,
            last_updated: format_last_updated(now),
        }
    }
}
