use chrono::Local;
use futures::future::join_all;

use crate::display::transform::transform;
use crate::display::{DisplayState, Tile};
use crate::hydro::stations::{refresh_requests, StationMetricRequest};
use crate::hydro::PlotSource;

/// Fetch and transform a single station/metric plot.
///
/// Failures are kept in the tile rather than propagated, so one bad
/// upstream document only blanks its own chart.
pub async fn fetch_tile(source: &dyn PlotSource, request: StationMetricRequest) -> Tile {
    let outcome = source
        .get_plot(&request.station_id, request.metric)
        .await
        .map(|response| transform(response, &request));

    match &outcome {
        Ok((plot, readings)) => tracing::debug!(
            station = %request.station_name,
            metric = request.metric.as_str(),
            series = plot.data.len(),
            temperature = ?readings.temperature.as_ref().map(|r| r.value),
            flow = ?readings.flow.as_ref().map(|r| r.value),
            level = ?readings.level.as_ref().map(|r| r.value),
            "Plot refreshed"
        ),
        Err(e) => tracing::warn!(
            station = %request.station_name,
            metric = request.metric.as_str(),
            error = %e,
            "Plot unavailable, showing placeholder"
        ),
    }

    Tile { request, outcome }
}

/// Run one full refresh cycle.
///
/// All four plots are fetched concurrently and the state is only built once
/// every request has finished. `Last updated` is the time the last plot
/// arrived.
pub async fn refresh_once(source: &dyn PlotSource) -> DisplayState {
    let tiles = join_all(
        refresh_requests()
            .into_iter()
            .map(|request| fetch_tile(source, request)),
    )
    .await;
    let completed_at = Local::now();

    let failed = tiles.iter().filter(|t| t.outcome.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, total = tiles.len(), "Refresh completed with unavailable plots");
    } else {
        tracing::info!(total = tiles.len(), "Refresh completed");
    }

    DisplayState::build(tiles, completed_at)
}
