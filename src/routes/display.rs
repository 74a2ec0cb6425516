use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::common::AppState;
use crate::display::{DisplayState, ValueSlot};
use crate::error::{AppError, AppResult};
use crate::hydro::client::plot_url;
use crate::hydro::stations::{find_station, Metric, Station, STATIONS};

/// Current dashboard state
///
/// Returns the charts, formatted values and timestamp of the most recent
/// refresh cycle.
#[utoipa::path(
    get,
    path = "/api/display",
    responses(
        (status = 200, description = "Display state of the latest refresh", body = DisplayState),
        (status = 503, description = "First refresh has not completed yet"),
    ),
    tag = "display"
)]
pub async fn get_display(State(state): State<AppState>) -> AppResult<Json<Arc<DisplayState>>> {
    state
        .current_display()
        .map(Json)
        .ok_or_else(|| AppError::ServiceUnavailable("Display not loaded yet".to_string()))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StationResponse {
    pub id: String,
    pub name: String,
    pub plots: Vec<PlotSourceResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlotSourceResponse {
    pub metric: Metric,
    /// Upstream URL the plot is fetched from
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StationDetailResponse {
    #[serde(flatten)]
    pub station: StationResponse,
    /// Latest formatted values, empty before the first refresh
    pub values: Vec<ValueSlot>,
}

fn station_response(station: Station, base_url: &str) -> StationResponse {
    StationResponse {
        id: station.id.to_string(),
        name: station.name.to_string(),
        plots: Metric::ALL
            .into_iter()
            .map(|metric| PlotSourceResponse {
                metric,
                url: plot_url(base_url, station.id, metric),
            })
            .collect(),
    }
}

/// List monitored stations
#[utoipa::path(
    get,
    path = "/api/stations",
    responses(
        (status = 200, description = "Stations retrieved successfully", body = Vec<StationResponse>),
    ),
    tag = "stations"
)]
pub async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    Json(
        STATIONS
            .into_iter()
            .map(|s| station_response(s, &state.config.hydro_base_url))
            .collect(),
    )
}

/// Get a station with its latest values
#[utoipa::path(
    get,
    path = "/api/stations/{station}",
    params(
        ("station" = String, Path, description = "Station id or name"),
    ),
    responses(
        (status = 200, description = "Station retrieved successfully", body = StationDetailResponse),
        (status = 404, description = "Station not found"),
    ),
    tag = "stations"
)]
pub async fn get_station(
    State(state): State<AppState>,
    Path(station): Path<String>,
) -> AppResult<Json<StationDetailResponse>> {
    let station = find_station(&station)
        .ok_or_else(|| AppError::NotFound(format!("Station '{station}' not found")))?;

    let prefix = format!("{}-", station.name.to_lowercase());
    let values = state
        .current_display()
        .map(|display| {
            display
                .values
                .iter()
                .filter(|v| v.id.starts_with(&prefix))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    Ok(Json(StationDetailResponse {
        station: station_response(station, &state.config.hydro_base_url),
        values,
    }))
}
