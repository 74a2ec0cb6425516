use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::hydro::models::PlotResponse;
use crate::hydro::stations::Metric;

/// Build the plot JSON URL for a station and metric.
///
/// `https://www.hydrodaten.admin.ch/plots/p_q_7days/2135_p_q_7days_de.json`
#[must_use]
pub fn plot_url(base_url: &str, station_id: &str, metric: Metric) -> String {
    let family = metric.plot_family();
    format!(
        "{}/plots/{family}/{station_id}_{family}_de.json",
        base_url.trim_end_matches('/')
    )
}

/// Source of upstream plot documents.
#[async_trait]
pub trait PlotSource: Send + Sync {
    async fn get_plot(&self, station_id: &str, metric: Metric) -> AppResult<PlotResponse>;
}

pub struct HydroClient {
    http_client: Client,
    base_url: String,
}

impl HydroClient {
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.hydro_timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.hydro_base_url.clone(),
        })
    }
}

#[async_trait]
impl PlotSource for HydroClient {
    /// Fetch one 7-day plot for a station.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Network` if the request fails or returns an error status,
    /// and `AppError::Parse` if the body is not a plot document.
    async fn get_plot(&self, station_id: &str, metric: Metric) -> AppResult<PlotResponse> {
        let url = plot_url(&self.base_url, station_id, metric);
        tracing::debug!(%url, "Fetching plot");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "HTTP {} for {url}",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to get response text: {e}")))?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                %url,
                body_preview = %text.chars().take(500).collect::<String>(),
                "Failed to parse plot response"
            );
            AppError::Parse(format!("Failed to parse response: {e}"))
        })
    }
}
