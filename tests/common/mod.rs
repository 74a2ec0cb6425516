//! Shared fixtures: upstream-shaped plot documents and a canned plot source.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;

use river_dash::error::{AppError, AppResult};
use river_dash::hydro::models::PlotResponse;
use river_dash::hydro::stations::Metric;
use river_dash::hydro::PlotSource;

pub fn temperature_plot(values: &[f64]) -> Value {
    let x: Vec<String> = (0..values.len())
        .map(|i| format!("2024-05-01T{:02}:00:00+02:00", i))
        .collect();
    json!({
        "plot": {
            "data": [
                {
                    "x": x,
                    "y": values,
                    "name": "Temperatur",
                    "mode": "lines",
                    "hoverinfo": "y"
                }
            ],
            "layout": {
                "title": "Wassertemperatur",
                "margin": { "l": 40, "r": 20, "t": 80, "b": 40 },
                "xaxis": { "type": "date" }
            }
        }
    })
}

pub fn flow_plot(flow: &[f64], level: &[f64]) -> Value {
    let times = |n: usize| -> Vec<String> {
        (0..n)
            .map(|i| format!("2024-05-01T{:02}:10:00+02:00", i))
            .collect()
    };
    json!({
        "plot": {
            "data": [
                {
                    "x": times(flow.len()),
                    "y": flow,
                    "name": "Abfluss Aare",
                    "hoverinfo": "y+name"
                },
                {
                    "x": times(level.len()),
                    "y": level,
                    "name": "Pegel Aare",
                    "yaxis": "y2"
                }
            ],
            "layout": {
                "title": { "text": "Abfluss und Pegel", "font": { "size": 14 } }
            }
        }
    })
}

/// Plot source serving fixed JSON documents; unknown requests fail with a network error.
#[derive(Default)]
pub struct FixedSource {
    responses: HashMap<(String, Metric), Value>,
}

impl FixedSource {
    pub fn with(mut self, station_id: &str, metric: Metric, body: Value) -> Self {
        self.responses.insert((station_id.to_string(), metric), body);
        self
    }

    /// All four dashboard plots with plausible values.
    pub fn complete() -> Self {
        Self::default()
            .with("2135", Metric::Temperature, temperature_plot(&[11.9, 12.34]))
            .with("2135", Metric::Flow, flow_plot(&[120.0, 123.45], &[501.1, 502.0]))
            .with("2152", Metric::Temperature, temperature_plot(&[14.06]))
            .with("2152", Metric::Flow, flow_plot(&[88.8], &[398.456]))
    }
}

#[async_trait]
impl PlotSource for FixedSource {
    async fn get_plot(&self, station_id: &str, metric: Metric) -> AppResult<PlotResponse> {
        let body = self
            .responses
            .get(&(station_id.to_string(), metric))
            .ok_or_else(|| AppError::Network(format!("HTTP 404 Not Found for {station_id}")))?;
        serde_json::from_value(body.clone())
            .map_err(|e| AppError::Parse(format!("Failed to parse response: {e}")))
    }
}
