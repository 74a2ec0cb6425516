//! Unit tests for plot adjustment and latest-value extraction.
//!
//! Run with: cargo test --test transform_unit_test

mod common;

use serde_json::json;

use river_dash::display::transform::{adjust_plot, extract_readings, latest_point, transform};
use river_dash::display::{Quantity, SeriesKind};
use river_dash::hydro::models::{Plot, PlotResponse, Series};
use river_dash::hydro::stations::{Metric, StationMetricRequest, AARE};

fn parse(value: serde_json::Value) -> PlotResponse {
    serde_json::from_value(value).expect("fixture is a valid plot document")
}

fn series(name: &str, x: &[&str], y: &[Option<f64>]) -> Series {
    Series {
        x: x.iter().map(|s| json!(s)).collect(),
        y: y.to_vec(),
        name: Some(name.to_string()),
        ..Series::default()
    }
}

#[test]
fn temperature_reads_last_point_of_first_series() {
    let plot = Plot {
        data: vec![
            series("Temperatur", &["t0", "t1", "t2"], &[Some(10.0), Some(11.0), Some(12.34)]),
            series("Other", &["t9"], &[Some(99.0)]),
        ],
        ..Plot::default()
    };

    let readings = extract_readings(&plot, Metric::Temperature);

    let temperature = readings.temperature.expect("temperature reading");
    assert_eq!(temperature.value, 12.34);
    assert_eq!(temperature.time, "t2");
    assert_eq!(temperature.unit, "°C");
    assert_eq!(temperature.quantity, Quantity::Temperature);
    assert!(readings.flow.is_none());
    assert!(readings.level.is_none());
}

#[test]
fn temperature_without_series_has_no_reading() {
    let readings = extract_readings(&Plot::default(), Metric::Temperature);
    assert!(readings.temperature.is_none());
}

#[test]
fn empty_or_null_tail_contributes_nothing() {
    assert_eq!(latest_point(&series("Temperatur", &[], &[])), None);
    assert_eq!(
        latest_point(&series("Temperatur", &["t0", "t1"], &[Some(1.0), None])),
        None
    );
    assert_eq!(
        latest_point(&series("Temperatur", &["t0"], &[Some(1.5)])),
        Some(("t0".to_string(), 1.5))
    );
}

#[test]
fn flow_classifies_series_by_name() {
    let response = parse(common::flow_plot(&[120.0, 123.45], &[501.1, 502.0]));

    let readings = extract_readings(&response.plot, Metric::Flow);

    let flow = readings.flow.expect("flow reading");
    assert_eq!(flow.value, 123.45);
    assert_eq!(flow.unit, "m³/s");
    assert_eq!(flow.time, "2024-05-01T01:10:00+02:00");

    let level = readings.level.expect("level reading");
    assert_eq!(level.value, 502.0);
    assert_eq!(level.unit, "m");

    assert!(readings.temperature.is_none());
}

#[test]
fn flow_drops_unmatched_and_empty_series() {
    let plot = Plot {
        data: vec![
            series("Niederschlag", &["t0"], &[Some(3.0)]),
            series("Abfluss", &[], &[]),
            series("Wasserstand", &["t0"], &[Some(433.2)]),
        ],
        ..Plot::default()
    };

    let readings = extract_readings(&plot, Metric::Flow);

    assert!(readings.flow.is_none());
    assert_eq!(readings.level.map(|r| r.value), Some(433.2));
}

#[test]
fn later_matching_series_replaces_earlier_one() {
    let plot = Plot {
        data: vec![
            series("Pegel alt", &["t0"], &[Some(1.0)]),
            series("Wasserstand neu", &["t1"], &[Some(2.0)]),
        ],
        ..Plot::default()
    };

    let readings = extract_readings(&plot, Metric::Flow);
    assert_eq!(readings.level.map(|r| r.value), Some(2.0));
}

#[test]
fn series_kind_substrings() {
    assert_eq!(SeriesKind::classify("Abfluss Aare"), Some(SeriesKind::Flow));
    assert_eq!(SeriesKind::classify("Pegel Aare"), Some(SeriesKind::Level));
    assert_eq!(SeriesKind::classify("Wasserstand"), Some(SeriesKind::Level));
    assert_eq!(SeriesKind::classify("abfluss"), None);
    assert_eq!(SeriesKind::classify("Temperatur"), None);
}

#[test]
fn hoverinfo_rewritten_only_where_declared() {
    let mut plot = parse(common::flow_plot(&[1.0], &[2.0])).plot;

    adjust_plot(&mut plot, "Aare");

    assert_eq!(plot.data[0].hoverinfo, Some(json!("x+y+name")));
    assert_eq!(plot.data[1].hoverinfo, None);

    let serialized = serde_json::to_value(&plot).expect("plot serializes");
    assert!(serialized["data"][1].get("hoverinfo").is_none());
    assert_eq!(serialized["data"][1]["yaxis"], "y2");
}

#[test]
fn null_or_array_hoverinfo_counts_as_declared() {
    let mut plot = parse(json!({
        "plot": {
            "data": [
                { "x": ["a"], "y": [1.0], "hoverinfo": null },
                { "x": ["a"], "y": [2.0], "hoverinfo": ["x", "y"] },
                { "x": ["a"], "y": [3.0] }
            ]
        }
    }))
    .plot;

    adjust_plot(&mut plot, "Aare");

    let serialized = serde_json::to_value(&plot).expect("plot serializes");
    assert_eq!(serialized["data"][0]["hoverinfo"], "x+y+name");
    assert_eq!(serialized["data"][1]["hoverinfo"], "x+y+name");
    assert!(serialized["data"][2].get("hoverinfo").is_none());
}

#[test]
fn layout_gets_title_and_margin() {
    let mut plot = parse(common::temperature_plot(&[12.0])).plot;

    adjust_plot(&mut plot, "Aare - Water Temperature");

    let layout = serde_json::to_value(&plot.layout).expect("layout serializes");
    assert_eq!(layout["title"]["text"], "Aare - Water Temperature");
    assert_eq!(layout["title"]["font"]["size"], 24.0);
    assert_eq!(layout["title"]["x"], 0.5);
    assert_eq!(layout["margin"]["t"], 50.0);
    assert_eq!(layout["margin"]["l"], 40);
    assert_eq!(layout["xaxis"]["type"], "date");
}

#[test]
fn margin_created_when_missing() {
    let mut plot = Plot::default();
    adjust_plot(&mut plot, "Reuss");

    let margin = plot.layout.margin.expect("margin inserted");
    assert_eq!(margin.t, Some(50.0));
}

#[test]
fn transform_uses_request_title() {
    let request = StationMetricRequest::new(AARE, Metric::Temperature);
    let (plot, readings) = transform(parse(common::temperature_plot(&[11.0, 12.5])), &request);

    assert_eq!(
        plot.layout.title.map(|t| t.text),
        Some("Aare - Water Temperature".to_string())
    );
    assert_eq!(plot.data[0].hoverinfo, Some(json!("x+y+name")));
    assert_eq!(readings.temperature.map(|r| r.value), Some(12.5));
}
