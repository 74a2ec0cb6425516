//! HTTP client tests against a local stand-in for hydrodaten.
//!
//! Run with: cargo test --test hydro_client_test

mod common;

use axum::{routing::get, Json, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use river_dash::config::Config;
use river_dash::error::AppError;
use river_dash::hydro::stations::Metric;
use river_dash::hydro::{HydroClient, PlotSource};

/// Serve a temperature plot for 2135, a garbage flow body for 2135, 404 for everything else.
async fn spawn_upstream() -> SocketAddr {
    let router = Router::new()
        .route(
            "/plots/temperature_7days/2135_temperature_7days_de.json",
            get(|| async { Json(common::temperature_plot(&[11.9, 12.34])) }),
        )
        .route(
            "/plots/p_q_7days/2135_p_q_7days_de.json",
            get(|| async { "not json" }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(base_url: String) -> HydroClient {
    HydroClient::new(&Config {
        hydro_base_url: base_url,
        hydro_timeout_seconds: 5,
        ..Config::default()
    })
    .unwrap()
}

#[tokio::test]
async fn plot_body_decodes() {
    let client = client_for(format!("http://{}", spawn_upstream().await));

    let response = client.get_plot("2135", Metric::Temperature).await.unwrap();

    let series = &response.plot.data[0];
    assert_eq!(series.name.as_deref(), Some("Temperatur"));
    assert_eq!(series.y.last(), Some(&Some(12.34)));
}

#[tokio::test]
async fn error_status_is_network_error() {
    let client = client_for(format!("http://{}/", spawn_upstream().await));

    let err = client.get_plot("2152", Metric::Temperature).await.unwrap_err();

    match err {
        AppError::Network(msg) => assert!(msg.contains("404"), "{msg}"),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_parse_error() {
    let client = client_for(format!("http://{}", spawn_upstream().await));

    let err = client.get_plot("2135", Metric::Flow).await.unwrap_err();

    assert!(matches!(err, AppError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    // Bind then drop so the port is known to be closed
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(format!("http://{addr}"));

    let err = client.get_plot("2135", Metric::Temperature).await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)), "got {err:?}");
}
