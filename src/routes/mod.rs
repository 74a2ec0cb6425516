pub mod dashboard;
pub mod display;
pub mod health;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        display::get_display,
        display::list_stations,
        display::get_station,
    ),
    components(
        schemas(
            crate::display::DisplayState,
            crate::display::GraphSlot,
            crate::display::ValueSlot,
            crate::display::Quantity,
            crate::hydro::stations::Metric,
            display::StationResponse,
            display::StationDetailResponse,
            display::PlotSourceResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "display", description = "Dashboard state"),
        (name = "stations", description = "Monitored gauges"),
    ),
    info(
        title = "River Dash API",
        description = "Live river temperature and discharge from hydrodaten.admin.ch",
        version = "0.1.0"
    )
)]
struct ApiDoc;

/// Build the application router.
///
/// Requests without an `X-Forwarded-For`/`X-Real-IP` header are keyed by peer
/// address, so serve with `into_make_service_with_connect_info` unless rate
/// limiting is disabled.
pub fn build_router(state: AppState) -> Router {
    let config = &state.config;

    let api_routes_base = Router::new()
        .route("/display", get(display::get_display))
        .route("/stations", get(display::list_stations))
        .route("/stations/{station}", get(display::get_station));

    let limiter = if config.disable_rate_limiting {
        tracing::warn!("Rate limiting DISABLED");
        None
    } else {
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
    };

    let api_routes = match limiter {
        Some(limiter) => {
            tracing::info!(
                rate = %format!("{}/s burst {}", config.rate_limit_per_second, config.rate_limit_burst),
                "Rate limiting configured"
            );
            api_routes_base.layer(GovernorLayer {
                config: Arc::new(limiter),
            })
        }
        None => {
            if !config.disable_rate_limiting {
                tracing::warn!(
                    per_second = config.rate_limit_per_second,
                    burst = config.rate_limit_burst,
                    "Invalid rate limit settings, rate limiting DISABLED"
                );
            }
            api_routes_base
        }
    }
    .layer(RequestBodyLimitLayer::new(64 * 1024));

    // Page and health check (NO rate limiting)
    let page_routes = Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/healthz", get(health::healthz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .merge(docs_routes)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
