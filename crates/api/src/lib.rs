//! HTTP greeting service with observability.
//!
//! Serves a fixed JSON greeting at `GET /hello`, alongside health and
//! Prometheus metrics endpoints, with structured logging (tracing).

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes registered.
///
/// `/hello` only answers `GET`; other methods get `405` from the method
/// router and unknown paths fall through to a JSON `404`.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/hello", get(routes::hello::get))
        .route("/health", get(routes::health::check))
        .merge(metrics_router)
        .fallback(routes::fallback::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
