//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, Request, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.config.cors_origins);

    let quantum_routes = Router::new()
        .route(
            "/submit",
            post(api::submit::submit).fallback(api::method_not_allowed),
        )
        .route(
            "/status",
            get(api::status::status).fallback(api::method_not_allowed),
        )
        .route(
            "/results",
            get(api::results::results).fallback(api::method_not_allowed),
        );

    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .nest("/quantum", quantum_routes);

    // Spans record the path only: query strings carry caller tokens.
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
        )
    });

    Router::new()
        .nest("/api", api_routes)
        .layer(ServiceBuilder::new().layer(trace).layer(cors))
        .with_state(state)
}

/// CORS for a comma-separated origin list, or `*` for any origin.
fn build_cors_layer(origins: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.trim() == "*" {
        layer.allow_origin(Any)
    } else {
        let allowed: Vec<HeaderValue> = origins
            .split(',')
            .filter_map(|o| o.trim().parse().ok())
            .collect();
        layer.allow_origin(allowed)
    }
}
