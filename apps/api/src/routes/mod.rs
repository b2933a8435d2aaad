pub mod health;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::analysis::handlers;
use crate::state::AppState;

/// Request headers browsers may send cross-origin.
const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/analyze-resume",
            post(handlers::handle_analyze_resume).options(handlers::handle_preflight),
        )
        .with_state(state)
        // Outermost layers, so router-generated 404/405 responses get them too.
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
}
