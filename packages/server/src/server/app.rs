//! Application setup and server configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::routes::liveness_handler;

/// Build the Axum application router
pub fn build_app() -> Router {
    Router::new()
        .route("/", get(liveness_handler))
        .layer(TraceLayer::new_for_http())
}
