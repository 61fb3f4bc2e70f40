use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const LIVENESS_MESSAGE: &str = "Job fetcher service is running.";

#[derive(Serialize)]
pub struct LivenessResponse {
    message: &'static str,
}

/// Liveness endpoint
///
/// Always 200 while the process is serving. Scheduler and store health are
/// not reflected here.
pub async fn liveness_handler() -> (StatusCode, Json<LivenessResponse>) {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            message: LIVENESS_MESSAGE,
        }),
    )
}
