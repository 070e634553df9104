use crate::api::responses::HealthResponse;
use axum::Json;

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
