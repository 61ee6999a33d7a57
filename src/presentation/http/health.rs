use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResp {
    pub status: &'static str,
}

// Liveness only; collaborators are not probed
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, body = HealthResp))
)]
pub async fn health() -> Json<HealthResp> {
    Json(HealthResp { status: "healthy" })
}

pub fn routes() -> Router {
    Router::new().route("/health", get(health))
}
