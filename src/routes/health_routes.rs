use axum::{extract::State, routing::get, Json, Router};

use crate::dto::response_dto::HealthResponse;
use crate::state::AppState;
use crate::utils::now_iso;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Endpoint de salud; no consulta el almacén
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        variant: state.config.api_variant.as_str(),
        store: state.store.backend_name(),
        timestamp: now_iso(),
    })
}
