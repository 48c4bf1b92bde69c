use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::Value;

use crate::controllers::route_controller::RouteController;
use crate::dto::response_dto::CreatedResponse;
use crate::models::route::RouteSummary;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new().route("/", get(list_routes).post(save_route))
}

async fn list_routes(State(state): State<AppState>) -> Result<Json<Vec<RouteSummary>>, AppError> {
    let controller = RouteController::new(&state);
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn save_route(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let controller = RouteController::new(&state);
    let response = controller.save(body.map(|Json(value)| value)).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
