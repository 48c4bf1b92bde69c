use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::Value;

use super::json_object;
use crate::controllers::assignment_controller::AssignmentController;
use crate::dto::request_dto::RouteQuery;
use crate::dto::response_dto::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_assignment_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assignments).post(create_assignment))
        .route("/:id", put(update_assignment).delete(delete_assignment))
}

async fn create_assignment(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let controller = AssignmentController::new(&state);
    let response = controller.create(json_object(body)).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_assignments(
    State(state): State<AppState>,
    query: RouteQuery,
) -> Result<Json<Vec<Value>>, AppError> {
    let route = query.require_route()?;
    let controller = AssignmentController::new(&state);
    let response = controller.list_by_route(route).await?;
    Ok(Json(response))
}

async fn update_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, AppError> {
    let controller = AssignmentController::new(&state);
    let response = controller.update(&id, json_object(body)).await?;
    Ok(Json(response))
}

async fn delete_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = AssignmentController::new(&state);
    let response = controller.delete(&id).await?;
    Ok(Json(response))
}
