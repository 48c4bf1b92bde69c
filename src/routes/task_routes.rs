use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde_json::Value;

use super::json_object;
use crate::controllers::task_controller::TaskController;
use crate::dto::request_dto::RouteQuery;
use crate::dto::response_dto::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_task_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/:id", delete(delete_task))
}

async fn list_tasks(
    State(state): State<AppState>,
    query: RouteQuery,
) -> Result<Json<Vec<Value>>, AppError> {
    let route = query.require_route()?;
    let controller = TaskController::new(&state);
    let response = controller.list_by_route(route).await?;
    Ok(Json(response))
}

async fn create_task(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let controller = TaskController::new(&state);
    let response = controller.create(json_object(body)).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: RouteQuery,
) -> Result<Json<MessageResponse>, AppError> {
    let route = query.require_route()?;
    let controller = TaskController::new(&state);
    let response = controller.delete(&id, route).await?;
    Ok(Json(response))
}
