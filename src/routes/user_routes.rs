use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

use crate::controllers::user_controller::UserController;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let controller = UserController::new(&state);
    let response = controller.list().await?;
    Ok(Json(response))
}
