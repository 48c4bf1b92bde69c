//! Rutas HTTP
//!
//! Este módulo arma el router principal de la API.

pub mod assignment_routes;
pub mod health_routes;
pub mod route_routes;
pub mod task_routes;
pub mod user_routes;
pub mod vehicle_routes;

use axum::{Json, Router};
use serde_json::Value;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;
use crate::store::Document;

/// Crear el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .merge(health_routes::create_health_router())
        .nest("/api/tasks", task_routes::create_task_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/users", user_routes::create_user_router())
        .nest("/api/routes", route_routes::create_route_router())
        .nest("/api/assignments", assignment_routes::create_assignment_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Cuerpo JSON como objeto; un cuerpo ausente, inválido o que no es objeto
/// se trata como `{}` y lo rechazan después las validaciones de campos
pub(crate) fn json_object(body: Option<Json<Value>>) -> Document {
    match body {
        Some(Json(Value::Object(map))) => map,
        _ => Document::new(),
    }
}
