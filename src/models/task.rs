//! Modelo de Task
//!
//! En la variante admin cada ruta tiene su propia colección `tasks_<ruta>`.
//! La variante legacy escribe en la colección plana `tasks`, que los
//! endpoints de lectura y borrado no consultan.

use serde_json::Value;

use super::pick_fields;
use crate::config::ApiVariant;
use crate::store::Document;
use crate::utils::errors::AppResult;
use crate::utils::now_iso;
use crate::utils::validation::{collection_for_route, require_fields, route_segment};

pub const TASK_COLLECTION_PREFIX: &str = "tasks_";
pub const LEGACY_TASK_COLLECTION: &str = "tasks";

const ADMIN_REQUIRED: &[&str] = &["title", "description", "dueDate", "route"];
const ADMIN_REQUIRED_MESSAGE: &str = "Task title, description, due date, and route are required";
const LEGACY_REQUIRED: &[&str] = &["name", "route"];
const LEGACY_REQUIRED_MESSAGE: &str = "Task name and route are required";

/// Colección de tareas de una ruta
pub fn route_collection(route: &str) -> AppResult<String> {
    collection_for_route(TASK_COLLECTION_PREFIX, route)
}

/// Tarea validada, lista para guardarse
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub collection: String,
    pub document: Document,
}

impl NewTask {
    pub fn from_request(variant: ApiVariant, body: &Document) -> AppResult<Self> {
        match variant {
            ApiVariant::Admin => {
                require_fields(body, ADMIN_REQUIRED, ADMIN_REQUIRED_MESSAGE)?;
                let route = body.get("route").map(route_segment).unwrap_or_default();
                let collection = route_collection(&route)?;

                let mut document = pick_fields(body, &["title", "description", "dueDate"]);
                document.insert("createdAt".to_string(), Value::String(now_iso()));
                document.insert("completed".to_string(), Value::Bool(false));
                Ok(Self { collection, document })
            }
            ApiVariant::Legacy => {
                require_fields(body, LEGACY_REQUIRED, LEGACY_REQUIRED_MESSAGE)?;

                let mut document = pick_fields(body, &["name", "route"]);
                document.insert("createdAt".to_string(), Value::String(now_iso()));
                document.insert("completed".to_string(), Value::Bool(false));
                Ok(Self {
                    collection: LEGACY_TASK_COLLECTION.to_string(),
                    document,
                })
            }
        }
    }
}
