//! Modelo de Assignment
//!
//! Asignación de un vehículo y un conductor a una ruta.

use serde_json::Value;

use super::pick_fields;
use crate::store::{Document, StoredDocument};
use crate::utils::errors::AppResult;
use crate::utils::now_iso;
use crate::utils::validation::require_fields;

pub const ASSIGNMENT_FIELDS: &[&str] = &["route", "vehicle", "driver"];
pub const ASSIGNMENT_REQUIRED_MESSAGE: &str = "Route, vehicle, and driver are required";

/// Validar y extraer `route`, `vehicle` y `driver`
pub fn assignment_fields(body: &Document) -> AppResult<Document> {
    require_fields(body, ASSIGNMENT_FIELDS, ASSIGNMENT_REQUIRED_MESSAGE)?;
    Ok(pick_fields(body, ASSIGNMENT_FIELDS))
}

/// Documento de una nueva asignación
pub fn new_assignment(fields: Document) -> Document {
    let mut document = fields;
    document.insert("assignedAt".to_string(), Value::String(now_iso()));
    document
}

/// Respuesta de una actualización: `{ id, ...campos nuevos, ...documento previo }`.
/// Los datos leídos antes de actualizar tienen prioridad sobre los nuevos.
pub fn merge_update_response(id: &str, fields: Document, previous: StoredDocument) -> Value {
    let mut merged = fields;
    merged.extend(previous.data);
    StoredDocument::new(id, merged).into_json()
}
