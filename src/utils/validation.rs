//! Utilidades de validación
//!
//! Comprobaciones de presencia de campos requeridos y construcción de
//! nombres de colección a partir de nombres de ruta.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::store::Document;
use crate::utils::errors::{validation_error, AppResult};

lazy_static! {
    /// Identificadores reservados por Firestore
    static ref RESERVED_ID: Regex = Regex::new(r"^__.*__$").unwrap();
}

/// Un campo está presente si existe y no es null, false, 0, NaN ni ""
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Nombres de los campos requeridos que faltan en el cuerpo
pub fn missing_fields<'a>(body: &Document, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|field| !is_present(body.get(*field)))
        .collect()
}

/// Fallar con `message` si falta alguno de los campos requeridos
pub fn require_fields(body: &Document, required: &[&str], message: &str) -> AppResult<()> {
    let missing = missing_fields(body, required);
    if missing.is_empty() {
        return Ok(());
    }
    debug!("Campos faltantes: {:?}", missing);
    Err(validation_error(message))
}

/// Texto de un valor de ruta: los strings tal cual, el resto como JSON compacto
pub fn route_segment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Nombre de colección `<prefix><route>`, rechazando identificadores que
/// cambiarían la ruta del documento o que Firestore reserva
pub fn collection_for_route(prefix: &str, route: &str) -> AppResult<String> {
    let collection = format!("{}{}", prefix, route);
    if route.contains('/') || route == "." || route == ".." || RESERVED_ID.is_match(&collection) {
        return Err(validation_error("Invalid route name"));
    }
    Ok(collection)
}
