//! Modelos de datos
//!
//! Este módulo contiene los modelos de documentos de la aplicación:
//! tareas, vehículos, asignaciones y rutas.

pub mod assignment;
pub mod route;
pub mod task;
pub mod vehicle;

use crate::store::Document;

pub const VEHICLES_COLLECTION: &str = "vehicles";
pub const USERS_COLLECTION: &str = "users";
pub const ASSIGNMENTS_COLLECTION: &str = "assignments";
pub const ROUTES_COLLECTION: &str = "routes";

/// Copiar del cuerpo los campos indicados que estén definidos (null incluido)
pub(crate) fn pick_fields(body: &Document, fields: &[&str]) -> Document {
    fields
        .iter()
        .filter_map(|field| body.get(*field).map(|value| (field.to_string(), value.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pick_fields_omits_undefined() {
        let body = json!({ "number": "AB-123", "facilities": null, "extra": 1 });
        let picked = pick_fields(body.as_object().unwrap(), &["number", "facilities", "idealFor"]);
        assert_eq!(serde_json::Value::Object(picked), json!({ "number": "AB-123", "facilities": null }));
    }
}
