//! Modelo de Vehicle
//!
//! Los dos servidores originales aceptan juegos de campos distintos; la
//! variante activa decide cuál se valida y se guarda.

use serde_json::Value;

use super::pick_fields;
use crate::config::ApiVariant;
use crate::store::Document;
use crate::utils::errors::AppResult;
use crate::utils::now_iso;
use crate::utils::validation::require_fields;

pub const VEHICLE_REQUIRED_MESSAGE: &str = "All fields are required";

const ADMIN_REQUIRED: &[&str] = &["number", "length", "width", "height", "weight", "idealFor"];
const ADMIN_STORED: &[&str] = &[
    "number",
    "length",
    "width",
    "height",
    "weight",
    "facilities",
    "idealFor",
];

const LEGACY_REQUIRED: &[&str] = &["number", "type", "length", "width", "name"];
const LEGACY_STORED: &[&str] = &["number", "type", "length", "width", "name", "facilities"];

/// Campos requeridos para la variante dada
pub fn required_fields(variant: ApiVariant) -> &'static [&'static str] {
    match variant {
        ApiVariant::Admin => ADMIN_REQUIRED,
        ApiVariant::Legacy => LEGACY_REQUIRED,
    }
}

/// Validar el cuerpo y construir el documento del vehículo
pub fn build_document(variant: ApiVariant, body: &Document) -> AppResult<Document> {
    require_fields(body, required_fields(variant), VEHICLE_REQUIRED_MESSAGE)?;

    let document = match variant {
        ApiVariant::Admin => pick_fields(body, ADMIN_STORED),
        ApiVariant::Legacy => {
            let mut document = pick_fields(body, LEGACY_STORED);
            document.insert("createdAt".to_string(), Value::String(now_iso()));
            document
        }
    };
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn admin_body() -> Document {
        json!({
            "number": "AB-123-CD",
            "length": 6.2,
            "width": 2.1,
            "height": 2.6,
            "weight": 3500,
            "idealFor": "pallets",
            "facilities": ["tail-lift"],
            "ignored": true
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_admin_document_keeps_known_fields() {
        let doc = build_document(ApiVariant::Admin, &admin_body()).unwrap();
        assert_eq!(doc.len(), 7);
        assert!(!doc.contains_key("ignored"));
        assert!(!doc.contains_key("createdAt"));
    }

    #[test]
    fn test_each_admin_field_is_required() {
        for field in ADMIN_REQUIRED {
            let mut body = admin_body();
            body.remove(*field);
            assert!(build_document(ApiVariant::Admin, &body).is_err(), "{} should be required", field);
        }
    }

    #[test]
    fn test_legacy_document_has_created_at() {
        let body = json!({ "number": "7", "type": "van", "length": 5, "width": 2, "name": "Blanca" });
        let doc = build_document(ApiVariant::Legacy, body.as_object().unwrap()).unwrap();
        assert!(doc.contains_key("createdAt"));
        assert!(!doc.contains_key("facilities"));
    }
}
