//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y marcas de tiempo.

pub mod errors;
pub mod validation;

use chrono::{SecondsFormat, Utc};

/// Marca de tiempo ISO-8601 en UTC con milisegundos (`2024-05-01T09:30:00.123Z`)
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
