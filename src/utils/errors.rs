//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores de la API y su conversión a
//! respuestas HTTP. Todas las respuestas de error tienen la forma
//! `{"error": "<mensaje>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// `message` es lo que ve el cliente; `source` solo se registra en logs
    #[error("{message}: {source}")]
    Store {
        message: String,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn store(message: &str, source: StoreError) -> Self {
        AppError::Store {
            message: message.to_string(),
            source,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn client_message(&self) -> &str {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg,
            AppError::Store { message, .. } => message,
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    error: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store { message, source } => error!("❌ {}: {}", message, source),
            AppError::Validation(msg) => warn!("⚠️ Validación fallida: {}", msg),
            AppError::NotFound(msg) => warn!("🔍 No encontrado: {}", msg),
        }

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}
