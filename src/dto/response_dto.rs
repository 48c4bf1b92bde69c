use serde::Serialize;

// Confirmación de borrado
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

// Respuesta de creación que solo devuelve el identificador
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

// Estado del servicio
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub variant: &'static str,
    pub store: &'static str,
    pub timestamp: String,
}
