//! Configuración de Firestore
//!
//! Este módulo contiene los parámetros de conexión al almacén de documentos.

use std::time::Duration;

/// Configuración de la conexión a Firestore
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// Si es `None` se toma el `project_id` de la cuenta de servicio
    pub project_id: Option<String>,
    pub database: String,
    pub credentials_path: String,
    pub emulator_host: Option<String>,
    pub request_timeout: Duration,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            database: "(default)".to_string(),
            credentials_path: "firebase-service-account.json".to_string(),
            emulator_host: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl FirestoreConfig {
    pub fn from_lookup<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            project_id: var("FIREBASE_PROJECT_ID"),
            database: var("FIRESTORE_DATABASE").unwrap_or(defaults.database),
            credentials_path: var("GOOGLE_APPLICATION_CREDENTIALS")
                .unwrap_or(defaults.credentials_path),
            emulator_host: var("FIRESTORE_EMULATOR_HOST"),
            request_timeout: defaults.request_timeout,
        }
    }
}
