//! Conexión al almacén de documentos
//!
//! Construye una única vez el backend configurado; el proceso lo comparte
//! entre todos los handlers a través de `AppState`.

use std::sync::Arc;
use tracing::{info, warn};

use super::{DocumentStore, FirestoreStore, MemoryStore, StoreResult};
use crate::config::{EnvironmentConfig, StoreBackend};

/// Crear el almacén de documentos según la configuración
pub fn connect(config: &EnvironmentConfig) -> StoreResult<Arc<dyn DocumentStore>> {
    match config.store_backend {
        StoreBackend::Firestore => {
            let store = FirestoreStore::new(&config.firestore)?;
            info!("✅ Almacén Firestore inicializado");
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            warn!("⚠️ Usando almacén en memoria: los datos se pierden al reiniciar");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
