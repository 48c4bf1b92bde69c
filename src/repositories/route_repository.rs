use std::sync::Arc;

use crate::models::ROUTES_COLLECTION;
use crate::store::{Document, DocumentStore};
use crate::utils::errors::{AppError, AppResult};

pub struct RouteRepository {
    store: Arc<dyn DocumentStore>,
}

impl RouteRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Todos los nombres de colección del almacén
    pub async fn collection_names(&self) -> AppResult<Vec<String>> {
        self.store
            .list_collections()
            .await
            .map_err(|e| AppError::store("Failed to fetch routes", e))
    }

    /// Guardar una ruta tal cual llega en la colección `routes`
    pub async fn save(&self, document: Document) -> AppResult<String> {
        self.store
            .add(ROUTES_COLLECTION, document)
            .await
            .map_err(|e| AppError::store("Failed to save route", e))
    }
}
