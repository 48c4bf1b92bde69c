use std::sync::Arc;

use crate::models::VEHICLES_COLLECTION;
use crate::store::{Document, DocumentStore, StoredDocument};
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleRepository {
    store: Arc<dyn DocumentStore>,
}

impl VehicleRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> AppResult<Vec<StoredDocument>> {
        self.store
            .list(VEHICLES_COLLECTION)
            .await
            .map_err(|e| AppError::store("Failed to fetch vehicles", e))
    }

    pub async fn create(&self, document: Document) -> AppResult<String> {
        self.store
            .add(VEHICLES_COLLECTION, document)
            .await
            .map_err(|e| AppError::store("Failed to add vehicle", e))
    }

    // Sin comprobación de existencia previa
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store
            .delete(VEHICLES_COLLECTION, id)
            .await
            .map_err(|e| AppError::store("Failed to delete vehicle", e))
    }
}
