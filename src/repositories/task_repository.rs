use std::sync::Arc;

use crate::store::{Document, DocumentStore, StoredDocument};
use crate::utils::errors::{AppError, AppResult};

pub struct TaskRepository {
    store: Arc<dyn DocumentStore>,
}

impl TaskRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self, collection: &str) -> AppResult<Vec<StoredDocument>> {
        self.store
            .list(collection)
            .await
            .map_err(|e| AppError::store("Failed to fetch tasks", e))
    }

    pub async fn create(&self, collection: &str, document: Document) -> AppResult<String> {
        self.store
            .add(collection, document)
            .await
            .map_err(|e| AppError::store("Failed to add task", e))
    }

    // Sin comprobación de existencia previa
    pub async fn delete(&self, collection: &str, id: &str) -> AppResult<()> {
        self.store
            .delete(collection, id)
            .await
            .map_err(|e| AppError::store("Failed to delete task", e))
    }
}
