use serde_json::Value;
use std::sync::Arc;

use crate::models::ASSIGNMENTS_COLLECTION;
use crate::store::{Document, DocumentStore, StoredDocument};
use crate::utils::errors::{AppError, AppResult};

const UPDATE_FAILED: &str = "Failed to update assignment";
const DELETE_FAILED: &str = "Failed to delete assignment";

pub struct AssignmentRepository {
    store: Arc<dyn DocumentStore>,
}

impl AssignmentRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, document: Document) -> AppResult<String> {
        self.store
            .add(ASSIGNMENTS_COLLECTION, document)
            .await
            .map_err(|e| AppError::store("Failed to save assignment", e))
    }

    pub async fn find_by_route(&self, route: &str) -> AppResult<Vec<StoredDocument>> {
        self.store
            .find_by_field(ASSIGNMENTS_COLLECTION, "route", &Value::String(route.to_string()))
            .await
            .map_err(|e| AppError::store("Failed to fetch assignments", e))
    }

    /// Actualizar campos de una asignación existente.
    /// Devuelve el documento leído antes de actualizar, o `None` si no existe.
    pub async fn update(&self, id: &str, fields: Document) -> AppResult<Option<StoredDocument>> {
        let Some(previous) = self
            .store
            .get(ASSIGNMENTS_COLLECTION, id)
            .await
            .map_err(|e| AppError::store(UPDATE_FAILED, e))?
        else {
            return Ok(None);
        };

        self.store
            .update(ASSIGNMENTS_COLLECTION, id, fields)
            .await
            .map_err(|e| AppError::store(UPDATE_FAILED, e))?;
        Ok(Some(previous))
    }

    /// Eliminar una asignación; `false` si no existía
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let existing = self
            .store
            .get(ASSIGNMENTS_COLLECTION, id)
            .await
            .map_err(|e| AppError::store(DELETE_FAILED, e))?;
        if existing.is_none() {
            return Ok(false);
        }

        self.store
            .delete(ASSIGNMENTS_COLLECTION, id)
            .await
            .map_err(|e| AppError::store(DELETE_FAILED, e))?;
        Ok(true)
    }
}
