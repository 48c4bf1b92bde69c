use serde_json::Value;
use tracing::info;

use crate::dto::response_dto::MessageResponse;
use crate::models::assignment::{assignment_fields, merge_update_response, new_assignment};
use crate::repositories::assignment_repository::AssignmentRepository;
use crate::state::AppState;
use crate::store::{Document, StoredDocument};
use crate::utils::errors::{not_found_error, AppResult};

const NOT_FOUND_MESSAGE: &str = "Assignment not found";

pub struct AssignmentController {
    repository: AssignmentRepository,
}

impl AssignmentController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: AssignmentRepository::new(state.store.clone()),
        }
    }

    pub async fn create(&self, body: Document) -> AppResult<Value> {
        let document = new_assignment(assignment_fields(&body)?);
        let id = self.repository.create(document.clone()).await?;

        info!("📋 Asignación {} creada", id);
        Ok(StoredDocument::new(id, document).into_json())
    }

    /// Sin coincidencias devuelve una lista vacía, nunca 404
    pub async fn list_by_route(&self, route: &str) -> AppResult<Vec<Value>> {
        let assignments = self.repository.find_by_route(route).await?;
        Ok(assignments.into_iter().map(StoredDocument::into_json).collect())
    }

    pub async fn update(&self, id: &str, body: Document) -> AppResult<Value> {
        let fields = assignment_fields(&body)?;
        let previous = self
            .repository
            .update(id, fields.clone())
            .await?
            .ok_or_else(|| not_found_error(NOT_FOUND_MESSAGE))?;

        info!("✏️ Asignación {} actualizada", id);
        Ok(merge_update_response(id, fields, previous))
    }

    pub async fn delete(&self, id: &str) -> AppResult<MessageResponse> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error(NOT_FOUND_MESSAGE));
        }

        info!("🗑️ Asignación {} eliminada", id);
        Ok(MessageResponse::new("Assignment deleted successfully"))
    }
}
