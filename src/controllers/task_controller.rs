use serde_json::Value;
use tracing::info;

use crate::config::ApiVariant;
use crate::dto::response_dto::MessageResponse;
use crate::models::task::{route_collection, NewTask};
use crate::repositories::task_repository::TaskRepository;
use crate::state::AppState;
use crate::store::{Document, StoredDocument};
use crate::utils::errors::AppResult;

pub struct TaskController {
    repository: TaskRepository,
    variant: ApiVariant,
}

impl TaskController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: TaskRepository::new(state.store.clone()),
            variant: state.config.api_variant,
        }
    }

    pub async fn list_by_route(&self, route: &str) -> AppResult<Vec<Value>> {
        let collection = route_collection(route)?;
        let tasks = self.repository.find_all(&collection).await?;
        Ok(tasks.into_iter().map(StoredDocument::into_json).collect())
    }

    pub async fn create(&self, body: Document) -> AppResult<Value> {
        let task = NewTask::from_request(self.variant, &body)?;
        let id = self
            .repository
            .create(&task.collection, task.document.clone())
            .await?;

        info!("✅ Tarea {} creada en {}", id, task.collection);
        Ok(StoredDocument::new(id, task.document).into_json())
    }

    pub async fn delete(&self, id: &str, route: &str) -> AppResult<MessageResponse> {
        let collection = route_collection(route)?;
        self.repository.delete(&collection, id).await?;

        info!("🗑️ Tarea {} eliminada de {}", id, collection);
        Ok(MessageResponse::new("Task deleted successfully"))
    }
}
