use serde_json::Value;
use tracing::info;

use crate::config::ApiVariant;
use crate::dto::response_dto::MessageResponse;
use crate::models::vehicle::build_document;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::store::{Document, StoredDocument};
use crate::utils::errors::AppResult;

pub struct VehicleController {
    repository: VehicleRepository,
    variant: ApiVariant,
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: VehicleRepository::new(state.store.clone()),
            variant: state.config.api_variant,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Value>> {
        let vehicles = self.repository.find_all().await?;
        Ok(vehicles.into_iter().map(StoredDocument::into_json).collect())
    }

    pub async fn create(&self, body: Document) -> AppResult<Value> {
        let document = build_document(self.variant, &body)?;
        let id = self.repository.create(document.clone()).await?;

        info!("🚗 Vehículo {} creado", id);
        Ok(StoredDocument::new(id, document).into_json())
    }

    pub async fn delete(&self, id: &str) -> AppResult<MessageResponse> {
        self.repository.delete(id).await?;

        info!("🗑️ Vehículo {} eliminado", id);
        Ok(MessageResponse::new("Vehicle deleted successfully"))
    }
}
