use serde_json::Value;
use tracing::{debug, info};

use crate::dto::response_dto::CreatedResponse;
use crate::models::route::{routes_from_collections, RouteSummary};
use crate::repositories::route_repository::RouteRepository;
use crate::state::AppState;
use crate::store::{Document, StoreError};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct RouteController {
    repository: RouteRepository,
}

impl RouteController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: RouteRepository::new(state.store.clone()),
        }
    }

    /// Rutas derivadas de las colecciones `tasks_*`; ninguna → 404
    pub async fn list(&self) -> AppResult<Vec<RouteSummary>> {
        let collections = self.repository.collection_names().await?;
        let routes = routes_from_collections(&collections);
        if routes.is_empty() {
            return Err(not_found_error("No routes found"));
        }

        debug!("🗺️ {} rutas encontradas", routes.len());
        Ok(routes)
    }

    /// Guardar el cuerpo tal cual; sin cuerpo se guarda un documento vacío
    pub async fn save(&self, body: Option<Value>) -> AppResult<CreatedResponse> {
        let document = match body {
            None => Document::new(),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(AppError::store(
                    "Failed to save route",
                    StoreError::InvalidDocument(format!("expected a JSON object, got {}", other)),
                ))
            }
        };

        let id = self.repository.save(document).await?;
        info!("🗺️ Ruta guardada con id {}", id);
        Ok(CreatedResponse { id })
    }
}
