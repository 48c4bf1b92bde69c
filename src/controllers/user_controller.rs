use serde_json::Value;
use tracing::debug;

use crate::repositories::user_repository::UserRepository;
use crate::state::AppState;
use crate::store::StoredDocument;
use crate::utils::errors::{not_found_error, AppResult};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: UserRepository::new(state.store.clone()),
        }
    }

    /// Colección vacía → 404
    pub async fn list(&self) -> AppResult<Vec<Value>> {
        let users = self.repository.find_all().await?;
        if users.is_empty() {
            return Err(not_found_error("No users found"));
        }

        debug!("👥 {} usuarios obtenidos", users.len());
        Ok(users.into_iter().map(StoredDocument::into_json).collect())
    }
}
