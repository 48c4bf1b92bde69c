use std::sync::Arc;

use crate::models::USERS_COLLECTION;
use crate::store::{DocumentStore, StoredDocument};
use crate::utils::errors::{AppError, AppResult};

pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> AppResult<Vec<StoredDocument>> {
        self.store
            .list(USERS_COLLECTION)
            .await
            .map_err(|e| AppError::store("Failed to fetch users", e))
    }
}
