#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use fleet_dispatch::config::{ApiVariant, EnvironmentConfig, StoreBackend};
use fleet_dispatch::store::{
    Document, DocumentStore, MemoryStore, StoreError, StoreResult, StoredDocument,
};
use fleet_dispatch::{create_app, AppState};

pub fn test_config(variant: ApiVariant) -> EnvironmentConfig {
    EnvironmentConfig {
        api_variant: variant,
        store_backend: StoreBackend::Memory,
        ..EnvironmentConfig::default()
    }
}

pub fn app_with_store(store: Arc<dyn DocumentStore>, variant: ApiVariant) -> Router {
    create_app(AppState::new(store, test_config(variant)))
}

pub fn setup() -> (Router, MemoryStore) {
    setup_variant(ApiVariant::Admin)
}

pub fn setup_variant(variant: ApiVariant) -> (Router, MemoryStore) {
    let store = MemoryStore::new();
    let router = app_with_store(Arc::new(store.clone()), variant);
    (router, store)
}

pub async fn call(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let body = match body {
        Some(v) => Body::from(serde_json::to_string(&v).unwrap()),
        None => Body::empty(),
    };
    let req = builder.body(body).unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::json!(null)
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::json!(null))
    };
    (status, json)
}

pub fn doc(value: Value) -> Document {
    value.as_object().cloned().unwrap()
}

/// Almacén que delega en memoria y cuenta las operaciones recibidas
#[derive(Clone, Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    calls: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    fn backend_name(&self) -> &'static str {
        "counting"
    }

    async fn add(&self, collection: &str, data: Document) -> StoreResult<String> {
        self.hit();
        self.inner.add(collection, data).await
    }

    async fn list(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        self.hit();
        self.inner.list(collection).await
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<StoredDocument>> {
        self.hit();
        self.inner.get(collection, id).await
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()> {
        self.hit();
        self.inner.update(collection, id, fields).await
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        self.hit();
        self.inner.delete(collection, id).await
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<StoredDocument>> {
        self.hit();
        self.inner.find_by_field(collection, field, value).await
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.hit();
        self.inner.list_collections().await
    }
}

/// Almacén que falla en todas las operaciones
pub struct FailingStore;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::Api {
        status: 503,
        message: "backend unavailable: secret-detail".to_string(),
    })
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn add(&self, _collection: &str, _data: Document) -> StoreResult<String> {
        unavailable()
    }

    async fn list(&self, _collection: &str) -> StoreResult<Vec<StoredDocument>> {
        unavailable()
    }

    async fn get(&self, _collection: &str, _id: &str) -> StoreResult<Option<StoredDocument>> {
        unavailable()
    }

    async fn update(&self, _collection: &str, _id: &str, _fields: Document) -> StoreResult<()> {
        unavailable()
    }

    async fn delete(&self, _collection: &str, _id: &str) -> StoreResult<()> {
        unavailable()
    }

    async fn find_by_field(
        &self,
        _collection: &str,
        _field: &str,
        _value: &Value,
    ) -> StoreResult<Vec<StoredDocument>> {
        unavailable()
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        unavailable()
    }
}
