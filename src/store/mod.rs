//! Almacén de documentos
//!
//! Este módulo define la interfaz del almacén de documentos (colecciones de
//! documentos JSON sin esquema con identificadores generados) y sus
//! implementaciones: Firestore vía REST y un almacén en memoria.

pub mod connection;
pub mod firestore;
pub mod memory;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

pub use connection::connect;
pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

/// Cuerpo de un documento sin esquema
pub type Document = Map<String, Value>;

/// Documento leído del almacén junto con su identificador
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Document,
}

impl StoredDocument {
    pub fn new(id: impl Into<String>, data: Document) -> Self {
        Self { id: id.into(), data }
    }

    /// Renderizar como `{ id, ...data }`; los campos guardados pisan el `id`
    pub fn into_json(self) -> Value {
        let mut out = Map::with_capacity(self.data.len() + 1);
        out.insert("id".to_string(), Value::String(self.id));
        out.extend(self.data);
        Value::Object(out)
    }
}

/// Errores del almacén de documentos
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Credential error: {0}")]
    Credentials(String),

    #[error("Store API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Operaciones sobre el almacén de documentos
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Nombre corto del backend, para logs y health
    fn backend_name(&self) -> &'static str;

    /// Crear un documento con identificador generado
    async fn add(&self, collection: &str, data: Document) -> StoreResult<String>;

    /// Listar todos los documentos de una colección
    async fn list(&self, collection: &str) -> StoreResult<Vec<StoredDocument>>;

    /// Obtener un documento por identificador
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<StoredDocument>>;

    /// Sobrescribir los campos dados de un documento existente
    async fn update(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()>;

    /// Eliminar un documento; no falla si no existe
    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;

    /// Documentos cuyo campo `field` es igual a `value`
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<StoredDocument>>;

    /// Nombres de todas las colecciones de primer nivel
    async fn list_collections(&self) -> StoreResult<Vec<String>>;
}
