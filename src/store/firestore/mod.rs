//! Cliente REST de Cloud Firestore
//!
//! Implementa `DocumentStore` sobre la API REST v1 de Firestore. Las
//! credenciales provienen de una cuenta de servicio, o del emulador si
//! `FIRESTORE_EMULATOR_HOST` está definido.

pub mod auth;
pub mod value;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use self::auth::{ServiceAccountKey, TokenProvider};
use self::value::{decode_fields, document_id, encode_fields, encode_value, field_path};
use super::{Document, DocumentStore, StoreError, StoreResult, StoredDocument};
use crate::config::FirestoreConfig;

const FIRESTORE_API: &str = "https://firestore.googleapis.com/v1";
const EMULATOR_PROJECT: &str = "demo-fleet-dispatch";
const PAGE_SIZE: u32 = 300;

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    name: String,
    fields: Option<Value>,
}

impl FirestoreDocument {
    fn into_stored(self) -> StoreResult<StoredDocument> {
        let data = decode_fields(self.fields.as_ref())?;
        Ok(StoredDocument::new(document_id(&self.name), data))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListCollectionIdsResponse {
    #[serde(default)]
    collection_ids: Vec<String>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RunQueryItem {
    document: Option<FirestoreDocument>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Cliente de Firestore compartido por todo el proceso
pub struct FirestoreStore {
    http: Client,
    documents_url: String,
    auth: TokenProvider,
}

impl FirestoreStore {
    pub fn new(config: &FirestoreConfig) -> StoreResult<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;

        let (base_url, project_id, auth) = match &config.emulator_host {
            Some(host) => {
                let project = config
                    .project_id
                    .clone()
                    .unwrap_or_else(|| EMULATOR_PROJECT.to_string());
                info!("🧪 Usando emulador de Firestore en {}", host);
                (format!("http://{}/v1", host), project, TokenProvider::emulator(http.clone()))
            }
            None => {
                let key = ServiceAccountKey::from_file(&config.credentials_path)?;
                let project = config
                    .project_id
                    .clone()
                    .or_else(|| key.project_id.clone())
                    .ok_or_else(|| {
                        StoreError::Credentials(
                            "FIREBASE_PROJECT_ID not set and service account has no project_id"
                                .to_string(),
                        )
                    })?;
                (
                    FIRESTORE_API.to_string(),
                    project,
                    TokenProvider::service_account(http.clone(), key),
                )
            }
        };

        let documents_url = format!(
            "{}/projects/{}/databases/{}/documents",
            base_url, project_id, config.database
        );
        info!("🔗 Firestore: proyecto {} / base {}", project_id, config.database);

        Ok(Self {
            http,
            documents_url,
            auth,
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.documents_url, urlencoding::encode(collection))
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), urlencoding::encode(id))
    }

    async fn send(&self, request: RequestBuilder) -> StoreResult<Response> {
        let token = self.auth.access_token().await?;
        Ok(request.bearer_auth(token).send().await?)
    }

    /// Convertir estados no exitosos en `StoreError::Api`
    async fn check(response: Response) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);
        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    fn backend_name(&self) -> &'static str {
        "firestore"
    }

    async fn add(&self, collection: &str, data: Document) -> StoreResult<String> {
        let request = self
            .http
            .post(self.collection_url(collection))
            .json(&json!({ "fields": encode_fields(&data) }));
        let response = Self::check(self.send(request).await?).await?;
        let created: FirestoreDocument = response.json().await?;

        let id = document_id(&created.name).to_string();
        debug!("💾 Firestore: documento {} creado en {}", id, collection);
        Ok(id)
    }

    async fn list(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("pageSize", PAGE_SIZE.to_string())];
            if let Some(token) = &page_token {
                query.push(("pageToken", token.clone()));
            }

            let request = self.http.get(self.collection_url(collection)).query(&query);
            let response = Self::check(self.send(request).await?).await?;
            let page: ListDocumentsResponse = response.json().await?;

            for doc in page.documents {
                documents.push(doc.into_stored()?);
            }

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!("📥 Firestore: {} documentos en {}", documents.len(), collection);
        Ok(documents)
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<StoredDocument>> {
        let request = self.http.get(self.document_url(collection, id));
        let response = self.send(request).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let doc: FirestoreDocument = Self::check(response).await?.json().await?;
        Ok(Some(doc.into_stored()?))
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()> {
        let mut query: Vec<(&str, String)> = fields
            .keys()
            .map(|key| ("updateMask.fieldPaths", field_path(key)))
            .collect();
        query.push(("currentDocument.exists", "true".to_string()));

        let request = self
            .http
            .patch(self.document_url(collection, id))
            .query(&query)
            .json(&json!({ "fields": encode_fields(&fields) }));
        let response = self.send(request).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(format!("{}/{}", collection, id)));
        }

        Self::check(response).await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        let request = self.http.delete(self.document_url(collection, id));
        Self::check(self.send(request).await?).await?;
        Ok(())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<StoredDocument>> {
        let body = json!({
            "structuredQuery": {
                "from": [{ "collectionId": collection }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": field_path(field) },
                        "op": "EQUAL",
                        "value": encode_value(value)
                    }
                }
            }
        });

        let request = self
            .http
            .post(format!("{}:runQuery", self.documents_url))
            .json(&body);
        let response = Self::check(self.send(request).await?).await?;
        let items: Vec<RunQueryItem> = response.json().await?;

        // La respuesta incluye entradas sin documento (solo readTime)
        items
            .into_iter()
            .filter_map(|item| item.document)
            .map(FirestoreDocument::into_stored)
            .collect()
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        let mut collections = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut body = json!({ "pageSize": PAGE_SIZE });
            if let Some(token) = &page_token {
                body["pageToken"] = json!(token);
            }

            let request = self
                .http
                .post(format!("{}:listCollectionIds", self.documents_url))
                .json(&body);
            let response = Self::check(self.send(request).await?).await?;
            let page: ListCollectionIdsResponse = response.json().await?;
            collections.extend(page.collection_ids);

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(collections)
    }
}
