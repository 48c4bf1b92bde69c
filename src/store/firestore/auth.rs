//! Credenciales de cuenta de servicio para Firestore
//!
//! Firma una aserción JWT RS256 con la clave de la cuenta de servicio y la
//! intercambia por un access token OAuth2, que se cachea hasta poco antes
//! de su expiración.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::store::{StoreError, StoreResult};

const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const EMULATOR_TOKEN: &str = "owner";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const REFRESH_MARGIN_SECS: i64 = 60;

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

fn default_expires_in() -> i64 {
    ASSERTION_LIFETIME_SECS
}

/// Campos usados del JSON de la cuenta de servicio
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    pub project_id: Option<String>,
}

impl ServiceAccountKey {
    pub fn from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            StoreError::Credentials(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            StoreError::Credentials(format!("invalid service account {}: {}", path.display(), e))
        })
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_expired(&self) -> bool {
        Utc::now() + Duration::seconds(REFRESH_MARGIN_SECS) >= self.expires_at
    }
}

/// Proveedor de access tokens para las llamadas REST
pub struct TokenProvider {
    http: Client,
    key: Option<ServiceAccountKey>,
    cache: RwLock<Option<CachedToken>>,
}

impl TokenProvider {
    pub fn service_account(http: Client, key: ServiceAccountKey) -> Self {
        Self {
            http,
            key: Some(key),
            cache: RwLock::new(None),
        }
    }

    /// El emulador acepta cualquier llamada con el token `owner`
    pub fn emulator(http: Client) -> Self {
        Self {
            http,
            key: None,
            cache: RwLock::new(None),
        }
    }

    pub async fn access_token(&self) -> StoreResult<String> {
        let Some(key) = &self.key else {
            return Ok(EMULATOR_TOKEN.to_string());
        };

        if let Some(cached) = self.cache.read().await.as_ref().filter(|t| !t.is_expired()) {
            return Ok(cached.token.clone());
        }

        let mut cache = self.cache.write().await;
        // Otra tarea pudo renovarlo mientras esperábamos el lock
        if let Some(cached) = cache.as_ref().filter(|t| !t.is_expired()) {
            return Ok(cached.token.clone());
        }

        let fresh = self.fetch_token(key).await?;
        let token = fresh.token.clone();
        *cache = Some(fresh);
        Ok(token)
    }

    async fn fetch_token(&self, key: &ServiceAccountKey) -> StoreResult<CachedToken> {
        debug!("🔐 Solicitando access token para {}", key.client_email);

        let now = Utc::now();
        let claims = AssertionClaims {
            iss: &key.client_email,
            scope: DATASTORE_SCOPE,
            aud: &key.token_uri,
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
        };

        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| StoreError::Credentials(format!("invalid private key: {}", e)))?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| StoreError::Credentials(format!("cannot sign assertion: {}", e)))?;

        let response = self
            .http
            .post(&key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Credentials(format!(
                "token endpoint returned {}: {}",
                status, body
            )));
        }

        let body: TokenResponse = response.json().await?;
        info!("✅ Access token obtenido (expira en {}s)", body.expires_in);

        Ok(CachedToken {
            token: body.access_token,
            expires_at: now + Duration::seconds(body.expires_in),
        })
    }
}
