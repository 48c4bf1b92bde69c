//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use super::firestore::FirestoreConfig;

/// Variante de la API: qué juego de campos aceptan los endpoints de creación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVariant {
    /// Servidor de administración: tareas por ruta y vehículos con dimensiones completas
    Admin,
    /// Servidor antiguo: tareas en la colección plana `tasks`
    Legacy,
}

impl ApiVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVariant::Admin => "admin",
            ApiVariant::Legacy => "legacy",
        }
    }
}

impl FromStr for ApiVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(ApiVariant::Admin),
            "legacy" => Ok(ApiVariant::Legacy),
            other => Err(anyhow!("API_VARIANT must be 'admin' or 'legacy', got '{}'", other)),
        }
    }
}

/// Backend del almacén de documentos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Firestore,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(StoreBackend::Firestore),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!("STORE_BACKEND must be 'firestore' or 'memory', got '{}'", other)),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    pub api_variant: ApiVariant,
    pub store_backend: StoreBackend,
    pub firestore: FirestoreConfig,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 5000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
            api_variant: ApiVariant::Admin,
            store_backend: StoreBackend::Firestore,
            firestore: FirestoreConfig::default(),
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", raw))?,
            None => defaults.port,
        };

        let log_level = match var("LOG_LEVEL") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow!("LOG_LEVEL must be a tracing level, got '{}'", raw))?,
            None => defaults.log_level,
        };

        Ok(Self {
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: var("HOST").unwrap_or(defaults.host),
            cors_origins: var("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level,
            api_variant: var("API_VARIANT")
                .map(|raw| raw.parse())
                .transpose()?
                .unwrap_or(defaults.api_variant),
            store_backend: var("STORE_BACKEND")
                .map(|raw| raw.parse())
                .transpose()?
                .unwrap_or(defaults.store_backend),
            firestore: FirestoreConfig::from_lookup(&var),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
