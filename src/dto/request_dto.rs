use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::Uri;

use crate::utils::errors::{validation_error, AppError, AppResult};

pub const ROUTE_REQUIRED_MESSAGE: &str = "Route is required";

// Query `?route=` de tareas y asignaciones
#[derive(Debug, Default)]
pub struct RouteQuery {
    pub route: Option<String>,
}

impl RouteQuery {
    /// Leer `route` del query string. Si se repite (`?route=a&route=b`)
    /// los valores se unen con comas: `a,b`.
    pub fn from_uri(uri: &Uri) -> AppResult<Self> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map_err(|e| validation_error(&format!("Invalid query string: {}", e.body_text())))?;

        let values: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == "route")
            .map(|(_, value)| value)
            .collect();

        let route = if values.is_empty() {
            None
        } else {
            Some(values.join(","))
        };
        Ok(Self { route })
    }

    /// Ruta no vacía o error de validación
    pub fn require_route(&self) -> AppResult<&str> {
        self.route
            .as_deref()
            .filter(|route| !route.is_empty())
            .ok_or_else(|| validation_error(ROUTE_REQUIRED_MESSAGE))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RouteQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_uri(&parts.uri)
    }
}
