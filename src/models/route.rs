//! Modelo de Route
//!
//! Las rutas no tienen esquema propio: se derivan de los nombres de las
//! colecciones `tasks_<nombre>`.

use serde::{Deserialize, Serialize};

use super::task::TASK_COLLECTION_PREFIX;

/// Ruta descubierta a partir de una colección de tareas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub id: String,
    pub name: String,
}

impl RouteSummary {
    /// `tasks_northline` → `{ id: "tasks_northline", name: "northline" }`
    pub fn from_collection(collection: &str) -> Option<Self> {
        collection
            .strip_prefix(TASK_COLLECTION_PREFIX)
            .map(|name| Self {
                id: collection.to_string(),
                name: name.to_string(),
            })
    }
}

/// Rutas derivadas de una lista de colecciones, en el mismo orden
pub fn routes_from_collections(collections: &[String]) -> Vec<RouteSummary> {
    collections
        .iter()
        .filter_map(|name| RouteSummary::from_collection(name))
        .collect()
}
