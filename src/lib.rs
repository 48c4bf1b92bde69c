//! Fleet dispatch API
//!
//! Endpoints CRUD para tareas, vehículos, usuarios, rutas y asignaciones
//! sobre un almacén de documentos (Firestore o memoria).

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
