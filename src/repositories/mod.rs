//! Repositorios
//!
//! Acceso al almacén de documentos por recurso. Cada operación traduce los
//! fallos del almacén al mensaje genérico que ve el cliente.

pub mod assignment_repository;
pub mod route_repository;
pub mod task_repository;
pub mod user_repository;
pub mod vehicle_repository;
