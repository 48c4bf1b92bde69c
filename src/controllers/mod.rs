//! Controladores
//!
//! Lógica de cada recurso: validación de campos, llamada al repositorio y
//! forma de la respuesta.

pub mod assignment_controller;
pub mod route_controller;
pub mod task_controller;
pub mod user_controller;
pub mod vehicle_controller;
