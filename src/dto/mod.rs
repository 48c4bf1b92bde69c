//! DTOs de la API
//!
//! Tipos de entrada (query strings) y de salida compartidos por los endpoints.

pub mod request_dto;
pub mod response_dto;
