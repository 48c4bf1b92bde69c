//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del almacén de documentos, variables
//! de entorno y otras configuraciones del sistema.

pub mod environment;
pub mod firestore;

pub use environment::*;
pub use firestore::FirestoreConfig;
