//! stateflow-persistence
//!
//! Backends durables para el puerto `StatePersistor` de `stateflow-core`.
//!
//! Módulos:
//! - `file`: un documento JSON por corrida, escrito de forma atómica.
//! - `config`: carga de configuración desde .env / variables de entorno.
//! - `error`: errores del backend y su mapeo al error del puerto.

pub mod config;
pub mod error;
pub mod file;

pub use config::{init_dotenv, StoreConfig};
pub use error::FileStoreError;
pub use file::{JsonFilePersistor, RunDocument, StateSnapshot, FORMAT_VERSION};
