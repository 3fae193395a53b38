//! Errores del backend de archivos.
//! Mapea errores de IO / JSON a variantes semánticas y luego al error del
//! puerto (`stateflow_core::PersistenceError`).

use std::path::PathBuf;

use stateflow_core::PersistenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("corrupted document {path}: {reason}")]
    Corrupted { path: PathBuf, reason: String },
}

impl FileStoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(),
                   source }
    }
}

impl From<FileStoreError> for PersistenceError {
    fn from(err: FileStoreError) -> Self {
        let message = err.to_string();
        match err {
            FileStoreError::Io { .. } => Self::Backend(message),
            FileStoreError::Json(e) => Self::Serialization(e.to_string()),
            FileStoreError::Corrupted { .. } => Self::Corrupted(message),
        }
    }
}
