//! Errores de la aplicación (binario `main-core`).

use stateflow_core::CoreEngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error del motor: {0}")]
    Engine(#[from] CoreEngineError),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de serialización: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Argumento inválido: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_variant_from() {
        let err: AppError = CoreEngineError::EmptyStepName.into();
        assert_eq!(err.to_string(), "Error del motor: step name must not be empty");
    }

    #[test]
    fn test_invalid_argument_format() {
        let err = AppError::InvalidArgument("run id".into());
        assert_eq!(err.to_string(), "Argumento inválido: run id");
    }
}
