//! Errores del core.
//!
//! Tres familias con semántica distinta:
//! - `StepError`: fallo de negocio dentro de un step. El engine lo captura, lo
//!   persiste como registro `Error` y continúa con el siguiente step.
//! - `PersistenceError`: fallo del backend detrás del puerto de persistencia.
//! - `CoreEngineError`: lo único que escapa de `FlowEngine::run`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallo de un step durante su propia lógica (p. ej. una llamada externa).
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum StepError {
    /// Fallo genérico con mensaje libre.
    #[error("{0}")]
    Failed(String),
    /// Un valor requerido no está presente en el estado.
    #[error("Property {property} not set, set or rerun {step}")]
    PropertyNotSet { property: String, step: String },
    /// El step pidió una capacidad que no fue registrada en el engine.
    #[error("capability not registered: {0}")]
    MissingCapability(String),
}

impl StepError {
    /// Construye un `StepError::Failed` a partir de cualquier error mostrable.
    pub fn failed(err: impl std::fmt::Display) -> Self {
        Self::Failed(err.to_string())
    }

    pub fn property_not_set(property: impl Into<String>, step: impl Into<String>) -> Self {
        Self::PropertyNotSet { property: property.into(),
                               step: step.into() }
    }
}

/// Errores reportados por implementaciones del puerto de persistencia.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum PersistenceError {
    #[error("backend error: {0}")]
    Backend(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("corrupted run data: {0}")]
    Corrupted(String),
}

/// Errores que pueden escapar del engine.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreEngineError {
    /// Un step devolvió un estado vacío: defecto de programación, no fallo de
    /// negocio. Nunca se persiste como `Error`.
    #[error("state must not be empty (step '{step}')")]
    EmptyState { step: String },
    #[error("step '{0}' is already registered")]
    DuplicateStep(String),
    #[error("step name must not be empty")]
    EmptyStepName,
    #[error("persistence: {0}")]
    Persistence(#[from] PersistenceError),
}
