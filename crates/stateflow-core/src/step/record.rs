use serde::{Deserialize, Serialize};

use super::StepStatus;

/// Conocimiento durable sobre el resultado de un step dentro de una corrida.
///
/// Invariante: `last_error` sólo es no-vacío cuando `status == Error`. Los
/// constructores la garantizan; los backends deben preservarla.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub name: String,
    pub status: StepStatus,
    #[serde(default)]
    pub last_error: String,
}

impl StepRecord {
    pub fn new(name: impl Into<String>, status: StepStatus) -> Self {
        Self { name: name.into(),
               status,
               last_error: String::new() }
    }

    pub fn success(name: impl Into<String>) -> Self {
        Self::new(name, StepStatus::Success)
    }

    pub fn skipped(name: impl Into<String>) -> Self {
        Self::new(name, StepStatus::Skipped)
    }

    pub fn not_started(name: impl Into<String>) -> Self {
        Self::new(name, StepStatus::NotStarted)
    }

    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(),
               status: StepStatus::Error,
               last_error: message.into() }
    }
}
