use std::any::Any;
use std::sync::Arc;

use uuid::Uuid;

use super::Capabilities;
use crate::errors::StepError;

/// Contexto de ejecución entregado a `StepDefinition::run`.
///
/// Se construye una vez por corrida y se clona (barato) para cada step.
#[derive(Debug, Clone)]
pub struct StepContext {
    run_id: Uuid,
    capabilities: Arc<Capabilities>,
}

impl StepContext {
    pub fn new(run_id: Uuid, capabilities: Arc<Capabilities>) -> Self {
        Self { run_id, capabilities }
    }

    /// Identificador de la corrida en curso.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.capabilities.get::<T>()
    }

    pub fn require<T: Any + Send + Sync>(&self) -> Result<Arc<T>, StepError> {
        self.capabilities.require::<T>()
    }
}
