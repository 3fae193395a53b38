use std::sync::Arc;

use super::{StepDefinition, StepRecord, StepStatus};

/// Registro en memoria de un step: nombre + cuerpo ejecutable, más el espejo
/// de estado que el merge sobreescribe con lo persistido.
///
/// Nunca se persiste; sólo los `StepRecord` derivados de él.
pub struct StepDescriptor<S: Send + 'static> {
    pub name: String,
    pub status: StepStatus,
    pub last_error: String,
    step: Arc<dyn StepDefinition<S>>,
}

impl<S: Send + 'static> StepDescriptor<S> {
    /// Nuevo descriptor en `NotStarted`, con el nombre que reporta el step.
    pub fn new(step: Arc<dyn StepDefinition<S>>) -> Self {
        Self { name: step.name().to_string(),
               status: StepStatus::NotStarted,
               last_error: String::new(),
               step }
    }

    /// Copia del descriptor con estado y error tomados de `record`.
    pub fn with_record(&self, record: &StepRecord) -> Self {
        Self { name: self.name.clone(),
               status: record.status,
               last_error: record.last_error.clone(),
               step: Arc::clone(&self.step) }
    }

    pub fn step(&self) -> &dyn StepDefinition<S> {
        self.step.as_ref()
    }

    pub fn record(&self) -> StepRecord {
        StepRecord { name: self.name.clone(),
                     status: self.status,
                     last_error: self.last_error.clone() }
    }
}

impl<S: Send + 'static> Clone for StepDescriptor<S> {
    fn clone(&self) -> Self {
        Self { name: self.name.clone(),
               status: self.status,
               last_error: self.last_error.clone(),
               step: Arc::clone(&self.step) }
    }
}

impl<S: Send + 'static> std::fmt::Debug for StepDescriptor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDescriptor")
         .field("name", &self.name)
         .field("status", &self.status)
         .field("last_error", &self.last_error)
         .finish_non_exhaustive()
    }
}
