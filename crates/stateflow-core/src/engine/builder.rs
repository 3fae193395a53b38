//! Builder para `FlowEngine`.
//!
//! Permite declarar capacidades y steps de forma encadenable y diferir la
//! validación de nombres hasta `build`, que devuelve el primer error de
//! registro encontrado.
//!
//! ```ignore
//! let engine = FlowEngine::builder(run_id, persistor)
//!     .capability(client)
//!     .step("Step1", step1)
//!     .step("Step2", step2)
//!     .build()?;
//! ```

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use uuid::Uuid;

use crate::engine::FlowEngine;
use crate::errors::{CoreEngineError, StepError};
use crate::model::{Capabilities, StepContext};
use crate::persist::StatePersistor;
use crate::step::{FnStep, StepDefinition};

type PendingStep<S, P> = Box<dyn FnOnce(&mut FlowEngine<S, P>) -> Result<(), CoreEngineError>>;

pub struct EngineBuilder<S, P>
    where S: Send + 'static
{
    run_id: Uuid,
    persistor: P,
    capabilities: Capabilities,
    steps: Vec<PendingStep<S, P>>,
}

impl<S, P> EngineBuilder<S, P>
    where S: Clone + PartialEq + Send + Sync + 'static,
          P: StatePersistor<S> + 'static
{
    pub fn new(run_id: Uuid, persistor: P) -> Self {
        Self { run_id,
               persistor,
               capabilities: Capabilities::new(),
               steps: Vec::new() }
    }

    /// Registra una capacidad disponible para todos los steps.
    pub fn capability<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.capabilities.insert(value);
        self
    }

    pub fn shared_capability<T: Any + Send + Sync>(mut self, value: Arc<T>) -> Self {
        self.capabilities.insert_shared(value);
        self
    }

    pub fn step<F, Fut>(self, name: impl Into<String>, func: F) -> Self
        where F: Fn(S, StepContext) -> Fut + Send + Sync + 'static,
              Fut: Future<Output = Result<S, StepError>> + Send + 'static
    {
        self.add_step(FnStep::new(name, func))
    }

    pub fn add_step<T>(mut self, step: T) -> Self
        where T: StepDefinition<S> + 'static
    {
        self.steps.push(Box::new(move |engine: &mut FlowEngine<S, P>| engine.add_step(step).map(|_| ())));
        self
    }

    /// Construye el engine registrando los steps en el orden declarado.
    pub fn build(self) -> Result<FlowEngine<S, P>, CoreEngineError> {
        let mut engine = FlowEngine::with_capabilities(self.run_id, self.persistor, self.capabilities);
        for register in self.steps {
            register(&mut engine)?;
        }
        Ok(engine)
    }
}
