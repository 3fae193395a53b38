//! Core FlowEngine implementation

use std::future::Future;
use std::sync::Arc;

use log::{debug, error, info, warn};
use uuid::Uuid;

use super::merge::merge_with_records;
use super::summary::{RunSummary, StepOutcome, StepReport};
use crate::engine::EngineBuilder;
use crate::errors::{CoreEngineError, StepError};
use crate::model::{Capabilities, StepContext};
use crate::persist::StatePersistor;
use crate::step::{FnStep, StepDefinition, StepDescriptor, StepRunResult};

/// Motor de ejecución secuencial y reanudable.
///
/// Ejecuta en orden de registro los steps de un workflow sobre un estado `S`,
/// registrando el resultado de cada uno en el `StatePersistor`. Una corrida
/// posterior con el mismo `run_id` salta los steps que ya tienen resultado y
/// continúa desde el primero pendiente.
pub struct FlowEngine<S, P>
    where S: Send + 'static
{
    run_id: Uuid,
    persistor: P,
    capabilities: Arc<Capabilities>,
    steps: Vec<StepDescriptor<S>>,
}

impl<S, P> FlowEngine<S, P>
    where S: Clone + PartialEq + Send + Sync + 'static,
          P: StatePersistor<S> + 'static
{
    /// Crea un engine sin capacidades registradas.
    pub fn new(run_id: Uuid, persistor: P) -> Self {
        Self::with_capabilities(run_id, persistor, Capabilities::new())
    }

    pub fn with_capabilities(run_id: Uuid, persistor: P, capabilities: Capabilities) -> Self {
        Self { run_id,
               persistor,
               capabilities: Arc::new(capabilities),
               steps: Vec::new() }
    }

    /// Builder encadenable (capacidades + steps) para construir el engine.
    pub fn builder(run_id: Uuid, persistor: P) -> EngineBuilder<S, P> {
        EngineBuilder::new(run_id, persistor)
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn persistor(&self) -> &P {
        &self.persistor
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Registra un step a partir de una closure async.
    ///
    /// # Ejemplo
    /// ```ignore
    /// engine.add("Step1", |state, ctx| async move { Ok(state) })?;
    /// ```
    pub fn add<F, Fut>(&mut self, name: impl Into<String>, func: F) -> Result<&mut Self, CoreEngineError>
        where F: Fn(S, StepContext) -> Fut + Send + Sync + 'static,
              Fut: Future<Output = Result<S, StepError>> + Send + 'static
    {
        self.add_step(FnStep::new(name, func))
    }

    /// Registra un step al final de la lista, en `NotStarted`.
    ///
    /// Rechaza nombres vacíos o repetidos: el merge empareja por nombre y un
    /// duplicado haría ambiguo qué registro le corresponde a cada step.
    pub fn add_step<T>(&mut self, step: T) -> Result<&mut Self, CoreEngineError>
        where T: StepDefinition<S> + 'static
    {
        let descriptor = StepDescriptor::new(Arc::new(step));
        if descriptor.name.is_empty() {
            return Err(CoreEngineError::EmptyStepName);
        }
        if self.steps.iter().any(|d| d.name == descriptor.name) {
            return Err(CoreEngineError::DuplicateStep(descriptor.name));
        }
        debug!("register step run_id={} index={} name={}",
               self.run_id,
               self.steps.len(),
               descriptor.name);
        self.steps.push(descriptor);
        Ok(self)
    }

    /// Ejecuta la corrida y devuelve el estado final.
    pub async fn run(&self, default_state: S) -> Result<S, CoreEngineError> {
        self.run_detailed(default_state).await.map(RunSummary::into_state)
    }

    /// Igual que `run`, devolviendo además qué pasó con cada step.
    ///
    /// Por cada step en `NotStarted` ocurre exactamente una de:
    /// - `persist_success` (+ `persist_state` si el estado cambió),
    /// - `persist_error` (el estado actual no cambia y se sigue con el próximo).
    ///
    /// Steps con cualquier otro estado no generan llamadas. Sólo escapan un
    /// estado vacío (`EmptyState`) y los fallos del propio persistor.
    pub async fn run_detailed(&self, default_state: S) -> Result<RunSummary<S>, CoreEngineError> {
        let ctx = StepContext::new(self.run_id, Arc::clone(&self.capabilities));

        let (records, prior_state) = self.persistor.retrieve(self.run_id, default_state).await?;
        info!("run:start run_id={} steps={} prior_records={}",
              self.run_id,
              self.steps.len(),
              records.len());

        let merged = merge_with_records(&self.steps, &records);

        let mut current = prior_state;
        let mut reports = Vec::with_capacity(merged.len());
        for descriptor in &merged {
            if !descriptor.status.is_runnable() {
                debug!("step:skip run_id={} name={} status={:?}",
                       self.run_id, descriptor.name, descriptor.status);
                reports.push(StepReport { name: descriptor.name.clone(),
                                          outcome: StepOutcome::Skipped { status: descriptor.status } });
                continue;
            }

            debug!("step:run run_id={} name={}", self.run_id, descriptor.name);
            let outcome = match descriptor.step().run(current.clone(), ctx.clone()).await {
                StepRunResult::Success { state } => {
                    self.persistor.persist_success(self.run_id, &descriptor.name).await?;
                    let state_changed = state != current;
                    if state_changed {
                        current = state;
                        self.persistor.persist_state(self.run_id, &current).await?;
                    }
                    debug!("step:done run_id={} name={} state_changed={}",
                           self.run_id, descriptor.name, state_changed);
                    StepOutcome::Executed { state_changed }
                }
                StepRunResult::Failure { error } => {
                    warn!("step:failed run_id={} name={} err={}",
                          self.run_id, descriptor.name, error);
                    self.persistor.persist_error(self.run_id, &descriptor.name, &error).await?;
                    StepOutcome::Failed { error }
                }
                StepRunResult::Empty => {
                    error!("step:empty-state run_id={} name={}", self.run_id, descriptor.name);
                    return Err(CoreEngineError::EmptyState { step: descriptor.name.clone() });
                }
            };
            reports.push(StepReport { name: descriptor.name.clone(),
                                      outcome });
        }

        let summary = RunSummary { state: current,
                                   reports };
        info!("run:done run_id={} executed={} failed={} skipped={}",
              self.run_id,
              summary.executed_count(),
              summary.failed_count(),
              summary.skipped_count());
        Ok(summary)
    }
}

impl<S, P> std::fmt::Debug for FlowEngine<S, P>
    where S: Send + 'static
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowEngine")
         .field("run_id", &self.run_id)
         .field("steps", &self.steps)
         .field("capabilities", &self.capabilities)
         .finish_non_exhaustive()
    }
}
