use async_trait::async_trait;
use dashmap::DashMap;
use indexmap::IndexMap;
use uuid::Uuid;

use super::StatePersistor;
use crate::errors::{PersistenceError, StepError};
use crate::step::StepRecord;

/// Escritura observada por un `InMemoryPersistor`, en orden de llegada.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistCall<S> {
    Success { step: String },
    Error { step: String, message: String },
    State { state: S },
}

struct RunEntry<S> {
    // orden de primera escritura; una re-escritura reemplaza en su lugar
    records: IndexMap<String, StepRecord>,
    state: Option<S>,
    calls: Vec<PersistCall<S>>,
}

impl<S> Default for RunEntry<S> {
    fn default() -> Self {
        Self { records: IndexMap::new(),
               state: None,
               calls: Vec::new() }
    }
}

/// Backend en memoria, indexado por `run_id`.
///
/// Además de almacenar, lleva un diario de las escrituras (`calls`) que los
/// tests usan para verificar exactamente qué llamadas hizo el engine. Corridas
/// con distinto `run_id` pueden usarlo concurrentemente.
pub struct InMemoryPersistor<S> {
    runs: DashMap<Uuid, RunEntry<S>>,
}

impl<S> Default for InMemoryPersistor<S> {
    fn default() -> Self {
        Self { runs: DashMap::new() }
    }
}

impl<S: Clone> InMemoryPersistor<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Precarga lo que `retrieve` devolverá para `run_id`. No queda en el
    /// diario de llamadas.
    pub fn seed(&self, run_id: Uuid, records: Vec<StepRecord>, state: S) {
        let mut entry = self.runs.entry(run_id).or_default();
        entry.records = records.into_iter().map(|r| (r.name.clone(), r)).collect();
        entry.state = Some(state);
    }

    pub fn records(&self, run_id: Uuid) -> Vec<StepRecord> {
        self.runs
            .get(&run_id)
            .map(|e| e.records.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn record(&self, run_id: Uuid, step_name: &str) -> Option<StepRecord> {
        self.runs.get(&run_id).and_then(|e| e.records.get(step_name).cloned())
    }

    /// Último snapshot persistido (o sembrado) para la corrida.
    pub fn state(&self, run_id: Uuid) -> Option<S> {
        self.runs.get(&run_id).and_then(|e| e.state.clone())
    }

    pub fn calls(&self, run_id: Uuid) -> Vec<PersistCall<S>> {
        self.runs.get(&run_id).map(|e| e.calls.clone()).unwrap_or_default()
    }

    /// Snapshots persistidos vía `persist_state`, en orden.
    pub fn persisted_states(&self, run_id: Uuid) -> Vec<S> {
        self.calls(run_id)
            .into_iter()
            .filter_map(|c| match c {
                PersistCall::State { state } => Some(state),
                _ => None,
            })
            .collect()
    }

    /// Nombres de steps con `persist_success`, en orden.
    pub fn successes(&self, run_id: Uuid) -> Vec<String> {
        self.calls(run_id)
            .into_iter()
            .filter_map(|c| match c {
                PersistCall::Success { step } => Some(step),
                _ => None,
            })
            .collect()
    }

    /// Pares (step, mensaje) de `persist_error`, en orden.
    pub fn errors(&self, run_id: Uuid) -> Vec<(String, String)> {
        self.calls(run_id)
            .into_iter()
            .filter_map(|c| match c {
                PersistCall::Error { step, message } => Some((step, message)),
                _ => None,
            })
            .collect()
    }

    /// Vacía el diario sin tocar registros ni estado.
    pub fn clear_calls(&self, run_id: Uuid) {
        if let Some(mut entry) = self.runs.get_mut(&run_id) {
            entry.calls.clear();
        }
    }

    fn upsert(&self, run_id: Uuid, record: StepRecord, call: PersistCall<S>) {
        let mut entry = self.runs.entry(run_id).or_default();
        entry.records.insert(record.name.clone(), record);
        entry.calls.push(call);
    }
}

#[async_trait]
impl<S> StatePersistor<S> for InMemoryPersistor<S> where S: Clone + Send + Sync + 'static
{
    async fn retrieve(&self, run_id: Uuid, default_state: S) -> Result<(Vec<StepRecord>, S), PersistenceError> {
        let Some(entry) = self.runs.get(&run_id) else {
            return Ok((Vec::new(), default_state));
        };
        let records = entry.records.values().cloned().collect();
        let state = entry.state.clone().unwrap_or(default_state);
        Ok((records, state))
    }

    async fn persist_success(&self, run_id: Uuid, step_name: &str) -> Result<(), PersistenceError> {
        self.upsert(run_id,
                    StepRecord::success(step_name),
                    PersistCall::Success { step: step_name.to_string() });
        Ok(())
    }

    async fn persist_error(&self, run_id: Uuid, step_name: &str, error: &StepError) -> Result<(), PersistenceError> {
        let message = error.to_string();
        self.upsert(run_id,
                    StepRecord::failed(step_name, message.clone()),
                    PersistCall::Error { step: step_name.to_string(),
                                         message });
        Ok(())
    }

    async fn persist_state(&self, run_id: Uuid, state: &S) -> Result<(), PersistenceError> {
        let mut entry = self.runs.entry(run_id).or_default();
        entry.state = Some(state.clone());
        entry.calls.push(PersistCall::State { state: state.clone() });
        Ok(())
    }
}
