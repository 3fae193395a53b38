use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::{PersistenceError, StepError};
use crate::step::StepRecord;

/// Contrato con el almacenamiento durable de una corrida.
///
/// Invariantes que las implementaciones deben respetar:
/// - `retrieve` es idempotente y sin efectos; sin datos previos devuelve
///   registros vacíos y el `default_state` recibido.
/// - `persist_success` / `persist_error` reemplazan cualquier registro previo
///   con el mismo nombre de step.
/// - `persist_state` reemplaza el snapshot anterior; nunca lo modifica.
///
/// El formato y transporte de lo almacenado es asunto exclusivo del backend.
#[async_trait]
pub trait StatePersistor<S>: Send + Sync
    where S: Send + Sync + 'static
{
    async fn retrieve(&self, run_id: Uuid, default_state: S) -> Result<(Vec<StepRecord>, S), PersistenceError>;

    async fn persist_success(&self, run_id: Uuid, step_name: &str) -> Result<(), PersistenceError>;

    /// Registra el fallo de un step; `error.to_string()` queda como
    /// `last_error`.
    async fn persist_error(&self, run_id: Uuid, step_name: &str, error: &StepError) -> Result<(), PersistenceError>;

    async fn persist_state(&self, run_id: Uuid, state: &S) -> Result<(), PersistenceError>;
}

#[async_trait]
impl<S, P> StatePersistor<S> for Arc<P>
    where S: Send + Sync + 'static,
          P: StatePersistor<S> + ?Sized
{
    async fn retrieve(&self, run_id: Uuid, default_state: S) -> Result<(Vec<StepRecord>, S), PersistenceError> {
        (**self).retrieve(run_id, default_state).await
    }

    async fn persist_success(&self, run_id: Uuid, step_name: &str) -> Result<(), PersistenceError> {
        (**self).persist_success(run_id, step_name).await
    }

    async fn persist_error(&self, run_id: Uuid, step_name: &str, error: &StepError) -> Result<(), PersistenceError> {
        (**self).persist_error(run_id, step_name, error).await
    }

    async fn persist_state(&self, run_id: Uuid, state: &S) -> Result<(), PersistenceError> {
        (**self).persist_state(run_id, state).await
    }
}

/// Backend que descarta todas las escrituras y nunca encuentra datos previos.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPersistor;

#[async_trait]
impl<S> StatePersistor<S> for NoopPersistor where S: Send + Sync + 'static
{
    async fn retrieve(&self, _run_id: Uuid, default_state: S) -> Result<(Vec<StepRecord>, S), PersistenceError> {
        Ok((Vec::new(), default_state))
    }

    async fn persist_success(&self, _run_id: Uuid, _step_name: &str) -> Result<(), PersistenceError> {
        Ok(())
    }

    async fn persist_error(&self, _run_id: Uuid, _step_name: &str, _error: &StepError) -> Result<(), PersistenceError> {
        Ok(())
    }

    async fn persist_state(&self, _run_id: Uuid, _state: &S) -> Result<(), PersistenceError> {
        Ok(())
    }
}
