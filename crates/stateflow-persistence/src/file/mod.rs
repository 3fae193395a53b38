//! Backend durable basado en archivos JSON.
//!
//! Un documento por corrida en `<dir>/<run_id>.json`:
//! - `steps`: último `StepRecord` de cada step (uno por nombre, orden de
//!   primera escritura).
//! - `state`: último snapshot (`{ "value": ... }`), o `null` si nunca se
//!   persistió. El envoltorio distingue un estado que serializa a `null` de
//!   la ausencia de snapshot.
//!
//! Cada escritura lee el documento, lo modifica y lo reemplaza de forma
//! atómica (archivo temporal + rename). Corridas concurrentes sobre el mismo
//! `run_id` no están soportadas; corridas distintas no comparten archivos.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stateflow_core::{PersistenceError, StatePersistor, StepError, StepRecord};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::FileStoreError;

/// Versión del formato de documento. Documentos con otra versión se reportan
/// como corruptos en lugar de interpretarse a medias.
pub const FORMAT_VERSION: u32 = 2;

/// Snapshot del estado tal como quedó serializado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub value: Value,
}

/// Representación en disco de una corrida.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDocument {
    pub format_version: u32,
    pub run_id: Uuid,
    pub steps: Vec<StepRecord>,
    pub state: Option<StateSnapshot>,
    pub updated_at: DateTime<Utc>,
}

impl RunDocument {
    pub fn new(run_id: Uuid) -> Self {
        Self { format_version: FORMAT_VERSION,
               run_id,
               steps: Vec::new(),
               state: None,
               updated_at: Utc::now() }
    }

    /// Reemplaza el registro con el mismo nombre o lo agrega al final.
    pub fn upsert(&mut self, record: StepRecord) {
        match self.steps.iter_mut().find(|r| r.name == record.name) {
            Some(slot) => *slot = record,
            None => self.steps.push(record),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonFilePersistor {
    dir: PathBuf,
}

impl JsonFilePersistor {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.state_dir.clone())
    }

    /// Helper: carga `.env` y usa `STATEFLOW_STATE_DIR`.
    pub fn from_env() -> Self {
        Self::from_config(&StoreConfig::from_env())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, run_id: Uuid) -> PathBuf {
        self.dir.join(format!("{run_id}.json"))
    }

    /// Lee el documento de una corrida; `None` si nunca se escribió.
    pub async fn load_document(&self, run_id: Uuid) -> Result<Option<RunDocument>, FileStoreError> {
        let path = self.path_for(run_id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(FileStoreError::io(path, e)),
        };
        let doc: RunDocument = serde_json::from_slice(&bytes).map_err(|e| FileStoreError::Corrupted { path: path.clone(),
                                                                                                 reason: e.to_string() })?;
        if doc.format_version != FORMAT_VERSION {
            return Err(FileStoreError::Corrupted { path,
                                                   reason: format!("unsupported format_version {}", doc.format_version) });
        }
        if doc.run_id != run_id {
            return Err(FileStoreError::Corrupted { path,
                                                   reason: format!("document belongs to run {}", doc.run_id) });
        }
        Ok(Some(doc))
    }

    async fn write_document(&self, doc: &RunDocument) -> Result<(), FileStoreError> {
        tokio::fs::create_dir_all(&self.dir).await
                                            .map_err(|e| FileStoreError::io(&self.dir, e))?;
        let path = self.path_for(doc.run_id);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(doc)?;
        tokio::fs::write(&tmp, bytes).await
                                     .map_err(|e| FileStoreError::io(&tmp, e))?;
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(FileStoreError::io(&path, e));
        }
        debug!("write_document run_id={} steps={} path={}",
               doc.run_id,
               doc.steps.len(),
               path.display());
        Ok(())
    }

    async fn update<F>(&self, run_id: Uuid, f: F) -> Result<(), FileStoreError>
        where F: FnOnce(&mut RunDocument) + Send
    {
        let mut doc = self.load_document(run_id)
                          .await?
                          .unwrap_or_else(|| RunDocument::new(run_id));
        f(&mut doc);
        doc.updated_at = Utc::now();
        self.write_document(&doc).await
    }
}

fn port_error(run_id: Uuid, op: &str, err: FileStoreError) -> PersistenceError {
    error!("{op} failed run_id={run_id} err={err}");
    err.into()
}

#[async_trait]
impl<S> StatePersistor<S> for JsonFilePersistor where S: Serialize + DeserializeOwned + Send + Sync + 'static
{
    async fn retrieve(&self, run_id: Uuid, default_state: S) -> Result<(Vec<StepRecord>, S), PersistenceError> {
        let Some(doc) = self.load_document(run_id)
                            .await
                            .map_err(|e| port_error(run_id, "retrieve", e))?
        else {
            debug!("retrieve run_id={run_id}: no document, using default state");
            return Ok((Vec::new(), default_state));
        };
        let state = match doc.state {
            Some(snapshot) => serde_json::from_value(snapshot.value).map_err(|e| {
                               port_error(run_id,
                                          "retrieve",
                                          FileStoreError::Corrupted { path: self.path_for(run_id),
                                                                      reason: format!("state does not match type: {e}") })
                           })?,
            None => default_state,
        };
        debug!("retrieve run_id={run_id} records={}", doc.steps.len());
        Ok((doc.steps, state))
    }

    async fn persist_success(&self, run_id: Uuid, step_name: &str) -> Result<(), PersistenceError> {
        let record = StepRecord::success(step_name);
        self.update(run_id, move |doc| doc.upsert(record))
            .await
            .map_err(|e| port_error(run_id, "persist_success", e))
    }

    async fn persist_error(&self, run_id: Uuid, step_name: &str, error: &StepError) -> Result<(), PersistenceError> {
        let record = StepRecord::failed(step_name, error.to_string());
        self.update(run_id, move |doc| doc.upsert(record))
            .await
            .map_err(|e| port_error(run_id, "persist_error", e))
    }

    async fn persist_state(&self, run_id: Uuid, state: &S) -> Result<(), PersistenceError> {
        let value = serde_json::to_value(state).map_err(|e| port_error(run_id, "persist_state", e.into()))?;
        self.update(run_id, move |doc| doc.state = Some(StateSnapshot { value }))
            .await
            .map_err(|e| port_error(run_id, "persist_state", e))
    }
}
