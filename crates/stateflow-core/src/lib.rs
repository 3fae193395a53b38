//! stateflow-core: motor secuencial reanudable.
//!
//! Ejecuta una lista ordenada de steps sobre un estado tipado y registra el
//! resultado de cada uno en un `StatePersistor`, de modo que una corrida
//! posterior con el mismo `run_id` salte lo ya completado.
pub mod engine;
pub mod errors;
pub mod model;
pub mod persist;
pub mod step;

pub use engine::{EngineBuilder, FlowEngine, RunSummary, StepOutcome, StepReport};
pub use errors::{CoreEngineError, PersistenceError, StepError};
pub use model::{Capabilities, StepContext};
pub use persist::{InMemoryPersistor, NoopPersistor, PersistCall, StatePersistor};
pub use step::{ensure_set, FnStep, Settable, StepDefinition, StepDescriptor, StepRecord, StepRunResult, StepStatus};
