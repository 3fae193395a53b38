//! Puerto de persistencia y backends incluidos en el core.
//!
//! - `StatePersistor`: contrato que el engine usa para leer y registrar el
//!   progreso de una corrida.
//! - `NoopPersistor`: backend conforme que no guarda nada (corridas no
//!   durables).
//! - `InMemoryPersistor`: backend en memoria con diario de llamadas, pensado
//!   para tests y prototipos.

mod memory;
mod port;

pub use memory::{InMemoryPersistor, PersistCall};
pub use port::{NoopPersistor, StatePersistor};
