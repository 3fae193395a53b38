//! Definiciones relacionadas a Steps.
//!
//! Un Step es una unidad con nombre que transforma el estado del workflow.
//! Este módulo define:
//! - `StepDefinition`: interfaz usada por el engine (y `FnStep` para closures).
//! - `StepStatus` / `StepRecord`: el modelo persistido de resultados.
//! - `StepDescriptor`: registro en memoria, superpuesto con lo persistido.
//! - `StepRunResult`: resultado neutro de una ejecución.
//! - `ensure_set` / `Settable`: validación de propiedades requeridas.

pub mod definition;
pub mod descriptor;
pub mod macros;
mod record;
mod run_result;
pub mod settable;
mod status;

pub use definition::{FnStep, StepDefinition};
pub use descriptor::StepDescriptor;
pub use record::StepRecord;
pub use run_result::StepRunResult;
pub use settable::{ensure_set, Settable};
pub use status::{StepStatus, UnknownStatusCode};
