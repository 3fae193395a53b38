//! StateFlow Rust Library
//!
//! Este crate actúa como fachada del workspace:
//! - Re-exporta `stateflow_core` (engine, steps, puerto de persistencia).
//! - Re-exporta `stateflow_persistence` (backend de archivos JSON).
//! - Expone `demo` con el workflow de referencia usado por `main-core`.

pub mod demo;
pub mod errors;

pub use stateflow_core as core;
pub use stateflow_persistence as persistence;
