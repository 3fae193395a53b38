//! Modelos neutrales entregados a los steps (contexto y capacidades).

pub mod capabilities;
pub mod context;

pub use capabilities::Capabilities;
pub use context::StepContext;
