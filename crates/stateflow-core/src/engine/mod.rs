//! Engine module for FlowEngine implementation
//!
//! Provides the core engine, its builder, the pure merge of persisted records
//! over registered steps, and the per-run summary types.

pub mod builder;
pub mod core;
pub mod merge;
mod summary;

pub use builder::EngineBuilder;
pub use self::core::FlowEngine;
pub use merge::merge_with_records;
pub use summary::{RunSummary, StepOutcome, StepReport};
