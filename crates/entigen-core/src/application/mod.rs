//! Application layer: orchestration, planning, and ports.

pub mod engine;
pub mod error;
pub mod planner;
pub mod ports;

pub use engine::{GenerationEngine, GenerationResult};
pub use error::ApplicationError;
pub use planner::{OutputPlan, OutputPlanner, OverwritePolicy, PlannedFile, RenderedOutput, WriteMode};
