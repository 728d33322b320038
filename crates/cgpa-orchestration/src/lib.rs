//! # cgpa-orchestration
//!
//! Course input sources, calculation runs, and presenter interfaces.

pub mod interfaces;
pub mod orchestrator;
pub mod sources;

pub use interfaces::{CalculationReport, ResultPresenter};
pub use orchestrator::execute_calculation;
