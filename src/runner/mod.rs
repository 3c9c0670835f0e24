//! Dependency-ordered step execution.

pub mod executor;
pub mod pending;

pub use executor::CalculationExecutor;
pub use pending::PendingSet;
