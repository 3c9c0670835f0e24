//! Calcflow - dependency-ordered field calculation.
//!
//! A record is filled in by a set of steps. Each step computes one field and
//! names the fields it reads; the executor runs every step once, always after
//! the steps computing its dependencies, without building a graph up front.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`demo`] - Reference record and calculator
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Static checks of step dependencies
//! - [`runner`] - Dependency-ordered execution
//! - [`steps`] - Steps, dependency lists and providers
//!
//! # Example
//!
//! ```
//! use calcflow::demo::{entity_calculator, EntityRecord};
//! use calcflow::lint::validate;
//! use calcflow::runner::CalculationExecutor;
//!
//! let calculator = entity_calculator().unwrap();
//! validate(&calculator).unwrap();
//!
//! let mut entity = EntityRecord::with_inputs(1, 5);
//! CalculationExecutor::new(&calculator).execute(&mut entity).unwrap();
//! assert_eq!(entity.f, 139);
//! ```

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod lint;
pub mod runner;
pub mod steps;

pub use error::{CalcflowError, Result};
