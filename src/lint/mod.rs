//! Static validation of step metadata.
//!
//! The executor trusts the dependency lists it is given. This module checks
//! them ahead of time through a pluggable rule-based system.
//!
//! # Overview
//!
//! - **Catalog** - Step names and dependencies, detached from actions ([`StepCatalog`])
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Linter** - Runs a registry with configured rule levels ([`Linter`])
//! - **Diagnostics** - Issue reports naming the offending steps ([`LintDiagnostic`])
//! - [`validate`] - Pre-flight check for self-dependencies and cycles
//!
//! # Example
//!
//! ```
//! use calcflow::lint::{validate, Linter, StepCatalog};
//! use calcflow::steps::StepRegistry;
//!
//! struct Row {
//!     a: i64,
//!     b: i64,
//! }
//!
//! let registry = StepRegistry::builder()
//!     .add_step("b", ["a"], |r: &mut Row| {
//!         r.b = r.a + 1;
//!         Ok(())
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert!(validate(&registry).is_ok());
//!
//! let diagnostics = Linter::default().run(&StepCatalog::from_provider(&registry));
//! assert!(!Linter::default().fails(&diagnostics));
//! ```

pub mod catalog;
pub mod diagnostic;
pub mod linter;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod validate;

pub use catalog::{StepCatalog, StepInfo};
pub use diagnostic::LintDiagnostic;
pub use linter::Linter;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{
    CircularDependencyRule, DuplicateStepRule, SelfDependencyRule, UndefinedDependencyRule,
    UnknownFieldRule,
};
pub use validate::{validate, validate_catalog};
