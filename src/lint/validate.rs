//! Pre-flight validation of a provider's dependency declarations.
//!
//! The executor has no cycle guard, so an integrator runs this once (at
//! startup or in a test suite) before executing a provider's steps.

use super::catalog::StepCatalog;
use super::rules::{CircularDependencyRule, SelfDependencyRule};
use crate::error::{CalcflowError, Result};
use crate::steps::StepProvider;

/// Check a provider's steps for self-dependencies and cycles.
///
/// Self-dependencies are reported first and name every offending step. A
/// cycle is reported with its full chain, e.g. `A -> E -> D -> A`.
pub fn validate<R, P: StepProvider<R>>(provider: &P) -> Result<()> {
    validate_catalog(&StepCatalog::from_provider(provider))
}

/// Same as [`validate`], over a metadata snapshot.
pub fn validate_catalog(catalog: &StepCatalog) -> Result<()> {
    let offenders = SelfDependencyRule::offenders(catalog);
    if !offenders.is_empty() {
        return Err(CalcflowError::SelfDependency {
            steps: offenders.join(", "),
        });
    }

    if let Some(cycle) = CircularDependencyRule::cycles(catalog).into_iter().next() {
        return Err(CalcflowError::CircularDependency {
            step: cycle[0].clone(),
            cycle: cycle.join(" -> "),
        });
    }

    Ok(())
}
