//! A single named computation over a record.

use std::fmt;
use std::sync::Arc;

use super::depends_on::DependsOn;

/// Shared action of a step: reads fields of the record and writes one.
pub type StepAction<R> = Arc<dyn Fn(&mut R) -> anyhow::Result<()> + Send + Sync>;

/// A named unit of computation bound to record type `R`.
///
/// The name is the field the step computes, which lets dependency lists
/// refer to steps and plain record fields uniformly.
pub struct Step<R> {
    name: String,
    depends_on: DependsOn,
    action: StepAction<R>,
}

impl<R> Step<R> {
    /// Create a step.
    pub fn new<F>(name: impl Into<String>, depends_on: DependsOn, action: F) -> Self
    where
        F: Fn(&mut R) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            depends_on,
            action: Arc::new(action),
        }
    }

    /// Field this step computes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields that must be computed first.
    pub fn depends_on(&self) -> &DependsOn {
        &self.depends_on
    }

    /// Run the action against a record.
    pub fn run(&self, record: &mut R) -> anyhow::Result<()> {
        (self.action)(record)
    }
}

// Manual impl: `R` itself need not be `Clone`.
impl<R> Clone for Step<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            depends_on: self.depends_on.clone(),
            action: Arc::clone(&self.action),
        }
    }
}

impl<R> fmt::Debug for Step<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("depends_on", &self.depends_on)
            .finish_non_exhaustive()
    }
}
