//! Step providers and explicit step registration.

use std::collections::HashSet;

use super::depends_on::DependsOn;
use super::step::Step;
use crate::error::{CalcflowError, Result};

/// Source of the full step list for one record type.
///
/// `list_steps` must return the same order on repeated calls unless steps
/// were added or removed in between; that order is the discovery order the
/// executor starts from.
pub trait StepProvider<R> {
    /// All steps, in discovery order.
    fn list_steps(&self) -> Vec<Step<R>>;
}

impl<R, P: StepProvider<R> + ?Sized> StepProvider<R> for &P {
    fn list_steps(&self) -> Vec<Step<R>> {
        (**self).list_steps()
    }
}

impl<R> StepProvider<R> for Vec<Step<R>> {
    fn list_steps(&self) -> Vec<Step<R>> {
        self.clone()
    }
}

/// Ordered, immutable collection of uniquely named steps.
pub struct StepRegistry<R> {
    steps: Vec<Step<R>>,
}

impl<R> Clone for StepRegistry<R> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<R> std::fmt::Debug for StepRegistry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRegistry")
            .field("steps", &self.steps)
            .finish()
    }
}

impl<R> StepRegistry<R> {
    /// Create a new registry builder.
    pub fn builder() -> StepRegistryBuilder<R> {
        StepRegistryBuilder::new()
    }

    /// Look up a step by name.
    pub fn get(&self, name: &str) -> Option<&Step<R>> {
        self.steps.iter().find(|s| s.name() == name)
    }

    /// Check if a step exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Step names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(Step::name)
    }

    /// Iterate over steps in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Step<R>> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<R> StepProvider<R> for StepRegistry<R> {
    fn list_steps(&self) -> Vec<Step<R>> {
        self.steps.clone()
    }
}

/// Builder for constructing a [`StepRegistry`].
pub struct StepRegistryBuilder<R> {
    steps: Vec<Step<R>>,
}

impl<R> Default for StepRegistryBuilder<R> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<R> StepRegistryBuilder<R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a step computing `name` after the listed fields.
    pub fn add_step<I, S, F>(self, name: impl Into<String>, depends_on: I, action: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&mut R) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.with_step(Step::new(name, DependsOn::new(depends_on), action))
    }

    /// Register an already constructed step.
    pub fn with_step(mut self, step: Step<R>) -> Self {
        self.steps.push(step);
        self
    }

    /// Build the registry.
    ///
    /// Returns an error if two steps share a name.
    pub fn build(self) -> Result<StepRegistry<R>> {
        let mut seen = HashSet::new();
        for step in &self.steps {
            if !seen.insert(step.name()) {
                return Err(CalcflowError::DuplicateStep {
                    name: step.name().to_string(),
                });
            }
        }

        Ok(StepRegistry { steps: self.steps })
    }
}
