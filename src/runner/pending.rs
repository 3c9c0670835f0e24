//! Pending steps of one execution and next-step resolution.

use tracing::trace;

use crate::steps::Step;

/// Steps not yet run within the current `execute` call.
///
/// Removal keeps the relative order of the remaining steps, so the first
/// pending step is always the earliest discovered one still waiting.
pub struct PendingSet<R> {
    steps: Vec<Step<R>>,
}

impl<R> PendingSet<R> {
    /// Start with every discovered step pending.
    pub fn new(steps: Vec<Step<R>>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Names of the pending steps, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(Step::name)
    }

    /// Position of the first pending step computing `field`.
    fn position(&self, field: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.name() == field)
    }

    /// Pick the next step to run.
    ///
    /// Starts at the first pending step and keeps descending into the first
    /// dependency that still has a pending step, until it reaches a step
    /// whose dependencies are all satisfied. Only the first match is followed
    /// at each level.
    ///
    /// Returns `None` once nothing is pending. A dependency cycle among
    /// pending steps makes this recurse without bound.
    pub fn resolve_next(&self) -> Option<usize> {
        if self.steps.is_empty() {
            return None;
        }
        Some(self.resolve(0))
    }

    fn resolve(&self, candidate: usize) -> usize {
        let step = &self.steps[candidate];
        if step.depends_on().is_empty() {
            return candidate;
        }

        // Dependencies without a pending step are already satisfied.
        let first_pending = step
            .depends_on()
            .iter()
            .find_map(|field| self.position(field));

        match first_pending {
            None => candidate,
            Some(dependency) => {
                trace!(
                    "{} waits on {}",
                    step.name(),
                    self.steps[dependency].name()
                );
                self.resolve(dependency)
            }
        }
    }

    /// Remove the step at `index` and hand it back.
    pub fn take(&mut self, index: usize) -> Step<R> {
        self.steps.remove(index)
    }
}
