//! Dependency-ordered step execution.

use std::marker::PhantomData;

use tracing::{debug, warn};

use super::pending::PendingSet;
use crate::error::{CalcflowError, Result};
use crate::steps::StepProvider;

/// Runs every step of a provider exactly once against a record.
///
/// The provider is queried on every [`execute`](Self::execute) call, so steps
/// added between calls are picked up. Nothing is cached between calls.
///
/// The executor does not detect cycles. A step that depends on itself, or a
/// dependency chain leading back to a pending step, recurses until the stack
/// is exhausted. Run [`crate::lint::validate`] over the provider first.
pub struct CalculationExecutor<R, P> {
    provider: P,
    _record: PhantomData<fn(&mut R)>,
}

impl<R, P: StepProvider<R>> CalculationExecutor<R, P> {
    /// Create an executor bound to a step provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            _record: PhantomData,
        }
    }

    /// The bound step provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run all steps against `record`.
    ///
    /// Whenever the declared dependencies allow it, a step runs only after
    /// every step named in its dependency chain. If an action fails, the
    /// error is returned immediately; steps not yet run stay unrun and fields
    /// already written are left as they are.
    pub fn execute(&self, record: &mut R) -> Result<()> {
        let mut pending = PendingSet::new(self.provider.list_steps());
        debug!("Discovered {} step(s)", pending.len());

        while let Some(index) = pending.resolve_next() {
            let step = pending.take(index);
            debug!("Running step '{}'", step.name());

            if let Err(source) = step.run(record) {
                warn!(
                    "Step '{}' failed, {} step(s) left unrun",
                    step.name(),
                    pending.len()
                );
                return Err(CalcflowError::StepFailed {
                    step: step.name().to_string(),
                    source,
                });
            }
        }

        Ok(())
    }
}
