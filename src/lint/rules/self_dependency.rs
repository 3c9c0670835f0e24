//! Self-dependency detection.
//!
//! This rule detects steps that list their own field as a dependency. The
//! executor would recurse into such a step forever.

use crate::lint::{LintDiagnostic, LintRule, RuleId, StepCatalog, Severity};

/// Detects steps that depend on themselves.
pub struct SelfDependencyRule;

impl SelfDependencyRule {
    /// Names of all steps depending on their own field, in catalog order.
    pub fn offenders(catalog: &StepCatalog) -> Vec<String> {
        catalog
            .steps
            .iter()
            .filter(|s| s.depends_on.contains(&s.name))
            .map(|s| s.name.clone())
            .collect()
    }
}

impl LintRule for SelfDependencyRule {
    fn id(&self) -> RuleId {
        RuleId::new("self-dependency")
    }

    fn name(&self) -> &str {
        "Self Dependency"
    }

    fn description(&self) -> &str {
        "Detects steps that depend on their own field"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, catalog: &StepCatalog) -> Vec<LintDiagnostic> {
        Self::offenders(catalog)
            .into_iter()
            .map(|step| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("Step '{}' depends on itself", step),
                )
                .with_chain(vec![step.clone(), step.clone()])
                .with_suggestion(format!("Remove '{}' from its own depends_on list", step))
                .with_step(step)
            })
            .collect()
    }
}
