//! Duplicate step detection.
//!
//! Only the first step with a given name is ever matched as a dependency, so
//! later duplicates silently lose their place in the ordering.

use std::collections::HashMap;

use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity, StepCatalog};

/// Detects steps sharing a name.
pub struct DuplicateStepRule;

impl LintRule for DuplicateStepRule {
    fn id(&self) -> RuleId {
        RuleId::new("duplicate-step")
    }

    fn name(&self) -> &str {
        "Duplicate Step"
    }

    fn description(&self) -> &str {
        "Ensures step names are unique"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, catalog: &StepCatalog) -> Vec<LintDiagnostic> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for step in &catalog.steps {
            let count = counts.entry(step.name.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(step.name.as_str());
            }
        }

        order
            .into_iter()
            .map(|name| {
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("Step '{}' is defined {} times", name, counts[name]),
                )
                .with_step(name)
            })
            .collect()
    }
}
