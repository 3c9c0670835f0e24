//! Undefined dependency detection.
//!
//! A dependency naming no step is an input field the caller fills in before
//! execution. That is usually intended, so this rule only reports a hint;
//! a typo in a dependency name shows up here too.

use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity, StepCatalog};

/// Reports dependencies that no step computes.
pub struct UndefinedDependencyRule;

impl LintRule for UndefinedDependencyRule {
    fn id(&self) -> RuleId {
        RuleId::new("undefined-dependency")
    }

    fn name(&self) -> &str {
        "Undefined Dependency"
    }

    fn description(&self) -> &str {
        "Reports dependencies that no step computes"
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn check(&self, catalog: &StepCatalog) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for step in &catalog.steps {
            for dep in step.depends_on.iter() {
                if !catalog.contains(dep) {
                    diagnostics.push(
                        LintDiagnostic::new(
                            self.id(),
                            self.default_severity(),
                            format!(
                                "Step '{}' depends on '{}', which no step computes; it is treated as an input",
                                step.name, dep
                            ),
                        )
                        .with_step(step.name.clone()),
                    );
                }
            }
        }

        diagnostics
    }
}
