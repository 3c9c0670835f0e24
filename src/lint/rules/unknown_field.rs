//! Field naming convention check.
//!
//! Every step is named for the field it computes, and every dependency names
//! a field. When the catalog knows the record's fields, this rule reports
//! names that match none of them.

use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity, StepCatalog};

/// Detects step names and dependencies that are not record fields.
pub struct UnknownFieldRule;

impl LintRule for UnknownFieldRule {
    fn id(&self) -> RuleId {
        RuleId::new("unknown-field")
    }

    fn name(&self) -> &str {
        "Unknown Field"
    }

    fn description(&self) -> &str {
        "Ensures steps and dependencies are named after record fields"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, catalog: &StepCatalog) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        if catalog.fields.is_none() {
            return diagnostics;
        }

        for step in &catalog.steps {
            if !catalog.is_field(&step.name) {
                diagnostics.push(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!("Step '{}' does not compute a field of the record", step.name),
                    )
                    .with_step(step.name.clone())
                    .with_suggestion("Name the step after the field it writes"),
                );
            }

            for dep in step.depends_on.iter() {
                if !catalog.is_field(dep) {
                    diagnostics.push(
                        LintDiagnostic::new(
                            self.id(),
                            self.default_severity(),
                            format!(
                                "Dependency '{}' of step '{}' is not a field of the record",
                                dep, step.name
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::StepInfo;
    use crate::steps::DependsOn;

    fn catalog(fields: Option<&[&str]>, steps: &[(&str, &[&str])]) -> StepCatalog {
        StepCatalog {
            fields: fields.map(|f| f.iter().map(|s| s.to_string()).collect()),
            steps: steps
                .iter()
                .map(|(name, deps)| StepInfo::new(*name, DependsOn::new(deps.iter().copied())))
                .collect(),
        }
    }

    #[test]
    fn skipped_without_field_set() {
        let diagnostics = UnknownFieldRule.check(&catalog(None, &[("anything", &["else"])]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn passes_when_names_match_fields() {
        let diagnostics =
            UnknownFieldRule.check(&catalog(Some(&["A", "B"]), &[("B", &["A"])]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn detects_step_not_named_after_field() {
        let diagnostics =
            UnknownFieldRule.check(&catalog(Some(&["A", "B"]), &[("CalculateB", &["A"])]));

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("CalculateB"));
        assert!(diagnostics[0].suggestion.is_some());
    }

    #[test]
    fn detects_dependency_not_named_after_field() {
        let diagnostics =
            UnknownFieldRule.check(&catalog(Some(&["A", "B"]), &[("B", &["Z"])]));

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'Z'"));
        assert_eq!(diagnostics[0].steps, vec!["B"]);
    }
}
