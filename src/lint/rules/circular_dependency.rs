//! Circular dependency detection.
//!
//! This rule detects chains of dependencies between steps that lead back to
//! where they started. Dependencies naming no step are inputs and end a
//! chain. Direct self-dependencies are left to the self-dependency rule.

use std::collections::HashSet;

use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity, StepCatalog};

/// Detects circular dependencies between steps.
pub struct CircularDependencyRule;

impl CircularDependencyRule {
    /// All distinct cycles, each starting and ending at the same step.
    ///
    /// Starting points are tried in catalog order; a cycle reached from
    /// several starting points is reported once.
    pub fn cycles(catalog: &StepCatalog) -> Vec<Vec<String>> {
        let mut cycles = Vec::new();
        let mut reported = HashSet::new();

        for step in &catalog.steps {
            if let Some(cycle) = Self::find_cycle(catalog, &step.name) {
                let cycle_key = {
                    let mut sorted = cycle[..cycle.len() - 1].to_vec();
                    sorted.sort();
                    sorted.join(",")
                };
                if reported.insert(cycle_key) {
                    cycles.push(cycle);
                }
            }
        }

        cycles
    }

    fn find_cycle(catalog: &StepCatalog, start: &str) -> Option<Vec<String>> {
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        Self::dfs(catalog, start, &mut visited, &mut path)
    }

    fn dfs(
        catalog: &StepCatalog,
        current: &str,
        visited: &mut HashSet<String>,
        path: &mut Vec<String>,
    ) -> Option<Vec<String>> {
        if let Some(cycle_start) = path.iter().position(|s| s == current) {
            let mut cycle = path[cycle_start..].to_vec();
            cycle.push(current.to_string());
            return Some(cycle);
        }
        if !visited.insert(current.to_string()) {
            return None;
        }

        path.push(current.to_string());

        if let Some(step) = catalog.get(current) {
            for dep in step.depends_on.iter() {
                if dep == current || !catalog.contains(dep) {
                    continue;
                }
                if let Some(cycle) = Self::dfs(catalog, dep, visited, path) {
                    return Some(cycle);
                }
            }
        }

        path.pop();
        None
    }
}

impl LintRule for CircularDependencyRule {
    fn id(&self) -> RuleId {
        RuleId::new("circular-dependency")
    }

    fn name(&self) -> &str {
        "Circular Dependency"
    }

    fn description(&self) -> &str {
        "Detects circular dependencies between steps"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, catalog: &StepCatalog) -> Vec<LintDiagnostic> {
        Self::cycles(catalog)
            .into_iter()
            .map(|cycle| {
                let mut diagnostic = LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "Step '{}' has a circular reference to itself via {}",
                        cycle[0],
                        cycle.join(" -> ")
                    ),
                );
                for step in &cycle[..cycle.len() - 1] {
                    diagnostic = diagnostic.with_step(step.clone());
                }
                diagnostic.with_chain(cycle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::StepInfo;
    use crate::steps::DependsOn;

    fn catalog(steps: &[(&str, &[&str])]) -> StepCatalog {
        StepCatalog {
            fields: None,
            steps: steps
                .iter()
                .map(|(name, deps)| StepInfo::new(*name, DependsOn::new(deps.iter().copied())))
                .collect(),
        }
    }

    #[test]
    fn detects_simple_cycle() {
        let diagnostics = CircularDependencyRule.check(&catalog(&[("a", &["b"]), ("b", &["a"])]));

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("circular reference"));
        assert_eq!(diagnostics[0].chain, vec!["a", "b", "a"]);
    }

    #[test]
    fn detects_three_step_cycle() {
        let cycles =
            CircularDependencyRule::cycles(&catalog(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]));

        assert_eq!(cycles, vec![vec!["a", "b", "c", "a"]]);
    }

    #[test]
    fn trims_path_leading_into_cycle() {
        let cycles = CircularDependencyRule::cycles(&catalog(&[
            ("x", &["a"]),
            ("a", &["b"]),
            ("b", &["a"]),
        ]));

        assert_eq!(cycles, vec![vec!["a", "b", "a"]]);
    }

    #[test]
    fn reports_full_chain_of_longer_cycle() {
        // B -> A -> E -> B, reached from F through D.
        let catalog = catalog(&[
            ("F", &["D", "E"]),
            ("E", &["B", "D"]),
            ("G", &[]),
            ("D", &["B", "C"]),
            ("B", &["A"]),
            ("A", &["E"]),
        ]);

        let diagnostics = CircularDependencyRule.check(&catalog);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].chain, vec!["B", "A", "E", "B"]);
        assert!(diagnostics[0].steps.contains(&"A".to_string()));
    }

    #[test]
    fn no_cycle_in_valid_deps() {
        let diagnostics = CircularDependencyRule.check(&catalog(&[("a", &["b"]), ("b", &[])]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn no_cycle_in_diamond_deps() {
        let diagnostics = CircularDependencyRule.check(&catalog(&[
            ("a", &["b", "c"]),
            ("b", &["d"]),
            ("c", &["d"]),
            ("d", &[]),
        ]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn ignores_direct_self_dependency() {
        let diagnostics = CircularDependencyRule.check(&catalog(&[("a", &["a"])]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn dependencies_without_steps_end_the_chain() {
        let diagnostics = CircularDependencyRule.check(&catalog(&[("b", &["a"])]));
        assert!(diagnostics.is_empty());
    }
}
