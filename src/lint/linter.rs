//! Running a set of rules over a catalog.

use std::cmp::Reverse;

use super::catalog::StepCatalog;
use super::diagnostic::LintDiagnostic;
use super::registry::RuleRegistry;
use super::rule::{RuleId, Severity};
use crate::config::LintSettings;
use crate::error::{CalcflowError, Result};

/// Applies the rules of a registry, honoring configured rule levels.
pub struct Linter {
    registry: RuleRegistry,
    settings: LintSettings,
}

impl Linter {
    /// Create a linter reporting every rule at its default severity.
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            settings: LintSettings::default(),
        }
    }

    /// Create a linter with rule levels taken from settings.
    ///
    /// Returns an error if the settings mention a rule the registry lacks.
    pub fn with_settings(registry: RuleRegistry, settings: LintSettings) -> Result<Self> {
        let mut unknown: Vec<&str> = settings
            .rules
            .keys()
            .filter(|id| registry.get(&RuleId::new(id.as_str())).is_none())
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(CalcflowError::ConfigValidationError {
                message: format!("Unknown lint rule(s): {}", unknown.join(", ")),
            });
        }

        Ok(Self { registry, settings })
    }

    /// Whether warnings count as failures.
    pub fn is_strict(&self) -> bool {
        self.settings.strict
    }

    /// Run all enabled rules.
    ///
    /// Diagnostics come back most severe first, then by rule ID, so output
    /// does not depend on registry iteration order.
    pub fn run(&self, catalog: &StepCatalog) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for rule in self.registry.iter() {
            let severity = match self.settings.level_for(&rule.id()) {
                Some(level) => match level.severity() {
                    Some(severity) => severity,
                    None => continue,
                },
                None => rule.default_severity(),
            };

            diagnostics.extend(rule.check(catalog).into_iter().map(|mut d| {
                d.severity = severity;
                d
            }));
        }

        // Stable sort keeps each rule's own ordering.
        diagnostics.sort_by(|a, b| {
            (Reverse(a.severity), &a.rule_id).cmp(&(Reverse(b.severity), &b.rule_id))
        });
        tracing::debug!(
            "Lint produced {} diagnostic(s) for {} step(s)",
            diagnostics.len(),
            catalog.len()
        );
        diagnostics
    }

    /// Whether the diagnostics should fail a lint run.
    pub fn fails(&self, diagnostics: &[LintDiagnostic]) -> bool {
        diagnostics.iter().any(|d| {
            d.severity == Severity::Error || (self.settings.strict && d.severity == Severity::Warning)
        })
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(RuleRegistry::with_builtins())
    }
}
