//! JSON output formatter.
//!
//! Formats lint diagnostics as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
#[derive(Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    diagnostics: Vec<JsonDiagnostic<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    rule_id: &'a str,
    severity: Severity,
    message: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    steps: &'a [String],
    #[serde(skip_serializing_if = "is_empty")]
    chain: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

fn is_empty(items: &&[String]) -> bool {
    items.is_empty()
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
    hints: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let count = |severity: Severity| {
            diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .count()
        };

        let output = JsonOutput {
            diagnostics: diagnostics
                .iter()
                .map(|d| JsonDiagnostic {
                    rule_id: d.rule_id.as_str(),
                    severity: d.severity,
                    message: &d.message,
                    steps: &d.steps,
                    chain: &d.chain,
                    suggestion: d.suggestion.as_deref(),
                })
                .collect(),
            summary: JsonSummary {
                total: diagnostics.len(),
                errors: count(Severity::Error),
                warnings: count(Severity::Warning),
                hints: count(Severity::Hint),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleId;

    fn render(diagnostics: &[LintDiagnostic]) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(diagnostics, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let parsed = render(&[LintDiagnostic::new(
            RuleId::new("test"),
            Severity::Error,
            "Error message",
        )]);

        assert!(parsed["diagnostics"].is_array());
        assert_eq!(parsed["diagnostics"][0]["severity"], "error");
        assert_eq!(parsed["summary"]["total"], 1);
    }

    #[test]
    fn includes_steps_and_chain_when_present() {
        let parsed = render(&[LintDiagnostic::new(
            RuleId::new("circular-dependency"),
            Severity::Error,
            "cycle",
        )
        .with_step("a")
        .with_chain(vec!["a".into(), "b".into(), "a".into()])]);

        assert_eq!(parsed["diagnostics"][0]["steps"][0], "a");
        assert_eq!(parsed["diagnostics"][0]["chain"][2], "a");
    }

    #[test]
    fn omits_empty_fields() {
        let parsed = render(&[LintDiagnostic::new(
            RuleId::new("test"),
            Severity::Hint,
            "msg",
        )]);

        assert!(parsed["diagnostics"][0]["steps"].is_null());
        assert!(parsed["diagnostics"][0]["chain"].is_null());
        assert!(parsed["diagnostics"][0]["suggestion"].is_null());
    }

    #[test]
    fn summary_counts_by_severity() {
        let parsed = render(&[
            LintDiagnostic::new(RuleId::new("r1"), Severity::Error, "e1"),
            LintDiagnostic::new(RuleId::new("r2"), Severity::Error, "e2"),
            LintDiagnostic::new(RuleId::new("r3"), Severity::Warning, "w1"),
            LintDiagnostic::new(RuleId::new("r4"), Severity::Hint, "h1"),
        ]);

        assert_eq!(parsed["summary"]["total"], 4);
        assert_eq!(parsed["summary"]["errors"], 2);
        assert_eq!(parsed["summary"]["warnings"], 1);
        assert_eq!(parsed["summary"]["hints"], 1);
    }

    #[test]
    fn empty_input_has_zero_total() {
        let parsed = render(&[]);
        assert_eq!(parsed["summary"]["total"], 0);
    }
}
