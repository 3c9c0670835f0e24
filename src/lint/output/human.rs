//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.

use console::Style;

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> String {
        let label = severity.to_string();
        if !self.use_color {
            return label;
        }
        let style = match severity {
            Severity::Hint => Style::new().cyan(),
            Severity::Warning => Style::new().yellow().bold(),
            Severity::Error => Style::new().red().bold(),
        };
        style.force_styling(true).apply_to(label).to_string()
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            // Header line: error[rule-id]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                self.severity_prefix(diag.severity),
                diag.rule_id,
                diag.message
            )?;

            if !diag.steps.is_empty() {
                writeln!(writer, "  --> step(s): {}", diag.steps.join(", "))?;
            }

            if !diag.chain.is_empty() {
                writeln!(writer, "   = chain: {}", diag.chain.join(" -> "))?;
            }

            if let Some(ref suggestion) = diag.suggestion {
                writeln!(writer, "   = help: {}", suggestion)?;
            }

            writeln!(writer)?;
        }

        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        } else {
            writeln!(writer, "No problems found")?;
        }

        Ok(())
    }
}
