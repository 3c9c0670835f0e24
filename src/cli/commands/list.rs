//! List command implementation.
//!
//! The `calcflow list` command prints steps in discovery order with their
//! declared dependencies.

use std::io::Write;

use crate::cli::args::ListArgs;
use crate::demo::entity_calculator;
use crate::error::Result;
use crate::lint::StepCatalog;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let catalog = match &self.args.catalog {
            Some(path) => StepCatalog::load(path)?,
            None => StepCatalog::from_provider(&entity_calculator()?),
        };

        writeln!(out, "Steps:")?;
        for step in &catalog.steps {
            if step.depends_on.is_empty() {
                writeln!(out, "  {}", step.name)?;
            } else {
                let deps: Vec<&str> = step.depends_on.iter().collect();
                writeln!(out, "  {} <- {}", step.name, deps.join(", "))?;
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn list(args: ListArgs) -> String {
        let mut out: Vec<u8> = Vec::new();
        ListCommand::new(args).execute(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_built_in_steps_in_discovery_order() {
        let output = list(ListArgs::default());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Steps:",
                "  F <- D, E",
                "  E <- B, D",
                "  G",
                "  D <- B, C",
                "  B <- A",
            ]
        );
    }

    #[test]
    fn lists_catalog_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("steps.yml");
        fs::write(&path, "steps:\n  - name: total\n    depends_on: [x, y]\n").unwrap();

        let output = list(ListArgs {
            catalog: Some(path),
        });

        assert!(output.contains("  total <- x, y"));
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let temp = TempDir::new().unwrap();
        let args = ListArgs {
            catalog: Some(temp.path().join("absent.yml")),
        };

        assert!(ListCommand::new(args).execute(&mut Vec::<u8>::new()).is_err());
    }
}
