//! Lint command implementation.
//!
//! The `calcflow lint` command checks step dependencies using the lint rule
//! system, either for the built-in calculator or for a YAML step catalog.

use std::io::Write;

use crate::cli::args::LintArgs;
use crate::config::CalcflowConfig;
use crate::demo::{entity_calculator, EntityRecord};
use crate::error::Result;
use crate::lint::{
    HumanFormatter, JsonFormatter, LintDiagnostic, LintFormatter, Linter, OutputFormat,
    RuleRegistry, StepCatalog,
};

use super::dispatcher::{Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    config: CalcflowConfig,
    args: LintArgs,
    use_color: bool,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(config: CalcflowConfig, args: LintArgs) -> Self {
        Self {
            config,
            args,
            use_color: false,
        }
    }

    /// Color severity labels in human output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    fn catalog(&self) -> Result<StepCatalog> {
        match &self.args.catalog {
            Some(path) => StepCatalog::load(path),
            None => Ok(StepCatalog::for_record::<EntityRecord, _>(
                &entity_calculator()?,
            )),
        }
    }

    /// Format diagnostics using the appropriate formatter.
    fn format_output(
        &self,
        diagnostics: &[LintDiagnostic],
        mut out: &mut dyn Write,
    ) -> Result<()> {
        match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(diagnostics, &mut out)?,
            OutputFormat::Human => HumanFormatter::new(self.use_color).format(diagnostics, &mut out)?,
        }
        Ok(())
    }
}

impl Command for LintCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let catalog = self.catalog()?;

        let mut settings = self.config.lint.clone();
        settings.strict |= self.args.strict;
        let linter = Linter::with_settings(RuleRegistry::with_builtins(), settings)?;

        let diagnostics = linter.run(&catalog);
        self.format_output(&diagnostics, out)?;

        if linter.fails(&diagnostics) {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
