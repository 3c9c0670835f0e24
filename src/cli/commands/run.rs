//! Run command implementation.
//!
//! The `calcflow run` command fills the demo record from configuration and
//! `--set` overrides, checks the calculator and executes it.

use std::io::Write;

use crate::cli::args::RunArgs;
use crate::config::CalcflowConfig;
use crate::demo::{entity_calculator, EntityRecord};
use crate::error::Result;
use crate::lint::validate;
use crate::runner::CalculationExecutor;
use crate::steps::Record;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    config: CalcflowConfig,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(config: CalcflowConfig, args: RunArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Initial record: config inputs first, then command-line overrides.
    fn initial_record(&self) -> Result<EntityRecord> {
        let mut record = EntityRecord::default();
        for (field, value) in &self.config.inputs {
            record.set_field(field, *value)?;
        }
        for (field, value) in &self.args.set {
            record.set_field(field, *value)?;
        }
        Ok(record)
    }
}

impl Command for RunCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let calculator = entity_calculator()?;

        if self.args.skip_validation {
            tracing::warn!("Skipping dependency validation");
        } else {
            validate(&calculator)?;
        }

        let mut record = self.initial_record()?;
        CalculationExecutor::new(&calculator).execute(&mut record)?;
        tracing::info!("Computed {} field(s)", calculator.len());

        if self.args.json {
            serde_json::to_writer_pretty(&mut *out, &record).map_err(std::io::Error::other)?;
            writeln!(out)?;
        } else {
            for field in EntityRecord::field_names() {
                if let Some(value) = record.field(field) {
                    writeln!(out, "{} = {}", field, value)?;
                }
            }
        }

        Ok(CommandResult::success())
    }
}
