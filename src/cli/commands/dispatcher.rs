//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::{load_config, CalcflowConfig};
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    use_color: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_override: None,
            use_color: false,
        }
    }

    /// Load configuration from this file instead of discovering it.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load the configuration commands run with.
    pub fn load_config(&self) -> Result<CalcflowConfig> {
        load_config(&self.project_root, self.config_override.as_deref())
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        let config = self.load_config()?;

        match &cli.command {
            Some(Commands::Run(args)) => {
                super::run::RunCommand::new(config, args.clone()).execute(out)
            }
            Some(Commands::Lint(args)) => {
                super::lint::LintCommand::new(config, args.clone())
                    .with_color(self.use_color)
                    .execute(out)
            }
            Some(Commands::List(args)) => super::list::ListCommand::new(args.clone()).execute(out),
            None => {
                // Default to run command with default args
                super::run::RunCommand::new(config, RunArgs::default()).execute(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn no_subcommand_runs_demo() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let cli = Cli::parse_from(["calcflow"]);

        let mut out: Vec<u8> = Vec::new();
        let result = dispatcher.dispatch(&cli, &mut out).unwrap();

        assert!(result.success);
        assert!(String::from_utf8(out).unwrap().contains("G = 50"));
    }

    #[test]
    fn config_override_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yml");
        fs::write(&path, "inputs:\n  A: 10\n").unwrap();

        let dispatcher =
            CommandDispatcher::new(temp.path().to_path_buf()).with_config_override(Some(path));

        assert_eq!(dispatcher.load_config().unwrap().inputs["A"], 10);
    }

    #[test]
    fn missing_config_override_is_an_error() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf())
            .with_config_override(Some(temp.path().join("absent.yml")));
        let cli = Cli::parse_from(["calcflow", "list"]);

        assert!(dispatcher.dispatch(&cli, &mut Vec::<u8>::new()).is_err());
    }
}
