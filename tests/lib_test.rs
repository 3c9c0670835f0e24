//! Library integration tests.

use calcflow::CalcflowError;

#[test]
fn error_types_are_public() {
    let err = CalcflowError::DuplicateStep { name: "B".into() };
    assert!(err.to_string().contains("B"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> calcflow::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use calcflow::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["calcflow", "run", "--json"]);

    if let Some(Commands::Run(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Run command");
    }
}
