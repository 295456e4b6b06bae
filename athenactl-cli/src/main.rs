//! athenactl CLI main entry point

use athenactl_cli::{
    cli::{build_cli, OutputFormat},
    commands::{DescribeCommand, InvokeCommand, OperationsCommand},
    error::{CliError, CliResult},
    utils::{init_tracing, ColoredOutput},
};
use athenactl_core::find_operation;
use tracing::info;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", ColoredOutput::error("Error:"), e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> CliResult<()> {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_flag("verbose"))?;

    if matches.get_flag("no-color") {
        colored::control::set_override(false);
    }

    info!("athenactl v{}", env!("CARGO_PKG_VERSION"));

    let (name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| CliError::General("a subcommand is required".to_string()))?;

    match name {
        "operations" => OperationsCommand::run(table_format(sub_matches)),
        "describe" => {
            let operation = sub_matches
                .get_one::<String>("operation")
                .ok_or_else(|| CliError::General("operation name is required".to_string()))?;
            DescribeCommand::run(operation, table_format(sub_matches))
        }
        other => {
            let op = find_operation(other)
                .ok_or_else(|| CliError::UnknownOperation(other.to_string()))?;
            InvokeCommand::run(op, sub_matches).await
        }
    }
}

// Catalog subcommands default to table output; clap always supplies the value.
fn table_format(matches: &clap::ArgMatches) -> OutputFormat {
    matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(OutputFormat::Table)
}
