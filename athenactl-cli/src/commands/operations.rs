//! Catalog listing command

use crate::{cli::OutputFormat, error::CliResult, utils::ColoredOutput};
use athenactl_core::{OperationDescriptor, OPERATIONS};
use serde_json::json;

pub struct OperationsCommand;

impl OperationsCommand {
    pub fn run(format: OutputFormat) -> CliResult<()> {
        match format {
            OutputFormat::Table => {
                println!(
                    "{:<28} {:<30} {:<8} {:<20} {}",
                    ColoredOutput::highlight("OPERATION"),
                    ColoredOutput::highlight("COMMAND"),
                    ColoredOutput::highlight("IMPACT"),
                    ColoredOutput::highlight("DEFAULT SELECT"),
                    ColoredOutput::highlight("DESCRIPTION")
                );
                for op in OPERATIONS {
                    println!(
                        "{:<28} {:<30} {:<8} {:<20} {}",
                        op.name,
                        op.cli_name,
                        op.confirm_impact.as_str(),
                        op.default_select.describe(),
                        op.about
                    );
                }
                println!("\n{} operation(s)", OPERATIONS.len());
            }
            _ => {
                let rows: Vec<_> = OPERATIONS.iter().map(row_json).collect();
                println!("{}", format.format_json(&json!(rows))?);
            }
        }
        Ok(())
    }
}

fn row_json(op: &OperationDescriptor) -> serde_json::Value {
    json!({
        "operation": op.name,
        "command": op.cli_name,
        "impact": op.confirm_impact.as_str(),
        "default_select": op.default_select.describe(),
        "about": op.about,
    })
}
