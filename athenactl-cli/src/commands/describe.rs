//! Single-operation description command

use crate::{
    cli::{kebab_case, OutputFormat},
    error::{CliError, CliResult},
    utils::ColoredOutput,
};
use athenactl_core::{find_operation, FieldSpec};
use serde_json::json;

pub struct DescribeCommand;

impl DescribeCommand {
    pub fn run(operation: &str, format: OutputFormat) -> CliResult<()> {
        let op = find_operation(operation)
            .ok_or_else(|| CliError::UnknownOperation(operation.to_string()))?;

        match format {
            OutputFormat::Table => {
                println!("{}: {}", ColoredOutput::highlight(op.name), op.about);
                println!("Command:        {}", op.cli_name);
                println!("Impact:         {}", op.confirm_impact.as_str());
                println!("Default select: {}", op.default_select.describe());
                println!("\n{}", ColoredOutput::highlight("Fields:"));
                println!(
                    "  {:<28} {:<34} {:<12} {:<10} {}",
                    "FIELD", "FLAG", "KIND", "REQUIRED", "NOTES"
                );
                for field in op.fields {
                    println!(
                        "  {:<28} {:<34} {:<12} {:<10} {}",
                        field.name,
                        format!("--{}", kebab_case(field.name)),
                        field.kind.as_str(),
                        if field.required { "yes" } else { "no" },
                        field_notes(field)
                    );
                }
            }
            _ => {
                let fields: Vec<_> = op
                    .fields
                    .iter()
                    .map(|field| {
                        json!({
                            "field": field.name,
                            "flag": format!("--{}", kebab_case(field.name)),
                            "kind": field.kind.as_str(),
                            "required": field.required,
                            "allow_empty": field.allow_empty,
                            "clearable": field.clearable,
                            "about": field.about,
                        })
                    })
                    .collect();
                let value = json!({
                    "operation": op.name,
                    "command": op.cli_name,
                    "impact": op.confirm_impact.as_str(),
                    "default_select": op.default_select.describe(),
                    "about": op.about,
                    "fields": fields,
                });
                println!("{}", format.format_json(&value)?);
            }
        }
        Ok(())
    }
}

fn field_notes(field: &FieldSpec) -> String {
    let mut notes = Vec::new();
    if field.allow_empty {
        notes.push("empty allowed");
    }
    if field.clearable {
        notes.push("null clears");
    }
    if notes.is_empty() {
        field.about.to_string()
    } else {
        format!("{} ({})", field.about, notes.join(", "))
    }
}
