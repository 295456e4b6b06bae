//! CLI surface: one subcommand per catalog row, generated from the operation
//! descriptors, plus `operations` and `describe`. Universal flags (selector,
//! confirmation bypass, region/endpoint, output shaping) are attached to
//! every operation subcommand.

use athenactl_core::{FieldKind, FieldSpec, OperationDescriptor, OPERATIONS};
use clap::{Arg, ArgAction, Command, ValueEnum};
use serde_json::Value as JsonValue;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// Pretty-printed JSON
    Pretty,
    /// Compact JSON
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Format a JSON value according to the output format
    pub fn format_json(&self, value: &JsonValue) -> Result<String, serde_json::Error> {
        match self {
            // Table rendering is handled per command; fall back to pretty JSON.
            Self::Table | Self::Pretty => serde_json::to_string_pretty(value),
            Self::Json => serde_json::to_string(value),
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| {
                serde_json::Error::io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("YAML serialization error: {}", e),
                ))
            }),
        }
    }
}

/// Build the full command tree from the operation catalog.
pub fn build_cli() -> Command {
    let mut cmd = Command::new("athenactl")
        .about("athenactl - declarative command surface for the Amazon Athena API")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Enable verbose output"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Disable colored output"),
        )
        .subcommand(
            Command::new("operations")
                .about("List the supported Athena operations")
                .arg(format_arg("table")),
        )
        .subcommand(
            Command::new("describe")
                .about("Describe one operation's fields, impact and default projection")
                .arg(
                    Arg::new("operation")
                        .required(true)
                        .help("Operation name (API form or CLI form)"),
                )
                .arg(format_arg("table")),
        );

    for op in OPERATIONS {
        cmd = cmd.subcommand(operation_command(op));
    }
    cmd
}

fn operation_command(op: &'static OperationDescriptor) -> Command {
    let mut cmd = Command::new(op.cli_name).about(op.about);
    for field in op.fields {
        cmd = cmd.arg(field_arg(field));
    }

    cmd.arg(
        Arg::new("select")
            .long("select")
            .value_name("SELECTOR")
            .help("Output selector: response field path, '*' for the whole response, or '^Param' to echo an input parameter"),
    )
    .arg(
        Arg::new("yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Bypass the confirmation prompt for destructive operations"),
    )
    .arg(
        Arg::new("input")
            .short('i')
            .long("input")
            .value_name("JSON")
            .conflicts_with("input-file")
            .help("Request payload as a JSON object; per-field flags override its keys"),
    )
    .arg(
        Arg::new("input-file")
            .long("input-file")
            .value_name("PATH")
            .help("Read the request payload from a file (JSON or YAML)"),
    )
    .arg(
        Arg::new("region")
            .long("region")
            .env("AWS_REGION")
            .default_value("us-east-1")
            .help("AWS region"),
    )
    .arg(
        Arg::new("endpoint-url")
            .long("endpoint-url")
            .env("ATHENA_ENDPOINT_URL")
            .value_name("URL")
            .help("Override the Athena endpoint (local stacks, VPC endpoints)"),
    )
    .arg(format_arg("pretty"))
    .arg(
        Arg::new("output")
            .short('o')
            .long("output")
            .value_name("PATH")
            .help("Save output to file"),
    )
    .arg(
        Arg::new("show-metadata")
            .long("show-metadata")
            .action(ArgAction::SetTrue)
            .help("Include invocation metadata in output"),
    )
}

fn field_arg(field: &'static FieldSpec) -> Arg {
    let arg = Arg::new(field.name)
        .long(kebab_case(field.name))
        .help(field.about);

    match field.kind {
        // Optional value so an explicit false is expressible; the bare flag
        // binds true, and an absent flag leaves the field absent.
        FieldKind::Bool => arg
            .action(ArgAction::Set)
            .num_args(0..=1)
            .value_parser(["true", "false"])
            .default_missing_value("true")
            .value_name("BOOL"),
        FieldKind::StrList => arg.action(ArgAction::Append).value_name("VALUE"),
        FieldKind::TagList => arg.action(ArgAction::Append).value_name("KEY=VALUE"),
        FieldKind::Structure => arg.action(ArgAction::Set).value_name("JSON"),
        FieldKind::Int => arg.action(ArgAction::Set).value_name("N"),
        FieldKind::Str => arg.action(ArgAction::Set).value_name("VALUE"),
    }
}

fn format_arg(default: &'static str) -> Arg {
    Arg::new("format")
        .long("format")
        .value_parser(clap::builder::EnumValueParser::<OutputFormat>::new())
        .default_value(default)
        .help("Output format")
}

/// Wire field name to CLI flag name, e.g. `QueryString` -> `query-string`,
/// `ResourceARN` -> `resource-arn`.
pub fn kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev_is_lower =
                i > 0 && (chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit());
            let next_is_lower = i + 1 < chars.len() && chars[i + 1].is_ascii_lowercase();
            if prev_is_lower || (i > 0 && chars[i - 1].is_ascii_uppercase() && next_is_lower) {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(*c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn format_defaults_per_subcommand() {
        let parsed_format = |args: &[&str]| -> OutputFormat {
            let matches = build_cli().try_get_matches_from(args).unwrap();
            let (_, sub) = matches.subcommand().unwrap();
            *sub.get_one::<OutputFormat>("format").unwrap()
        };

        assert!(matches!(
            parsed_format(&["athenactl", "operations"]),
            OutputFormat::Table
        ));
        assert!(matches!(
            parsed_format(&["athenactl", "describe", "ListWorkGroups"]),
            OutputFormat::Table
        ));
        assert!(matches!(
            parsed_format(&[
                "athenactl",
                "start-query-execution",
                "--query-string",
                "SELECT 1"
            ]),
            OutputFormat::Pretty
        ));
    }

    #[test]
    fn kebab_case_handles_acronyms() {
        assert_eq!(kebab_case("QueryString"), "query-string");
        assert_eq!(kebab_case("ResourceARN"), "resource-arn");
        assert_eq!(kebab_case("Name"), "name");
        assert_eq!(kebab_case("SessionIdleTimeoutInMinutes"), "session-idle-timeout-in-minutes");
    }

    #[test]
    fn every_operation_has_a_subcommand() {
        let cli = build_cli();
        for op in OPERATIONS {
            assert!(
                cli.find_subcommand(op.cli_name).is_some(),
                "missing subcommand for {}",
                op.name
            );
        }
    }

    #[test]
    fn operation_subcommands_carry_universal_flags() {
        let cli = build_cli();
        let sub = cli.find_subcommand("start-query-execution").unwrap();
        let ids: Vec<String> = sub.get_arguments().map(|a| a.get_id().to_string()).collect();
        for id in ["select", "yes", "input", "region", "format", "QueryString"] {
            assert!(ids.iter().any(|i| i == id), "missing arg {}", id);
        }
    }
}
