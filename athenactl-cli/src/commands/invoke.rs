//! Operation invocation: assemble the request payload from flags and
//! `--input`, build the shared transport handle, run the invoker once and
//! display the projected result.

use crate::{
    cli::OutputFormat,
    error::{CliError, CliResult},
    utils::{self, ColoredOutput, StdinConfirm},
};
use athenactl_client::{AthenaTransport, SigV4Transport};
use athenactl_core::{FieldKind, FieldSpec, OperationDescriptor};
use athenactl_invoke::{BypassGate, InvocationOutcome, InvocationResult, Invoker};
use clap::ArgMatches;
use serde_json::{json, Map as JsonMap, Value as JsonValue};
use std::sync::Arc;
use tracing::{debug, info};

pub struct InvokeCommand;

impl InvokeCommand {
    pub async fn run(op: &'static OperationDescriptor, matches: &ArgMatches) -> CliResult<()> {
        info!("Invoking operation: {}", op.name);

        let payload = payload_from_matches(op, matches)?;
        debug!(
            "Request payload: {}",
            serde_json::to_string(&payload).unwrap_or_else(|_| "invalid".to_string())
        );

        let transport = build_transport(matches)?;
        let invoker = Invoker::new(transport);

        let selector = matches.get_one::<String>("select").map(String::as_str);
        let outcome = if matches.get_flag("yes") {
            invoker.invoke(op.name, JsonValue::Object(payload), selector, &BypassGate).await?
        } else {
            invoker.invoke(op.name, JsonValue::Object(payload), selector, &StdinConfirm).await?
        };

        match outcome {
            InvocationOutcome::Declined => {
                println!(
                    "{}",
                    ColoredOutput::warning(&format!("Aborted: {} was not invoked", op.name))
                );
                Ok(())
            }
            InvocationOutcome::Completed(result) => {
                let format = matches
                    .get_one::<OutputFormat>("format")
                    .copied()
                    .unwrap_or(OutputFormat::Pretty);
                let output_file = matches.get_one::<String>("output").cloned();
                let show_metadata = matches.get_flag("show-metadata");
                display_result(&result, format, output_file, show_metadata)
            }
        }
    }
}

/// Merge the `--input`/`--input-file` payload with per-field flags; flags win.
pub fn payload_from_matches(
    op: &'static OperationDescriptor,
    matches: &ArgMatches,
) -> CliResult<JsonMap<String, JsonValue>> {
    let base = utils::read_input_data(
        matches.get_one::<String>("input").cloned(),
        matches.get_one::<String>("input-file").cloned(),
    )?;
    let mut payload = base
        .as_object()
        .cloned()
        .ok_or_else(|| CliError::InvalidArgument("input must be a JSON object".to_string()))?;

    for field in op.fields {
        if let Some(value) = field_value(field, matches)? {
            payload.insert(field.name.to_string(), value);
        }
    }
    Ok(payload)
}

/// Bind one field flag. The literal value `null` on a clearable field binds
/// an explicit JSON null (clears the stored value on update operations).
fn field_value(field: &'static FieldSpec, matches: &ArgMatches) -> CliResult<Option<JsonValue>> {
    match field.kind {
        FieldKind::Bool => match matches.get_one::<String>(field.name) {
            None => Ok(None),
            Some(raw) => Ok(Some(json!(raw == "true"))),
        },
        FieldKind::Str => match matches.get_one::<String>(field.name) {
            None => Ok(None),
            Some(raw) if raw == "null" && field.clearable => Ok(Some(JsonValue::Null)),
            Some(raw) => Ok(Some(json!(raw))),
        },
        FieldKind::Int => match matches.get_one::<String>(field.name) {
            None => Ok(None),
            Some(raw) => {
                let n: i64 = raw.parse().map_err(|_| {
                    CliError::InvalidArgument(format!(
                        "--{} expects an integer, got '{}'",
                        crate::cli::kebab_case(field.name),
                        raw
                    ))
                })?;
                Ok(Some(json!(n)))
            }
        },
        FieldKind::StrList => match matches.get_many::<String>(field.name) {
            None => Ok(None),
            Some(values) => Ok(Some(json!(values.cloned().collect::<Vec<String>>()))),
        },
        FieldKind::TagList => match matches.get_many::<String>(field.name) {
            None => Ok(None),
            Some(values) => {
                let mut tags = Vec::new();
                for raw in values {
                    let (key, value) = raw.split_once('=').ok_or_else(|| {
                        CliError::InvalidArgument(format!(
                            "--{} expects KEY=VALUE, got '{}'",
                            crate::cli::kebab_case(field.name),
                            raw
                        ))
                    })?;
                    tags.push(json!({"Key": key, "Value": value}));
                }
                Ok(Some(JsonValue::Array(tags)))
            }
        },
        FieldKind::Structure => match matches.get_one::<String>(field.name) {
            None => Ok(None),
            Some(raw) if raw == "null" && field.clearable => Ok(Some(JsonValue::Null)),
            Some(raw) => {
                let value: JsonValue = serde_json::from_str(raw).map_err(|e| {
                    CliError::InvalidArgument(format!(
                        "--{} expects a JSON object: {}",
                        crate::cli::kebab_case(field.name),
                        e
                    ))
                })?;
                Ok(Some(value))
            }
        },
    }
}

fn build_transport(matches: &ArgMatches) -> CliResult<Arc<dyn AthenaTransport>> {
    let region = matches
        .get_one::<String>("region")
        .cloned()
        .unwrap_or_else(|| "us-east-1".to_string());
    let credentials = utils::resolve_credentials()?;

    let transport = match matches.get_one::<String>("endpoint-url") {
        Some(endpoint) => SigV4Transport::new(endpoint, &region, credentials)?,
        None => SigV4Transport::for_region(&region, credentials)?,
    };
    Ok(Arc::new(transport))
}

fn display_result(
    result: &InvocationResult,
    format: OutputFormat,
    output_file: Option<String>,
    show_metadata: bool,
) -> CliResult<()> {
    let output_data = if show_metadata {
        json!({
            "output": result.value,
            "metadata": {
                "invocation_id": result.context.invocation_id,
                "operation": result.context.operation,
                "result_metadata": result.metadata,
            }
        })
    } else {
        result.value.clone()
    };

    let formatted_output = format.format_json(&output_data)?;

    if let Some(ref output_path) = output_file {
        utils::write_output_data(output_path, &formatted_output)?;
        println!(
            "{}",
            ColoredOutput::success(&format!("✓ Output saved to: {}", output_path))
        );
    } else {
        println!("{}", formatted_output);
    }

    if output_file.is_none() && format == OutputFormat::Table {
        println!(
            "\n{}",
            ColoredOutput::success(&format!("✓ {} completed", result.context.operation))
        );
        println!(
            "Invocation ID: {}",
            ColoredOutput::dim(&result.context.invocation_id)
        );
        if let Some(duration_ms) = result.metadata.get("duration_ms").and_then(JsonValue::as_u64) {
            println!("Duration: {}", ColoredOutput::info(&format!("{}ms", duration_ms)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;
    use athenactl_core::find_operation;

    fn matches_for(args: &[&str]) -> ArgMatches {
        let matches = build_cli().try_get_matches_from(args).unwrap();
        matches.subcommand().unwrap().1.clone()
    }

    #[test]
    fn flags_build_the_payload() {
        let op = find_operation("StartQueryExecution").unwrap();
        let matches = matches_for(&[
            "athenactl",
            "start-query-execution",
            "--query-string",
            "SELECT 1",
            "--work-group",
            "primary",
        ]);
        let payload = payload_from_matches(op, &matches).unwrap();
        assert_eq!(
            JsonValue::Object(payload),
            json!({"QueryString": "SELECT 1", "WorkGroup": "primary"})
        );
    }

    #[test]
    fn flags_override_input_keys() {
        let op = find_operation("StartQueryExecution").unwrap();
        let matches = matches_for(&[
            "athenactl",
            "start-query-execution",
            "--input",
            r#"{"QueryString": "SELECT 2", "WorkGroup": "primary"}"#,
            "--query-string",
            "SELECT 1",
        ]);
        let payload = payload_from_matches(op, &matches).unwrap();
        assert_eq!(
            JsonValue::Object(payload),
            json!({"QueryString": "SELECT 1", "WorkGroup": "primary"})
        );
    }

    #[test]
    fn tag_flags_become_tag_objects() {
        let op = find_operation("TagResource").unwrap();
        let matches = matches_for(&[
            "athenactl",
            "tag-resource",
            "--resource-arn",
            "arn:aws:athena:us-east-1:123:workgroup/wg1",
            "--tags",
            "env=prod",
            "--tags",
            "team=data",
        ]);
        let payload = payload_from_matches(op, &matches).unwrap();
        assert_eq!(
            payload["Tags"],
            json!([
                {"Key": "env", "Value": "prod"},
                {"Key": "team", "Value": "data"}
            ])
        );
    }

    #[test]
    fn malformed_tag_is_rejected() {
        let op = find_operation("TagResource").unwrap();
        let matches = matches_for(&[
            "athenactl",
            "tag-resource",
            "--resource-arn",
            "arn:x",
            "--tags",
            "no-equals-sign",
        ]);
        assert!(matches!(
            payload_from_matches(op, &matches),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn null_literal_binds_explicit_null_on_clearable_fields() {
        let op = find_operation("UpdateWorkGroup").unwrap();
        let matches = matches_for(&[
            "athenactl",
            "update-work-group",
            "--work-group",
            "wg1",
            "--description",
            "null",
        ]);
        let payload = payload_from_matches(op, &matches).unwrap();
        assert_eq!(payload["Description"], JsonValue::Null);
    }

    #[test]
    fn null_literal_stays_a_string_elsewhere() {
        let op = find_operation("CreateWorkGroup").unwrap();
        let matches =
            matches_for(&["athenactl", "create-work-group", "--name", "null"]);
        let payload = payload_from_matches(op, &matches).unwrap();
        assert_eq!(payload["Name"], json!("null"));
    }

    #[test]
    fn structure_flags_parse_inline_json() {
        let op = find_operation("StartQueryExecution").unwrap();
        let matches = matches_for(&[
            "athenactl",
            "start-query-execution",
            "--query-string",
            "SELECT 1",
            "--result-configuration",
            r#"{"OutputLocation": "s3://bucket/results/"}"#,
        ]);
        let payload = payload_from_matches(op, &matches).unwrap();
        assert_eq!(
            payload["ResultConfiguration"],
            json!({"OutputLocation": "s3://bucket/results/"})
        );
    }

    #[test]
    fn integer_flags_are_parsed() {
        let op = find_operation("ListWorkGroups").unwrap();
        let matches =
            matches_for(&["athenactl", "list-work-groups", "--max-results", "10"]);
        let payload = payload_from_matches(op, &matches).unwrap();
        assert_eq!(payload["MaxResults"], json!(10));

        let matches =
            matches_for(&["athenactl", "list-work-groups", "--max-results", "ten"]);
        assert!(payload_from_matches(op, &matches).is_err());
    }

    #[test]
    fn bool_flags_bind_true_or_stay_absent() {
        let op = find_operation("DeleteWorkGroup").unwrap();
        let matches = matches_for(&[
            "athenactl",
            "delete-work-group",
            "--work-group",
            "wg1",
            "--recursive-delete-option",
        ]);
        let payload = payload_from_matches(op, &matches).unwrap();
        assert_eq!(payload["RecursiveDeleteOption"], json!(true));

        let matches =
            matches_for(&["athenactl", "delete-work-group", "--work-group", "wg1"]);
        let payload = payload_from_matches(op, &matches).unwrap();
        assert!(!payload.contains_key("RecursiveDeleteOption"));
    }

    #[test]
    fn bool_flags_accept_an_explicit_value() {
        let op = find_operation("DeleteWorkGroup").unwrap();
        let matches = matches_for(&[
            "athenactl",
            "delete-work-group",
            "--work-group",
            "wg1",
            "--recursive-delete-option",
            "false",
        ]);
        let payload = payload_from_matches(op, &matches).unwrap();
        assert_eq!(payload["RecursiveDeleteOption"], json!(false));

        let result = build_cli().try_get_matches_from([
            "athenactl",
            "delete-work-group",
            "--work-group",
            "wg1",
            "--recursive-delete-option",
            "maybe",
        ]);
        assert!(result.is_err());
    }
}
