//! Utility functions for the CLI

use crate::error::{CliError, CliResult};
use athenactl_client::Credentials;
use athenactl_invoke::ConfirmGate;
use colored::{ColoredString, Colorize};
use std::io::Write;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize tracing with proper filtering
pub fn init_tracing(verbose: bool) -> CliResult<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::General(format!("Failed to set tracing subscriber: {}", e)))?;

    Ok(())
}

/// Utility for colored console output
pub struct ColoredOutput;

impl ColoredOutput {
    pub fn success(msg: &str) -> ColoredString {
        msg.green().bold()
    }

    pub fn error(msg: &str) -> ColoredString {
        msg.red().bold()
    }

    pub fn warning(msg: &str) -> ColoredString {
        msg.yellow().bold()
    }

    pub fn info(msg: &str) -> ColoredString {
        msg.blue()
    }

    pub fn dim(msg: &str) -> ColoredString {
        msg.dimmed()
    }

    pub fn highlight(msg: &str) -> ColoredString {
        msg.cyan().bold()
    }
}

/// Interactive confirmation gate for destructive operations.
pub struct StdinConfirm;

impl ConfirmGate for StdinConfirm {
    fn confirm(&self, operation: &str, summary: &str) -> bool {
        eprint!(
            "{} {} — proceed? [y/N] ",
            ColoredOutput::warning(&format!("About to invoke {}:", operation)),
            summary
        );
        let _ = std::io::stderr().flush();

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Resolve AWS credentials from the standard environment variables.
pub fn resolve_credentials() -> CliResult<Credentials> {
    let access_key = std::env::var("AWS_ACCESS_KEY_ID").map_err(|_| CliError::MissingCredentials)?;
    let secret_key =
        std::env::var("AWS_SECRET_ACCESS_KEY").map_err(|_| CliError::MissingCredentials)?;
    let session_token = std::env::var("AWS_SESSION_TOKEN").ok();
    Ok(Credentials::new(access_key, secret_key, session_token, None, "athenactl"))
}

/// Validate file exists and is readable
pub fn validate_file_exists(path: &str) -> CliResult<()> {
    if !std::path::Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    Ok(())
}

/// Create parent directories if they don't exist
pub fn ensure_parent_dir(path: &std::path::Path) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Read the request payload from either a command line argument or a file
pub fn read_input_data(
    input: Option<String>,
    input_file: Option<String>,
) -> CliResult<serde_json::Value> {
    match (input, input_file) {
        (Some(input_str), None) => serde_json::from_str(&input_str).map_err(|e| {
            CliError::InvalidArgument(format!("Invalid JSON input: {}", e))
        }),
        (None, Some(file_path)) => {
            validate_file_exists(&file_path)?;
            let content = std::fs::read_to_string(&file_path)?;

            // Try to parse as JSON first, then YAML
            if let Ok(json_data) = serde_json::from_str::<serde_json::Value>(&content) {
                Ok(json_data)
            } else {
                serde_yaml::from_str(&content).map_err(|e| {
                    CliError::InvalidArgument(format!(
                        "Invalid JSON/YAML input file '{}': {}",
                        file_path, e
                    ))
                })
            }
        }
        (None, None) => Ok(serde_json::json!({})),
        (Some(_), Some(_)) => Err(CliError::InvalidArgument(
            "Cannot specify both --input and --input-file".to_string(),
        )),
    }
}

/// Write output data to a file
pub fn write_output_data(file_path: &str, content: &str) -> CliResult<()> {
    let path = std::path::Path::new(file_path);
    ensure_parent_dir(path)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn read_input_json_string() {
        let result = read_input_data(Some(r#"{"key": "value"}"#.to_string()), None).unwrap();
        assert_eq!(result, json!({"key": "value"}));
    }

    #[test]
    fn read_input_from_yaml_file() {
        let temp_file = NamedTempFile::with_suffix(".yaml").unwrap();
        fs::write(temp_file.path(), "QueryString: SELECT 1\nWorkGroup: primary").unwrap();

        let result =
            read_input_data(None, Some(temp_file.path().to_str().unwrap().to_string())).unwrap();
        assert_eq!(result, json!({"QueryString": "SELECT 1", "WorkGroup": "primary"}));
    }

    #[test]
    fn read_input_empty_is_empty_object() {
        assert_eq!(read_input_data(None, None).unwrap(), json!({}));
    }

    #[test]
    fn read_input_invalid_json_fails() {
        assert!(read_input_data(Some("not json".to_string()), None).is_err());
    }

    #[test]
    fn read_input_missing_file_fails() {
        let result = read_input_data(None, Some("/no/such/file.json".to_string()));
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }
}
