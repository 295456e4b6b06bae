//! Output projection: the rule choosing what part of a response (or of the
//! input) is returned to the caller. Exactly one projection is active per
//! invocation.

use crate::bind::BoundFields;
use crate::error::SelectorError;
use crate::types::OperationDescriptor;
use serde_json::Value as JsonValue;

/// Documented default projection of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSelect {
    /// Return the full response object
    WholeResponse,
    /// Return the named top-level response field (commonly an identifier)
    Field(&'static str),
}

impl DefaultSelect {
    pub fn describe(&self) -> String {
        match self {
            Self::WholeResponse => "*".to_string(),
            Self::Field(name) => (*name).to_string(),
        }
    }
}

/// User-selectable output projection, resolved once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// No selector given; use the operation's `DefaultSelect`
    Default,
    /// `*`: the full response object
    WholeResponse,
    /// Dot-separated path into the response, e.g. `QueryExecution.Status.State`
    Field(Vec<String>),
    /// `^Name`: echo the bound input field instead of the response
    EchoInput(String),
}

impl Selector {
    /// Parse a raw selector string. `None` means the operation default.
    pub fn parse(raw: Option<&str>) -> Result<Self, SelectorError> {
        let raw = match raw {
            None => return Ok(Self::Default),
            Some(r) => r.trim(),
        };

        if raw == "*" {
            return Ok(Self::WholeResponse);
        }

        if let Some(param) = raw.strip_prefix('^') {
            if param.is_empty() || !is_valid_segment(param) {
                return Err(SelectorError::Malformed {
                    raw: raw.to_string(),
                    reason: "'^' must be followed by a parameter name".to_string(),
                });
            }
            return Ok(Self::EchoInput(param.to_string()));
        }

        if raw.is_empty() {
            return Err(SelectorError::Malformed {
                raw: raw.to_string(),
                reason: "selector must not be empty".to_string(),
            });
        }

        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        for segment in &segments {
            if !is_valid_segment(segment) {
                return Err(SelectorError::Malformed {
                    raw: raw.to_string(),
                    reason: format!("invalid path segment '{}'", segment),
                });
            }
        }
        Ok(Self::Field(segments))
    }

    /// Apply the projection to a raw response. `EchoInput` resolves against
    /// the bound field set instead of the response.
    pub fn project(
        &self,
        op: &OperationDescriptor,
        response: &JsonValue,
        bound: &BoundFields,
    ) -> Result<JsonValue, SelectorError> {
        match self {
            Self::Default => match op.default_select {
                DefaultSelect::WholeResponse => Ok(response.clone()),
                // The documented default field may legitimately be absent from
                // a service response; a default projection never errors.
                DefaultSelect::Field(name) => {
                    Ok(response.get(name).cloned().unwrap_or(JsonValue::Null))
                }
            },
            Self::WholeResponse => Ok(response.clone()),
            Self::Field(path) => {
                let mut current = response;
                for segment in path {
                    current = current.get(segment).ok_or_else(|| SelectorError::Unresolved {
                        selector: path.join("."),
                        reason: format!("response has no field '{}'", segment),
                    })?;
                }
                Ok(current.clone())
            }
            Self::EchoInput(param) => {
                bound.get(param).cloned().ok_or_else(|| SelectorError::Unresolved {
                    selector: format!("^{}", param),
                    reason: format!("input parameter '{}' was not bound", param),
                })
            }
        }
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_operation;
    use indexmap::IndexMap;
    use serde_json::json;

    fn bound(pairs: &[(&str, JsonValue)]) -> BoundFields {
        let mut map = IndexMap::new();
        for (k, v) in pairs {
            map.insert(k.to_string(), v.clone());
        }
        map
    }

    #[test]
    fn parse_wildcard() {
        assert_eq!(Selector::parse(Some("*")).unwrap(), Selector::WholeResponse);
    }

    #[test]
    fn parse_absent_is_default() {
        assert_eq!(Selector::parse(None).unwrap(), Selector::Default);
    }

    #[test]
    fn parse_field_path() {
        assert_eq!(
            Selector::parse(Some("QueryExecution.Status.State")).unwrap(),
            Selector::Field(vec![
                "QueryExecution".to_string(),
                "Status".to_string(),
                "State".to_string()
            ])
        );
    }

    #[test]
    fn parse_echo() {
        assert_eq!(
            Selector::parse(Some("^WorkGroup")).unwrap(),
            Selector::EchoInput("WorkGroup".to_string())
        );
    }

    #[test]
    fn parse_rejects_bare_caret() {
        assert!(matches!(
            Selector::parse(Some("^")),
            Err(SelectorError::Malformed { .. })
        ));
    }

    #[test]
    fn parse_rejects_empty_segment() {
        assert!(matches!(
            Selector::parse(Some("A..B")),
            Err(SelectorError::Malformed { .. })
        ));
        assert!(matches!(
            Selector::parse(Some("")),
            Err(SelectorError::Malformed { .. })
        ));
    }

    #[test]
    fn project_field_path() {
        let op = find_operation("GetQueryExecution").unwrap();
        let response = json!({"QueryExecution": {"Status": {"State": "SUCCEEDED"}}});
        let selector = Selector::parse(Some("QueryExecution.Status.State")).unwrap();
        let value = selector.project(op, &response, &bound(&[])).unwrap();
        assert_eq!(value, json!("SUCCEEDED"));
    }

    #[test]
    fn project_missing_field_is_unresolved() {
        let op = find_operation("GetQueryExecution").unwrap();
        let response = json!({"QueryExecution": {}});
        let selector = Selector::parse(Some("NoSuchField")).unwrap();
        assert!(matches!(
            selector.project(op, &response, &bound(&[])),
            Err(SelectorError::Unresolved { .. })
        ));
    }

    #[test]
    fn project_default_field() {
        let op = find_operation("StartQueryExecution").unwrap();
        let response = json!({"QueryExecutionId": "q-123"});
        let value = Selector::Default.project(op, &response, &bound(&[])).unwrap();
        assert_eq!(value, json!("q-123"));
    }

    #[test]
    fn project_echo_input() {
        let op = find_operation("StartQueryExecution").unwrap();
        let selector = Selector::parse(Some("^QueryString")).unwrap();
        let value = selector
            .project(op, &json!({}), &bound(&[("QueryString", json!("SELECT 1"))]))
            .unwrap();
        assert_eq!(value, json!("SELECT 1"));
    }

    #[test]
    fn project_echo_unbound_is_unresolved() {
        let op = find_operation("StartQueryExecution").unwrap();
        let selector = Selector::parse(Some("^WorkGroup")).unwrap();
        assert!(matches!(
            selector.project(op, &json!({}), &bound(&[])),
            Err(SelectorError::Unresolved { .. })
        ));
    }
}
