//! Field binding: checks a raw JSON input object against an operation's
//! field list and produces the exact set of fields that will be serialized
//! into the request. Absent fields are never defaulted; an explicit `null`
//! survives only on clearable fields.

use crate::error::BindError;
use crate::types::{FieldKind, FieldSpec, OperationDescriptor};
use indexmap::IndexMap;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Resolved field values after binding and validation, in catalog order.
pub type BoundFields = IndexMap<String, JsonValue>;

/// Bind an input object against the descriptor's field list.
///
/// Absent keys stay absent (optional nested groups are not defaulted to
/// empty objects). Returns the first violation encountered; no remote call
/// may be attempted once this fails.
pub fn bind_fields(
    op: &OperationDescriptor,
    input: &JsonMap<String, JsonValue>,
) -> Result<BoundFields, BindError> {
    for key in input.keys() {
        if op.field(key).is_none() {
            return Err(BindError::UnknownField { field: key.clone() });
        }
    }

    let mut bound = IndexMap::new();
    for spec in op.fields {
        match input.get(spec.name) {
            None => {
                if spec.required {
                    return Err(BindError::MissingRequiredField { field: spec.name.to_string() });
                }
            }
            Some(JsonValue::Null) => {
                // Required fields must be present and non-null before dispatch.
                if spec.required {
                    return Err(BindError::MissingRequiredField { field: spec.name.to_string() });
                }
                if !spec.clearable {
                    return Err(BindError::InvalidField {
                        field: spec.name.to_string(),
                        reason: "null is only valid for clearable update fields".to_string(),
                    });
                }
                bound.insert(spec.name.to_string(), JsonValue::Null);
            }
            Some(value) => {
                check_kind(spec, value)?;
                check_empty(spec, value)?;
                bound.insert(spec.name.to_string(), value.clone());
            }
        }
    }

    Ok(bound)
}

/// Serialize bound fields into the request payload object.
pub fn to_payload(bound: &BoundFields) -> JsonValue {
    let mut map = JsonMap::new();
    for (name, value) in bound {
        map.insert(name.clone(), value.clone());
    }
    JsonValue::Object(map)
}

fn check_kind(spec: &FieldSpec, value: &JsonValue) -> Result<(), BindError> {
    let ok = match spec.kind {
        FieldKind::Str => value.is_string(),
        FieldKind::Int => value.as_i64().is_some(),
        FieldKind::Bool => value.is_boolean(),
        FieldKind::StrList => {
            value.as_array().is_some_and(|items| items.iter().all(JsonValue::is_string))
        }
        FieldKind::TagList => value.as_array().is_some_and(|items| {
            items.iter().all(|item| {
                item.as_object().is_some_and(|tag| {
                    tag.get("Key").is_some_and(JsonValue::is_string)
                        && tag.get("Value").is_some_and(JsonValue::is_string)
                })
            })
        }),
        FieldKind::Structure => value.is_object(),
    };

    if ok {
        Ok(())
    } else {
        Err(BindError::InvalidField {
            field: spec.name.to_string(),
            reason: format!("expected {}", spec.kind.as_str()),
        })
    }
}

fn check_empty(spec: &FieldSpec, value: &JsonValue) -> Result<(), BindError> {
    let empty = match value {
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(items) => items.is_empty(),
        _ => false,
    };

    if empty && !spec.allow_empty {
        return Err(BindError::InvalidField {
            field: spec.name.to_string(),
            reason: format!("empty {} is not allowed", spec.kind.as_str()),
        });
    }
    Ok(())
}
