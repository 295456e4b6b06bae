use crate::selector::DefaultSelect;
use serde::{Deserialize, Serialize};

/// Confirmation impact of an operation. Medium and High require explicit
/// confirmation (interactive prompt or bypass flag) before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmImpact {
    None,
    Medium,
    High,
}

impl ConfirmImpact {
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, Self::Medium | Self::High)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Wire-level shape of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// JSON string
    Str,
    /// JSON integer
    Int,
    /// JSON boolean
    Bool,
    /// JSON array of strings
    StrList,
    /// JSON array of `{"Key": ..., "Value": ...}` objects
    TagList,
    /// Nested JSON object (configuration group)
    Structure,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Int => "integer",
            Self::Bool => "boolean",
            Self::StrList => "string-list",
            Self::TagList => "tag-list",
            Self::Structure => "structure",
        }
    }
}

/// Static description of one request field of an operation.
///
/// The three-way binding distinction is carried by two flags:
/// `allow_empty` makes `""`/`[]` valid (and distinct from absent), and
/// `clearable` makes an explicit JSON `null` valid, serialized as-is so the
/// service clears a previously-set value on update operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub allow_empty: bool,
    pub clearable: bool,
    pub about: &'static str,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind, about: &'static str) -> Self {
        Self { name, kind, required: true, allow_empty: false, clearable: false, about }
    }

    pub const fn optional(name: &'static str, kind: FieldKind, about: &'static str) -> Self {
        Self { name, kind, required: false, allow_empty: false, clearable: false, about }
    }

    /// Optional field where an empty string/list is valid and distinct from absent.
    pub const fn allow_empty(name: &'static str, kind: FieldKind, about: &'static str) -> Self {
        Self { name, kind, required: false, allow_empty: true, clearable: false, about }
    }

    /// Optional update-operation field where an explicit null clears the stored value.
    pub const fn clearable(name: &'static str, kind: FieldKind, about: &'static str) -> Self {
        Self { name, kind, required: false, allow_empty: true, clearable: true, about }
    }
}

/// Static, per-operation metadata: one row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// API operation name, e.g. "StartQueryExecution"
    pub name: &'static str,
    /// CLI subcommand name, e.g. "start-query-execution"
    pub cli_name: &'static str,
    pub fields: &'static [FieldSpec],
    /// Projection applied when the caller does not pass a selector
    pub default_select: DefaultSelect,
    pub confirm_impact: ConfirmImpact,
    pub about: &'static str,
}

impl OperationDescriptor {
    /// `X-Amz-Target` value for the AWS JSON-1.1 protocol.
    pub fn target(&self) -> String {
        format!("AmazonAthena.{}", self.name)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_impact_ordering() {
        assert!(ConfirmImpact::None < ConfirmImpact::Medium);
        assert!(ConfirmImpact::Medium < ConfirmImpact::High);
        assert!(!ConfirmImpact::None.requires_confirmation());
        assert!(ConfirmImpact::Medium.requires_confirmation());
        assert!(ConfirmImpact::High.requires_confirmation());
    }

    #[test]
    fn field_spec_constructors() {
        let f = FieldSpec::required("Name", FieldKind::Str, "name");
        assert!(f.required && !f.allow_empty && !f.clearable);

        let f = FieldSpec::clearable("Description", FieldKind::Str, "desc");
        assert!(!f.required && f.allow_empty && f.clearable);
    }
}
