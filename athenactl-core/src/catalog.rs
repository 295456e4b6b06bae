//! Static catalog of the wrapped Athena operations. Each entry is one row of
//! metadata; the invoker and the CLI are both driven entirely by this table.

use crate::types::{FieldSpec, OperationDescriptor};

use crate::selector::DefaultSelect::{Field, WholeResponse};
use crate::types::ConfirmImpact::{High, Medium, None as NoConfirm};
use crate::types::FieldKind::{Bool, Int, Str, StrList, Structure, TagList};

pub const OPERATIONS: &[OperationDescriptor] = &[
    // Workgroups
    OperationDescriptor {
        name: "ListWorkGroups",
        cli_name: "list-work-groups",
        fields: &[
            FieldSpec::optional("MaxResults", Int, "Maximum number of workgroups to return"),
            FieldSpec::optional("NextToken", Str, "Pagination token from a previous call"),
        ],
        default_select: WholeResponse,
        confirm_impact: NoConfirm,
        about: "Lists available workgroups for the account",
    },
    OperationDescriptor {
        name: "CreateWorkGroup",
        cli_name: "create-work-group",
        fields: &[
            FieldSpec::required("Name", Str, "Workgroup name"),
            FieldSpec::optional("Description", Str, "Workgroup description"),
            FieldSpec::optional(
                "Configuration",
                Structure,
                "Result configuration, enforcement and limits for the workgroup",
            ),
            FieldSpec::optional("Tags", TagList, "Tags to attach to the workgroup"),
        ],
        default_select: WholeResponse,
        confirm_impact: Medium,
        about: "Creates a workgroup with the specified name",
    },
    OperationDescriptor {
        name: "GetWorkGroup",
        cli_name: "get-work-group",
        fields: &[FieldSpec::required("WorkGroup", Str, "Workgroup name")],
        default_select: Field("WorkGroup"),
        confirm_impact: NoConfirm,
        about: "Returns information about the named workgroup",
    },
    OperationDescriptor {
        name: "UpdateWorkGroup",
        cli_name: "update-work-group",
        fields: &[
            FieldSpec::required("WorkGroup", Str, "Workgroup to update"),
            FieldSpec::clearable("Description", Str, "New description; null clears it"),
            FieldSpec::optional(
                "ConfigurationUpdates",
                Structure,
                "Configuration items to update or remove",
            ),
            FieldSpec::optional("State", Str, "Workgroup state: ENABLED or DISABLED"),
        ],
        default_select: WholeResponse,
        confirm_impact: Medium,
        about: "Updates the workgroup's description, configuration or state",
    },
    OperationDescriptor {
        name: "DeleteWorkGroup",
        cli_name: "delete-work-group",
        fields: &[
            FieldSpec::required("WorkGroup", Str, "Workgroup to delete"),
            FieldSpec::optional(
                "RecursiveDeleteOption",
                Bool,
                "Also delete the workgroup's named queries and query executions",
            ),
        ],
        default_select: WholeResponse,
        confirm_impact: High,
        about: "Deletes the workgroup and optionally its contents",
    },
    // Data catalogs
    OperationDescriptor {
        name: "ListDataCatalogs",
        cli_name: "list-data-catalogs",
        fields: &[
            FieldSpec::optional("MaxResults", Int, "Maximum number of catalogs to return"),
            FieldSpec::optional("NextToken", Str, "Pagination token from a previous call"),
            FieldSpec::optional("WorkGroup", Str, "Workgroup context for the listing"),
        ],
        default_select: WholeResponse,
        confirm_impact: NoConfirm,
        about: "Lists the data catalogs in the account",
    },
    OperationDescriptor {
        name: "CreateDataCatalog",
        cli_name: "create-data-catalog",
        fields: &[
            FieldSpec::required("Name", Str, "Data catalog name"),
            FieldSpec::required("Type", Str, "Catalog type: LAMBDA, GLUE, HIVE or FEDERATED"),
            FieldSpec::optional("Description", Str, "Catalog description"),
            FieldSpec::optional(
                "Parameters",
                Structure,
                "Type-specific key-value connection parameters",
            ),
            FieldSpec::optional("Tags", TagList, "Tags to attach to the catalog"),
        ],
        default_select: WholeResponse,
        confirm_impact: Medium,
        about: "Creates (registers) a data catalog",
    },
    OperationDescriptor {
        name: "GetDataCatalog",
        cli_name: "get-data-catalog",
        fields: &[
            FieldSpec::required("Name", Str, "Data catalog name"),
            FieldSpec::optional("WorkGroup", Str, "Workgroup context"),
        ],
        default_select: Field("DataCatalog"),
        confirm_impact: NoConfirm,
        about: "Returns the specified data catalog",
    },
    OperationDescriptor {
        name: "UpdateDataCatalog",
        cli_name: "update-data-catalog",
        fields: &[
            FieldSpec::required("Name", Str, "Data catalog to update"),
            FieldSpec::required("Type", Str, "Catalog type: LAMBDA, GLUE or HIVE"),
            FieldSpec::clearable("Description", Str, "New description; null clears it"),
            FieldSpec::clearable(
                "Parameters",
                Structure,
                "Replacement connection parameters; null clears them",
            ),
        ],
        default_select: WholeResponse,
        confirm_impact: Medium,
        about: "Updates the data catalog definition",
    },
    OperationDescriptor {
        name: "DeleteDataCatalog",
        cli_name: "delete-data-catalog",
        fields: &[
            FieldSpec::required("Name", Str, "Data catalog to delete"),
            FieldSpec::optional("DeleteCatalogOnly", Bool, "Delete only the Athena registration"),
        ],
        default_select: WholeResponse,
        confirm_impact: High,
        about: "Deletes the data catalog registration",
    },
    // Prepared statements
    OperationDescriptor {
        name: "CreatePreparedStatement",
        cli_name: "create-prepared-statement",
        fields: &[
            FieldSpec::required("StatementName", Str, "Prepared statement name"),
            FieldSpec::required("WorkGroup", Str, "Workgroup the statement belongs to"),
            FieldSpec::required("QueryStatement", Str, "SQL text of the statement"),
            FieldSpec::optional("Description", Str, "Statement description"),
        ],
        default_select: WholeResponse,
        confirm_impact: Medium,
        about: "Creates a prepared statement in a workgroup",
    },
    OperationDescriptor {
        name: "GetPreparedStatement",
        cli_name: "get-prepared-statement",
        fields: &[
            FieldSpec::required("StatementName", Str, "Prepared statement name"),
            FieldSpec::required("WorkGroup", Str, "Workgroup the statement belongs to"),
        ],
        default_select: Field("PreparedStatement"),
        confirm_impact: NoConfirm,
        about: "Returns the specified prepared statement",
    },
    OperationDescriptor {
        name: "UpdatePreparedStatement",
        cli_name: "update-prepared-statement",
        fields: &[
            FieldSpec::required("StatementName", Str, "Prepared statement to update"),
            FieldSpec::required("WorkGroup", Str, "Workgroup the statement belongs to"),
            FieldSpec::required("QueryStatement", Str, "Replacement SQL text"),
            FieldSpec::clearable("Description", Str, "New description; null clears it"),
        ],
        default_select: WholeResponse,
        confirm_impact: Medium,
        about: "Updates a prepared statement",
    },
    OperationDescriptor {
        name: "DeletePreparedStatement",
        cli_name: "delete-prepared-statement",
        fields: &[
            FieldSpec::required("StatementName", Str, "Prepared statement to delete"),
            FieldSpec::required("WorkGroup", Str, "Workgroup the statement belongs to"),
        ],
        default_select: WholeResponse,
        confirm_impact: High,
        about: "Deletes a prepared statement from a workgroup",
    },
    // Query execution
    OperationDescriptor {
        name: "StartQueryExecution",
        cli_name: "start-query-execution",
        fields: &[
            FieldSpec::required("QueryString", Str, "SQL query to run"),
            FieldSpec::optional(
                "ClientRequestToken",
                Str,
                "Idempotency token; reuse returns the original execution",
            ),
            FieldSpec::optional(
                "QueryExecutionContext",
                Structure,
                "Database and catalog context for the query",
            ),
            FieldSpec::optional(
                "ResultConfiguration",
                Structure,
                "Result location and encryption settings",
            ),
            FieldSpec::optional("WorkGroup", Str, "Workgroup to run the query in"),
            FieldSpec::allow_empty(
                "ExecutionParameters",
                StrList,
                "Positional parameter values for parameterized queries",
            ),
        ],
        default_select: Field("QueryExecutionId"),
        confirm_impact: Medium,
        about: "Runs the SQL query and returns its execution id",
    },
    OperationDescriptor {
        name: "StopQueryExecution",
        cli_name: "stop-query-execution",
        fields: &[FieldSpec::required("QueryExecutionId", Str, "Query execution to stop")],
        default_select: WholeResponse,
        confirm_impact: Medium,
        about: "Stops a running query execution",
    },
    OperationDescriptor {
        name: "GetQueryExecution",
        cli_name: "get-query-execution",
        fields: &[FieldSpec::required("QueryExecutionId", Str, "Query execution id")],
        default_select: Field("QueryExecution"),
        confirm_impact: NoConfirm,
        about: "Returns details of a single query execution",
    },
    OperationDescriptor {
        name: "GetQueryResults",
        cli_name: "get-query-results",
        fields: &[
            FieldSpec::required("QueryExecutionId", Str, "Query execution id"),
            FieldSpec::optional("MaxResults", Int, "Maximum number of rows to return"),
            FieldSpec::optional("NextToken", Str, "Pagination token from a previous call"),
        ],
        default_select: Field("ResultSet"),
        confirm_impact: NoConfirm,
        about: "Streams one page of results for a query execution",
    },
    // Calculation execution
    OperationDescriptor {
        name: "StartCalculationExecution",
        cli_name: "start-calculation-execution",
        fields: &[
            FieldSpec::required("SessionId", Str, "Session to run the calculation in"),
            FieldSpec::optional("CodeBlock", Str, "Code to execute"),
            FieldSpec::optional("Description", Str, "Calculation description"),
            FieldSpec::optional("ClientRequestToken", Str, "Idempotency token"),
        ],
        default_select: Field("CalculationExecutionId"),
        confirm_impact: Medium,
        about: "Submits a calculation to a running session",
    },
    OperationDescriptor {
        name: "StopCalculationExecution",
        cli_name: "stop-calculation-execution",
        fields: &[FieldSpec::required(
            "CalculationExecutionId",
            Str,
            "Calculation execution to stop",
        )],
        default_select: Field("State"),
        confirm_impact: Medium,
        about: "Requests cancellation of a calculation",
    },
    // Sessions
    OperationDescriptor {
        name: "StartSession",
        cli_name: "start-session",
        fields: &[
            FieldSpec::required("WorkGroup", Str, "Workgroup the session belongs to"),
            FieldSpec::required(
                "EngineConfiguration",
                Structure,
                "Engine DPU and runtime configuration",
            ),
            FieldSpec::optional("Description", Str, "Session description"),
            FieldSpec::optional("NotebookVersion", Str, "Notebook engine version"),
            FieldSpec::optional(
                "SessionIdleTimeoutInMinutes",
                Int,
                "Idle timeout before the session terminates",
            ),
            FieldSpec::optional("ClientRequestToken", Str, "Idempotency token"),
        ],
        default_select: Field("SessionId"),
        confirm_impact: Medium,
        about: "Creates an interactive session in a workgroup",
    },
    OperationDescriptor {
        name: "TerminateSession",
        cli_name: "terminate-session",
        fields: &[FieldSpec::required("SessionId", Str, "Session to terminate")],
        default_select: Field("State"),
        confirm_impact: High,
        about: "Terminates a running session",
    },
    OperationDescriptor {
        name: "GetSessionStatus",
        cli_name: "get-session-status",
        fields: &[FieldSpec::required("SessionId", Str, "Session id")],
        default_select: Field("Status"),
        confirm_impact: NoConfirm,
        about: "Returns the current status of a session",
    },
    // Tagging
    OperationDescriptor {
        name: "TagResource",
        cli_name: "tag-resource",
        fields: &[
            FieldSpec::required("ResourceARN", Str, "ARN of the workgroup or data catalog"),
            FieldSpec::required("Tags", TagList, "Tags to add or overwrite"),
        ],
        default_select: WholeResponse,
        confirm_impact: Medium,
        about: "Adds tags to a workgroup or data catalog",
    },
    OperationDescriptor {
        name: "UntagResource",
        cli_name: "untag-resource",
        fields: &[
            FieldSpec::required("ResourceARN", Str, "ARN of the workgroup or data catalog"),
            FieldSpec::required("TagKeys", StrList, "Keys of the tags to remove"),
        ],
        default_select: WholeResponse,
        confirm_impact: Medium,
        about: "Removes tags from a workgroup or data catalog",
    },
];

/// Look up a catalog row by API name or CLI name, case-insensitively.
pub fn find_operation(name: &str) -> Option<&'static OperationDescriptor> {
    OPERATIONS
        .iter()
        .find(|op| op.name.eq_ignore_ascii_case(name) || op.cli_name.eq_ignore_ascii_case(name))
}
