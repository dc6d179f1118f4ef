//! Athena enums and value objects.

use chrono::{DateTime, Utc};
use ruststack_sdk_core::codec::epoch_seconds;
use ruststack_sdk_core::input::{check_enum, required, validate_opt};
use ruststack_sdk_core::{InputError, Validate, aws_enum};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

aws_enum! {
    /// Encryption of query results in S3.
    pub enum EncryptionOption {
        SseS3 = "SSE_S3",
        SseKms = "SSE_KMS",
        CseKms = "CSE_KMS",
    }
}

aws_enum! {
    /// Canned ACL applied to query results.
    pub enum S3AclOption {
        BucketOwnerFullControl = "BUCKET_OWNER_FULL_CONTROL",
    }
}

aws_enum! {
    /// State of a query execution.
    pub enum QueryExecutionState {
        Queued = "QUEUED",
        Running = "RUNNING",
        Succeeded = "SUCCEEDED",
        Failed = "FAILED",
        Cancelled = "CANCELLED",
    }
}

aws_enum! {
    /// Kind of statement that was run.
    pub enum StatementType {
        Ddl = "DDL",
        Dml = "DML",
        Utility = "UTILITY",
    }
}

aws_enum! {
    /// Nullability of a result column.
    pub enum ColumnNullable {
        NotNull = "NOT_NULL",
        Nullable = "NULLABLE",
        /// The wire value `UNKNOWN`: nullability could not be determined.
        Unspecified = "UNKNOWN",
    }
}

// ---------------------------------------------------------------------------
// Query configuration
// ---------------------------------------------------------------------------

/// Database and catalog the query runs against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryExecutionContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

impl Validate for QueryExecutionContext {
    fn validate(&self) -> Result<(), InputError> {
        Ok(())
    }
}

/// Encryption settings for query results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EncryptionConfiguration {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_option: Option<EncryptionOption>,

    /// KMS key ARN or id, for `SSE_KMS` and `CSE_KMS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
}

impl Validate for EncryptionConfiguration {
    fn validate(&self) -> Result<(), InputError> {
        let option = required(
            "EncryptionConfiguration",
            "EncryptionOption",
            &self.encryption_option,
        )?;
        check_enum("EncryptionConfiguration", "EncryptionOption", Some(option))
    }
}

/// ACL settings for query results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AclConfiguration {
    /// Required.
    #[serde(rename = "S3AclOption", default, skip_serializing_if = "Option::is_none")]
    pub s3_acl_option: Option<S3AclOption>,
}

impl Validate for AclConfiguration {
    fn validate(&self) -> Result<(), InputError> {
        let option = required("AclConfiguration", "S3AclOption", &self.s3_acl_option)?;
        check_enum("AclConfiguration", "S3AclOption", Some(option))
    }
}

/// Where and how query results are stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultConfiguration {
    /// `s3://bucket/prefix/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_configuration: Option<EncryptionConfiguration>,

    /// Account id expected to own the output bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_bucket_owner: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl_configuration: Option<AclConfiguration>,
}

impl Validate for ResultConfiguration {
    fn validate(&self) -> Result<(), InputError> {
        validate_opt(self.encryption_configuration.as_ref())?;
        validate_opt(self.acl_configuration.as_ref())
    }
}

/// Reuse results of an earlier identical query when younger than `MaxAgeInMinutes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultReuseByAgeConfiguration {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age_in_minutes: Option<i32>,
}

impl Validate for ResultReuseByAgeConfiguration {
    fn validate(&self) -> Result<(), InputError> {
        required("ResultReuseByAgeConfiguration", "Enabled", &self.enabled)?;
        Ok(())
    }
}

/// Query result reuse settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultReuseConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_reuse_by_age_configuration: Option<ResultReuseByAgeConfiguration>,
}

impl Validate for ResultReuseConfiguration {
    fn validate(&self) -> Result<(), InputError> {
        validate_opt(self.result_reuse_by_age_configuration.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Query execution state
// ---------------------------------------------------------------------------

/// Error details of a failed query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AthenaError {
    /// 1 system, 2 user, 3 other.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_category: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Current state of a query execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryExecutionStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<QueryExecutionState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_change_reason: Option<String>,

    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub submission_date_time: Option<DateTime<Utc>>,

    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub completion_date_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athena_error: Option<AthenaError>,
}

/// Whether previous results were reused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultReuseInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reused_previous_result: Option<bool>,
}

/// Timing and data scanned by a query execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryExecutionStatistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_execution_time_in_millis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_scanned_in_bytes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_manifest_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_execution_time_in_millis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_queue_time_in_millis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_pre_processing_time_in_millis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_planning_time_in_millis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_processing_time_in_millis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_reuse_information: Option<ResultReuseInformation>,
}

/// Athena engine version settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineVersion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_engine_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_engine_version: Option<String>,
}

/// A single execution of a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryExecution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_execution_id: Option<String>,

    /// The SQL text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_type: Option<StatementType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_configuration: Option<ResultConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_reuse_configuration: Option<ResultReuseConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_execution_context: Option<QueryExecutionContext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<QueryExecutionStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<QueryExecutionStatistics>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<EngineVersion>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub execution_parameters: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substatement_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Result sets
// ---------------------------------------------------------------------------

/// One cell of a result row. `None` for SQL `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Datum {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_char_value: Option<String>,
}

/// One row of a result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Row {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Datum>,
}

/// Metadata of one result column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// SQL type name, e.g. `varchar`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<ColumnNullable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

/// Column metadata of a result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultSetMetadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_info: Vec<ColumnInfo>,
}

/// Rows and column metadata of a query result.
///
/// For `SELECT` queries the first row of the first page holds the column
/// labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Row>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_set_metadata: Option<ResultSetMetadata>,
}
