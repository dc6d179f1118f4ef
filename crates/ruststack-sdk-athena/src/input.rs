//! Athena input types.
//!
//! All input structs use `PascalCase` JSON field naming to match the Athena
//! wire protocol (`awsJson1_1`).

use ruststack_sdk_core::input::{
    idempotency_token, json_rpc_request, required, validate_opt,
};
use ruststack_sdk_core::{AwsInput, InputError, Request, Service, Validate};
use serde::{Deserialize, Serialize};

use crate::SERVICE;
use crate::output::{
    GetQueryExecutionOutput, GetQueryResultsOutput, ListQueryExecutionsOutput,
    StartQueryExecutionOutput,
};
use crate::types::{QueryExecutionContext, ResultConfiguration, ResultReuseConfiguration};

// ---------------------------------------------------------------------------
// Query execution
// ---------------------------------------------------------------------------

/// Input for the `StartQueryExecution` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct StartQueryExecutionInput {
    /// SQL text. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string: Option<String>,

    /// Idempotency token, generated when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_execution_context: Option<QueryExecutionContext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_configuration: Option<ResultConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,

    /// Values bound to `?` placeholders, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub execution_parameters: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_reuse_configuration: Option<ResultReuseConfiguration>,
}

impl Validate for StartQueryExecutionInput {
    fn validate(&self) -> Result<(), InputError> {
        required("StartQueryExecutionInput", "QueryString", &self.query_string)?;
        validate_opt(self.query_execution_context.as_ref())?;
        validate_opt(self.result_configuration.as_ref())?;
        validate_opt(self.result_reuse_configuration.as_ref())
    }
}

impl AwsInput for StartQueryExecutionInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "StartQueryExecution";
    type Output = StartQueryExecutionOutput;

    fn request(&self) -> Result<Request, InputError> {
        let input = Self {
            client_request_token: Some(idempotency_token(self.client_request_token.as_ref())),
            ..self.clone()
        };
        json_rpc_request(&input)
    }
}

/// Input for the `GetQueryExecution` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GetQueryExecutionInput {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_execution_id: Option<String>,
}

impl Validate for GetQueryExecutionInput {
    fn validate(&self) -> Result<(), InputError> {
        required(
            "GetQueryExecutionInput",
            "QueryExecutionId",
            &self.query_execution_id,
        )?;
        Ok(())
    }
}

impl AwsInput for GetQueryExecutionInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "GetQueryExecution";
    type Output = GetQueryExecutionOutput;

    fn request(&self) -> Result<Request, InputError> {
        json_rpc_request(self)
    }
}

/// Input for the `GetQueryResults` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GetQueryResultsInput {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_execution_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Up to 1000 rows per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// `GZIP`, `LZ4`, `SNAPPY`, `ZSTD`, `NONE`. Only used by Spark calculations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_result_type: Option<String>,
}

impl Validate for GetQueryResultsInput {
    fn validate(&self) -> Result<(), InputError> {
        required(
            "GetQueryResultsInput",
            "QueryExecutionId",
            &self.query_execution_id,
        )?;
        Ok(())
    }
}

impl AwsInput for GetQueryResultsInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "GetQueryResults";
    type Output = GetQueryResultsOutput;

    fn request(&self) -> Result<Request, InputError> {
        json_rpc_request(self)
    }
}

/// Input for the `StopQueryExecution` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct StopQueryExecutionInput {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_execution_id: Option<String>,
}

impl Validate for StopQueryExecutionInput {
    fn validate(&self) -> Result<(), InputError> {
        required(
            "StopQueryExecutionInput",
            "QueryExecutionId",
            &self.query_execution_id,
        )?;
        Ok(())
    }
}

impl AwsInput for StopQueryExecutionInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "StopQueryExecution";
    type Output = ();

    fn request(&self) -> Result<Request, InputError> {
        json_rpc_request(self)
    }
}

/// Input for the `ListQueryExecutions` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ListQueryExecutionsInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// 0 to 50.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Defaults to `primary` on the service side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
}

impl Validate for ListQueryExecutionsInput {
    fn validate(&self) -> Result<(), InputError> {
        Ok(())
    }
}

impl AwsInput for ListQueryExecutionsInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "ListQueryExecutions";
    type Output = ListQueryExecutionsOutput;

    fn request(&self) -> Result<Request, InputError> {
        json_rpc_request(self)
    }
}
