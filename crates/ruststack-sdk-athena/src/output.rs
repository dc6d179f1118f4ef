//! Athena output types.

use ruststack_sdk_core::json_output;
use serde::{Deserialize, Serialize};

use crate::types::{QueryExecution, ResultSet};

/// Output for the `StartQueryExecution` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartQueryExecutionOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_execution_id: Option<String>,
}

/// Output for the `GetQueryExecution` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetQueryExecutionOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_execution: Option<QueryExecution>,
}

/// Output for the `GetQueryResults` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetQueryResultsOutput {
    /// Number of rows inserted by a DML statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_set: Option<ResultSet>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListQueryExecutions` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListQueryExecutionsOutput {
    /// Most recent first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_execution_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

json_output!(
    StartQueryExecutionOutput,
    GetQueryExecutionOutput,
    GetQueryResultsOutput,
    ListQueryExecutionsOutput,
);
