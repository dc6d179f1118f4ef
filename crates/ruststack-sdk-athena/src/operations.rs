//! Athena operation enum.

use std::fmt;

use bytes::Bytes;
use ruststack_sdk_core::{AwsInput, ClientConfig, ClientError};

use crate::input::{
    GetQueryExecutionInput, GetQueryResultsInput, ListQueryExecutionsInput,
    StartQueryExecutionInput, StopQueryExecutionInput,
};

/// All supported Athena operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AthenaOperation {
    /// Run a SQL statement.
    StartQueryExecution,
    /// Describe a query execution.
    GetQueryExecution,
    /// Page through the results of a query.
    GetQueryResults,
    /// Cancel a running query.
    StopQueryExecution,
    /// List query execution ids of a workgroup.
    ListQueryExecutions,
}

impl AthenaOperation {
    /// All operations, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::StartQueryExecution,
        Self::GetQueryExecution,
        Self::GetQueryResults,
        Self::StopQueryExecution,
        Self::ListQueryExecutions,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartQueryExecution => "StartQueryExecution",
            Self::GetQueryExecution => "GetQueryExecution",
            Self::GetQueryResults => "GetQueryResults",
            Self::StopQueryExecution => "StopQueryExecution",
            Self::ListQueryExecutions => "ListQueryExecutions",
        }
    }

    /// Parse an operation name string into an `AthenaOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// Build the HTTP request for this operation from a named-parameter map.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the parameters do not map onto the input
    /// shape, fail validation, or the endpoint cannot be resolved.
    pub fn build_http_request(
        self,
        params: serde_json::Value,
        config: &ClientConfig,
    ) -> Result<http::Request<Bytes>, ClientError> {
        match self {
            Self::StartQueryExecution => {
                StartQueryExecutionInput::from_params(params)?.build_http_request(config)
            }
            Self::GetQueryExecution => {
                GetQueryExecutionInput::from_params(params)?.build_http_request(config)
            }
            Self::GetQueryResults => {
                GetQueryResultsInput::from_params(params)?.build_http_request(config)
            }
            Self::StopQueryExecution => {
                StopQueryExecutionInput::from_params(params)?.build_http_request(config)
            }
            Self::ListQueryExecutions => {
                ListQueryExecutionsInput::from_params(params)?.build_http_request(config)
            }
        }
    }
}

impl fmt::Display for AthenaOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
