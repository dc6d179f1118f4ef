//! Kinesis operation enum.

use std::fmt;

use bytes::Bytes;
use ruststack_sdk_core::{AwsInput, ClientConfig, ClientError};

use crate::input::{
    CreateStreamInput, DeleteStreamInput, DescribeStreamSummaryInput, GetRecordsInput,
    GetShardIteratorInput, ListShardsInput, PutRecordInput, PutRecordsInput,
};

/// All supported Kinesis operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KinesisOperation {
    // Stream management
    /// Create a stream.
    CreateStream,
    /// Delete a stream.
    DeleteStream,
    /// Describe a stream without listing shards.
    DescribeStreamSummary,
    /// List the shards of a stream.
    ListShards,

    // Writing
    /// Write one record.
    PutRecord,
    /// Write a batch of records.
    PutRecords,

    // Reading
    /// Obtain a shard iterator.
    GetShardIterator,
    /// Read records from a shard iterator.
    GetRecords,
}

impl KinesisOperation {
    /// All operations, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CreateStream,
        Self::DeleteStream,
        Self::DescribeStreamSummary,
        Self::ListShards,
        Self::PutRecord,
        Self::PutRecords,
        Self::GetShardIterator,
        Self::GetRecords,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateStream => "CreateStream",
            Self::DeleteStream => "DeleteStream",
            Self::DescribeStreamSummary => "DescribeStreamSummary",
            Self::ListShards => "ListShards",
            Self::PutRecord => "PutRecord",
            Self::PutRecords => "PutRecords",
            Self::GetShardIterator => "GetShardIterator",
            Self::GetRecords => "GetRecords",
        }
    }

    /// Parse an operation name string into a `KinesisOperation`.
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
            Self::CreateStream => CreateStreamInput::from_params(params)?.build_http_request(config),
            Self::DeleteStream => DeleteStreamInput::from_params(params)?.build_http_request(config),
            Self::DescribeStreamSummary => {
                DescribeStreamSummaryInput::from_params(params)?.build_http_request(config)
            }
            Self::ListShards => ListShardsInput::from_params(params)?.build_http_request(config),
            Self::PutRecord => PutRecordInput::from_params(params)?.build_http_request(config),
            Self::PutRecords => PutRecordsInput::from_params(params)?.build_http_request(config),
            Self::GetShardIterator => {
                GetShardIteratorInput::from_params(params)?.build_http_request(config)
            }
            Self::GetRecords => GetRecordsInput::from_params(params)?.build_http_request(config),
        }
    }
}

impl fmt::Display for KinesisOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
