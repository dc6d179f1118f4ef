//! Kinesis input types.
//!
//! All input structs use `PascalCase` JSON field naming to match the Kinesis
//! wire protocol (`awsJson1_1`). The same struct is the named-parameter map
//! and the request body: unset members are omitted, and unknown parameter
//! names are rejected.

use std::collections::HashMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use ruststack_sdk_core::codec::{blob, epoch_seconds};
use ruststack_sdk_core::input::{
    check_enum, json_rpc_request, required, required_list, validate_list, validate_opt,
};
use ruststack_sdk_core::{AwsInput, InputError, Request, Service, Validate};
use serde::{Deserialize, Serialize};

use crate::SERVICE;
use crate::output::{
    DescribeStreamSummaryOutput, GetRecordsOutput, GetShardIteratorOutput, ListShardsOutput,
    PutRecordOutput, PutRecordsOutput,
};
use crate::types::{PutRecordsRequestEntry, ShardFilter, ShardIteratorType, StreamModeDetails};

// ---------------------------------------------------------------------------
// Stream management
// ---------------------------------------------------------------------------

/// Input for the `CreateStream` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreateStreamInput {
    /// Name of the stream. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,

    /// Number of shards. Only for provisioned streams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_count: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_mode_details: Option<StreamModeDetails>,

    /// Tags applied at creation.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl Validate for CreateStreamInput {
    fn validate(&self) -> Result<(), InputError> {
        required("CreateStreamInput", "StreamName", &self.stream_name)?;
        validate_opt(self.stream_mode_details.as_ref())
    }
}

impl AwsInput for CreateStreamInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "CreateStream";
    type Output = ();

    fn request(&self) -> Result<Request, InputError> {
        json_rpc_request(self)
    }
}

/// Input for the `DeleteStream` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DeleteStreamInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,

    /// Delete registered consumers along with the stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_consumer_deletion: Option<bool>,

    #[serde(rename = "StreamARN", default, skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
}

impl Validate for DeleteStreamInput {
    fn validate(&self) -> Result<(), InputError> {
        Ok(())
    }
}

impl AwsInput for DeleteStreamInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "DeleteStream";
    type Output = ();

    fn request(&self) -> Result<Request, InputError> {
        json_rpc_request(self)
    }
}

/// Input for the `DescribeStreamSummary` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DescribeStreamSummaryInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,

    #[serde(rename = "StreamARN", default, skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
}

impl Validate for DescribeStreamSummaryInput {
    fn validate(&self) -> Result<(), InputError> {
        Ok(())
    }
}

impl AwsInput for DescribeStreamSummaryInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "DescribeStreamSummary";
    type Output = DescribeStreamSummaryOutput;

    fn request(&self) -> Result<Request, InputError> {
        json_rpc_request(self)
    }
}

/// Input for the `ListShards` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ListShardsInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,

    /// Pagination token. Cannot be combined with `StreamName`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_start_shard_id: Option<String>,

    /// 1 to 10000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Disambiguates streams that were deleted and re-created under the same name.
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub stream_creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_filter: Option<ShardFilter>,

    #[serde(rename = "StreamARN", default, skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
}

impl Validate for ListShardsInput {
    fn validate(&self) -> Result<(), InputError> {
        validate_opt(self.shard_filter.as_ref())
    }
}

impl AwsInput for ListShardsInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "ListShards";
    type Output = ListShardsOutput;

    fn request(&self) -> Result<Request, InputError> {
        json_rpc_request(self)
    }
}

// ---------------------------------------------------------------------------
// Writing records
// ---------------------------------------------------------------------------

/// Input for the `PutRecord` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PutRecordInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,

    /// Record payload, base64 in the parameter map and on the wire. Required.
    #[serde(default, with = "blob", skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,

    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_hash_key: Option<String>,

    /// Guarantees strictly increasing sequence numbers for one partition key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number_for_ordering: Option<String>,

    #[serde(rename = "StreamARN", default, skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
}

impl Validate for PutRecordInput {
    fn validate(&self) -> Result<(), InputError> {
        required("PutRecordInput", "Data", &self.data)?;
        required("PutRecordInput", "PartitionKey", &self.partition_key)?;
        Ok(())
    }
}

impl AwsInput for PutRecordInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "PutRecord";
    type Output = PutRecordOutput;

    fn request(&self) -> Result<Request, InputError> {
        json_rpc_request(self)
    }
}

/// Input for the `PutRecords` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PutRecordsInput {
    /// Up to 500 entries. Required.
    #[serde(default)]
    pub records: Vec<PutRecordsRequestEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,

    #[serde(rename = "StreamARN", default, skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
}

impl Validate for PutRecordsInput {
    fn validate(&self) -> Result<(), InputError> {
        required_list("PutRecordsInput", "Records", &self.records)?;
        validate_list(&self.records)
    }
}

impl AwsInput for PutRecordsInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "PutRecords";
    type Output = PutRecordsOutput;

    fn request(&self) -> Result<Request, InputError> {
        json_rpc_request(self)
    }
}

// ---------------------------------------------------------------------------
// Reading records
// ---------------------------------------------------------------------------

/// Input for the `GetShardIterator` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GetShardIteratorInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,

    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_id: Option<String>,

    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_iterator_type: Option<ShardIteratorType>,

    /// Used with `AT_SEQUENCE_NUMBER` and `AFTER_SEQUENCE_NUMBER`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_sequence_number: Option<String>,

    /// Used with `AT_TIMESTAMP`.
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(rename = "StreamARN", default, skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
}

impl Validate for GetShardIteratorInput {
    fn validate(&self) -> Result<(), InputError> {
        required("GetShardIteratorInput", "ShardId", &self.shard_id)?;
        let kind = required(
            "GetShardIteratorInput",
            "ShardIteratorType",
            &self.shard_iterator_type,
        )?;
        check_enum("GetShardIteratorInput", "ShardIteratorType", Some(kind))
    }
}

impl AwsInput for GetShardIteratorInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "GetShardIterator";
    type Output = GetShardIteratorOutput;

    fn request(&self) -> Result<Request, InputError> {
        json_rpc_request(self)
    }
}

/// Input for the `GetRecords` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GetRecordsInput {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_iterator: Option<String>,

    /// 1 to 10000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    #[serde(rename = "StreamARN", default, skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
}

impl Validate for GetRecordsInput {
    fn validate(&self) -> Result<(), InputError> {
        required("GetRecordsInput", "ShardIterator", &self.shard_iterator)?;
        Ok(())
    }
}

impl AwsInput for GetRecordsInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "GetRecords";
    type Output = GetRecordsOutput;

    fn request(&self) -> Result<Request, InputError> {
        json_rpc_request(self)
    }
}
