//! Kinesis output types.
//!
//! Outputs are the JSON response body. Unknown members are ignored so that
//! newer service responses still decode.

use ruststack_sdk_core::json_output;
use serde::{Deserialize, Serialize};

use crate::types::{
    ChildShard, EncryptionType, PutRecordsResultEntry, Record, Shard, StreamDescriptionSummary,
};

/// Output for the `DescribeStreamSummary` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStreamSummaryOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_description_summary: Option<StreamDescriptionSummary>,
}

/// Output for the `ListShards` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListShardsOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shards: Vec<Shard>,

    /// Present when more shards are available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `PutRecord` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_type: Option<EncryptionType>,
}

/// Output for the `PutRecords` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordsOutput {
    /// Number of rejected records. Check each entry's `ErrorCode`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_record_count: Option<i32>,

    /// One entry per request record, in request order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<PutRecordsResultEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_type: Option<EncryptionType>,
}

/// Output for the `GetShardIterator` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetShardIteratorOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_iterator: Option<String>,
}

/// Output for the `GetRecords` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRecordsOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<Record>,

    /// `None` once the shard is closed and fully read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_shard_iterator: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub millis_behind_latest: Option<i64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_shards: Vec<ChildShard>,
}

json_output!(
    DescribeStreamSummaryOutput,
    ListShardsOutput,
    PutRecordOutput,
    PutRecordsOutput,
    GetShardIteratorOutput,
    GetRecordsOutput,
);
