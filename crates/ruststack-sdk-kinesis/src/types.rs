//! Kinesis enums and value objects.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use ruststack_sdk_core::codec::{blob, epoch_seconds};
use ruststack_sdk_core::input::{check_enum, required};
use ruststack_sdk_core::{InputError, Validate, aws_enum};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

aws_enum! {
    /// Capacity mode of a stream.
    pub enum StreamMode {
        /// Shard count is managed by the caller.
        Provisioned = "PROVISIONED",
        /// Capacity scales automatically.
        OnDemand = "ON_DEMAND",
    }
}

aws_enum! {
    /// Where a shard iterator starts reading.
    pub enum ShardIteratorType {
        /// At the given sequence number.
        AtSequenceNumber = "AT_SEQUENCE_NUMBER",
        /// Right after the given sequence number.
        AfterSequenceNumber = "AFTER_SEQUENCE_NUMBER",
        /// At the oldest record in the shard.
        TrimHorizon = "TRIM_HORIZON",
        /// After the most recent record.
        Latest = "LATEST",
        /// At the given arrival timestamp.
        AtTimestamp = "AT_TIMESTAMP",
    }
}

aws_enum! {
    /// Filter applied by `ListShards`.
    pub enum ShardFilterType {
        AfterShardId = "AFTER_SHARD_ID",
        AtTrimHorizon = "AT_TRIM_HORIZON",
        FromTrimHorizon = "FROM_TRIM_HORIZON",
        AtLatest = "AT_LATEST",
        AtTimestamp = "AT_TIMESTAMP",
        FromTimestamp = "FROM_TIMESTAMP",
    }
}

aws_enum! {
    /// Server-side encryption applied to records.
    pub enum EncryptionType {
        None = "NONE",
        Kms = "KMS",
    }
}

aws_enum! {
    /// Lifecycle state of a stream.
    pub enum StreamStatus {
        Creating = "CREATING",
        Deleting = "DELETING",
        Active = "ACTIVE",
        Updating = "UPDATING",
    }
}

aws_enum! {
    /// Shard-level CloudWatch metric.
    pub enum MetricsName {
        IncomingBytes = "IncomingBytes",
        IncomingRecords = "IncomingRecords",
        OutgoingBytes = "OutgoingBytes",
        OutgoingRecords = "OutgoingRecords",
        WriteProvisionedThroughputExceeded = "WriteProvisionedThroughputExceeded",
        ReadProvisionedThroughputExceeded = "ReadProvisionedThroughputExceeded",
        IteratorAgeMilliseconds = "IteratorAgeMilliseconds",
        All = "ALL",
    }
}

// ---------------------------------------------------------------------------
// Value objects
// ---------------------------------------------------------------------------

/// Capacity mode settings of a stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamModeDetails {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_mode: Option<StreamMode>,
}

impl Validate for StreamModeDetails {
    fn validate(&self) -> Result<(), InputError> {
        let mode = required("StreamModeDetails", "StreamMode", &self.stream_mode)?;
        check_enum("StreamModeDetails", "StreamMode", Some(mode))
    }
}

/// Selects which shards `ListShards` returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ShardFilter {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ShardFilterType>,

    /// Used with `AFTER_SHARD_ID`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_id: Option<String>,

    /// Used with `AT_TIMESTAMP` and `FROM_TIMESTAMP`.
    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Validate for ShardFilter {
    fn validate(&self) -> Result<(), InputError> {
        let kind = required("ShardFilter", "Type", &self.r#type)?;
        check_enum("ShardFilter", "Type", Some(kind))
    }
}

/// One record of a `PutRecords` batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PutRecordsRequestEntry {
    /// Record payload, base64 on the wire. Required.
    #[serde(default, with = "blob", skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,

    /// Overrides the partition key hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_hash_key: Option<String>,

    /// Determines the destination shard. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,
}

impl Validate for PutRecordsRequestEntry {
    fn validate(&self) -> Result<(), InputError> {
        required("PutRecordsRequestEntry", "Data", &self.data)?;
        required("PutRecordsRequestEntry", "PartitionKey", &self.partition_key)?;
        Ok(())
    }
}

/// Result for one entry of a `PutRecords` batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordsResultEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_id: Option<String>,
    /// Set when the record was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// A data record read from a shard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,

    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub approximate_arrival_timestamp: Option<DateTime<Utc>>,

    /// Decoded record payload.
    #[serde(default, with = "blob", skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_type: Option<EncryptionType>,
}

/// Range of hash keys owned by a shard, as decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HashKeyRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_hash_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_hash_key: Option<String>,
}

/// Range of sequence numbers in a shard. Open shards have no end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SequenceNumberRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_sequence_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_sequence_number: Option<String>,
}

/// A shard of a stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_shard_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjacent_parent_shard_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_key_range: Option<HashKeyRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number_range: Option<SequenceNumberRange>,
}

/// A shard created by a reshard, reported by `GetRecords` at the end of a
/// closed shard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChildShard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parent_shards: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_key_range: Option<HashKeyRange>,
}

/// Enhanced monitoring settings of a stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnhancedMetrics {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shard_level_metrics: Vec<MetricsName>,
}

/// Summary returned by `DescribeStreamSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamDescriptionSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,

    #[serde(rename = "StreamARN", default, skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_status: Option<StreamStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_mode_details: Option<StreamModeDetails>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_period_hours: Option<i32>,

    #[serde(
        default,
        with = "epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub stream_creation_timestamp: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enhanced_monitoring: Vec<EnhancedMetrics>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_type: Option<EncryptionType>,

    /// KMS key used for server-side encryption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_shard_count: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_count: Option<i32>,
}
