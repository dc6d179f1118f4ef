//! Kinesis Data Streams model for the RustStack SDK.
//!
//! Kinesis speaks `awsJson1_1`: every operation is `POST /` with an
//! `X-Amz-Target: Kinesis_20131202.<Operation>` header and a JSON body whose
//! keys are the `PascalCase` member names. Timestamps travel as epoch seconds
//! and record payloads as base64.
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod input;
pub mod operations;
pub mod output;
pub mod types;

use ruststack_sdk_core::response::parse_json_error;
use ruststack_sdk_core::{Protocol, Service};

pub use operations::KinesisOperation;

/// Kinesis service metadata.
pub const SERVICE: Service = Service {
    name: "Kinesis",
    endpoint_prefix: "kinesis",
    signing_name: "kinesis",
    env_id: "KINESIS",
    protocol: Protocol::AwsJson1_1,
    api_version: "2013-12-02",
    target_prefix: Some("Kinesis_20131202"),
    error_parser: parse_json_error,
};
