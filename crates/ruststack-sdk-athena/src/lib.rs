//! Amazon Athena model for the RustStack SDK.
//!
//! Athena speaks `awsJson1_1` with the `AmazonAthena` target prefix. The
//! `ClientRequestToken` of `StartQueryExecution` is an idempotency token and
//! is generated when the caller leaves it unset.
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod input;
pub mod operations;
pub mod output;
pub mod types;

use ruststack_sdk_core::response::parse_json_error;
use ruststack_sdk_core::{Protocol, Service};

pub use operations::AthenaOperation;

/// Athena service metadata.
pub const SERVICE: Service = Service {
    name: "Athena",
    endpoint_prefix: "athena",
    signing_name: "athena",
    env_id: "ATHENA",
    protocol: Protocol::AwsJson1_1,
    api_version: "2017-05-18",
    target_prefix: Some("AmazonAthena"),
    error_parser: parse_json_error,
};
