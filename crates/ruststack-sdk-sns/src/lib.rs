//! Amazon SNS model for the RustStack SDK.
//!
//! SNS speaks `awsQuery`: every operation is `POST /` with a form-encoded
//! body that starts with `Action` and `Version`. Lists flatten to
//! `{Member}.member.N`, maps to `{Member}.entry.N.{key|value}`. Responses
//! are XML documents shaped `<{Op}Response><{Op}Result>...`.
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod input;
pub mod operations;
pub mod output;
pub mod types;

use ruststack_sdk_core::{Protocol, Service};

pub use operations::SnsOperation;

/// SNS service metadata.
pub const SERVICE: Service = Service {
    name: "SNS",
    endpoint_prefix: "sns",
    signing_name: "sns",
    env_id: "SNS",
    protocol: Protocol::AwsQuery,
    api_version: "2010-03-31",
    target_prefix: None,
    error_parser: ruststack_sdk_xml::parse_error,
};
