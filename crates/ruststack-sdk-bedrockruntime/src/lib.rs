//! Amazon Bedrock Runtime model for the RustStack SDK.
//!
//! Bedrock Runtime speaks `restJson1`. `InvokeModel` sends the caller's
//! payload verbatim as the request body; `Converse` sends a JSON document
//! built from the non-bound members of the input.
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod input;
pub mod operations;
pub mod output;
pub mod types;

use ruststack_sdk_core::response::parse_json_error;
use ruststack_sdk_core::{Protocol, Service};

pub use operations::BedrockRuntimeOperation;

/// Bedrock Runtime service metadata.
pub const SERVICE: Service = Service {
    name: "Bedrock Runtime",
    endpoint_prefix: "bedrock-runtime",
    signing_name: "bedrock",
    env_id: "BEDROCK_RUNTIME",
    protocol: Protocol::RestJson1,
    api_version: "2023-09-30",
    target_prefix: None,
    error_parser: parse_json_error,
};
