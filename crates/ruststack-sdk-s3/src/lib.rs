//! Amazon S3 model for the RustStack SDK.
//!
//! S3 speaks `restXml`: bucket and key are URI labels (the key is greedy,
//! so `/` stays literal), most scalar members travel as headers or query
//! parameters, and structured payloads are XML documents in the
//! `2006-03-01` namespace. Requests are path-style
//! (`https://s3.{region}.amazonaws.com/{Bucket}/{Key}`).
//!
//! # Modules
//!
//! - [`types`]: enums and value objects with their XML codecs
//! - [`input`]: one input struct per operation, by resource
//! - [`output`]: outputs decoded from headers and XML bodies
//! - [`operations`]: [`S3Operation`] for dispatch by name
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod input;
pub mod operations;
pub mod output;
pub mod types;

use ruststack_sdk_core::{Protocol, Service};

pub use operations::S3Operation;

/// Namespace of every S3 request document.
pub const NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

/// S3 service metadata.
pub const SERVICE: Service = Service {
    name: "S3",
    endpoint_prefix: "s3",
    signing_name: "s3",
    env_id: "S3",
    protocol: Protocol::RestXml,
    api_version: "2006-03-01",
    target_prefix: None,
    error_parser: ruststack_sdk_xml::parse_error,
};
