//! Amazon Location Service model for the RustStack SDK.
//!
//! Location speaks `restJson1`. Each API family has its own host: requests
//! go to `{family}.geo.{region}.amazonaws.com` (`places.`, `routes.`,
//! `maps.`, `geofencing.`, `tracking.`). The prefix is dropped when a custom
//! endpoint is configured.
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod input;
pub mod operations;
pub mod output;
pub mod types;

use ruststack_sdk_core::response::parse_json_error;
use ruststack_sdk_core::{Protocol, Service};

pub use operations::LocationOperation;

/// Location service metadata.
pub const SERVICE: Service = Service {
    name: "Location",
    endpoint_prefix: "geo",
    signing_name: "geo",
    env_id: "LOCATION",
    protocol: Protocol::RestJson1,
    api_version: "2020-11-19",
    target_prefix: None,
    error_parser: parse_json_error,
};
