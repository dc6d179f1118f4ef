//! Cross-service tests for the RustStack SDK models.
//!
//! Every test goes through the public [`AwsInput`] surface: named
//! parameters in, `http::Request` out, canned `http::Response` back in.
//! No network access is needed.
//!
//! ```text
//! cargo test -p ruststack-sdk-integration
//! ```
//!
//! [`AwsInput`]: ruststack_sdk_core::AwsInput

use std::sync::Once;

use bytes::Bytes;
use http::StatusCode;
use ruststack_sdk_core::ClientConfig;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint used by tests that target a local emulator.
fn endpoint_url() -> String {
    std::env::var("RUSTSTACK_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:4566".to_owned())
}

/// Client configuration for the default AWS endpoints in `region`.
#[must_use]
pub fn aws_config(region: &str) -> ClientConfig {
    init_tracing();
    ClientConfig::builder().region(region).build()
}

/// Client configuration pointing every service at the local emulator.
#[must_use]
pub fn local_config() -> ClientConfig {
    init_tracing();
    ClientConfig::builder()
        .region("us-east-1")
        .endpoint(endpoint_url())
        .build()
}

/// A canned response with the given status, headers and body.
#[must_use]
pub fn canned_response(
    status: StatusCode,
    headers: &[(&str, &str)],
    body: impl Into<Bytes>,
) -> http::Response<Bytes> {
    let mut builder = http::Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder
        .body(body.into())
        .unwrap_or_else(|e| panic!("invalid canned response: {e}"))
}

/// A canned JSON response.
#[must_use]
pub fn json_response(status: StatusCode, body: &serde_json::Value) -> http::Response<Bytes> {
    canned_response(
        status,
        &[("content-type", "application/json")],
        body.to_string(),
    )
}

/// The form fields of a query protocol body.
#[must_use]
pub fn form_fields(body: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

mod test_athena;
mod test_bedrock;
mod test_errors;
mod test_kinesis;
mod test_location;
mod test_s3;
mod test_sns;
