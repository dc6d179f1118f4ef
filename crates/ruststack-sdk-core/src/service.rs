//! Static service metadata.

use std::fmt;

use crate::error::ServiceError;
use crate::response::Response;

/// Wire protocol spoken by a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// REST bindings with XML payloads (S3).
    RestXml,
    /// REST bindings with JSON payloads.
    RestJson1,
    /// `POST /` with `X-Amz-Target` and a JSON 1.1 body.
    AwsJson1_1,
    /// `POST /` with a form-encoded `Action`/`Version` body and XML responses.
    AwsQuery,
}

impl Protocol {
    /// Returns the protocol name as it appears in API models.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RestXml => "restXml",
            Self::RestJson1 => "restJson1",
            Self::AwsJson1_1 => "awsJson1_1",
            Self::AwsQuery => "awsQuery",
        }
    }

    /// Content type of request bodies for this protocol.
    #[must_use]
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::RestXml => "application/xml",
            Self::RestJson1 => "application/json",
            Self::AwsJson1_1 => "application/x-amz-json-1.1",
            Self::AwsQuery => "application/x-www-form-urlencoded",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of an AWS service, one constant per service crate.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    /// Display name, e.g. `Kinesis`.
    pub name: &'static str,
    /// First DNS label of the regional endpoint, e.g. `kinesis`.
    pub endpoint_prefix: &'static str,
    /// SigV4 signing name.
    pub signing_name: &'static str,
    /// Suffix of the `AWS_ENDPOINT_URL_<ID>` override variable.
    pub env_id: &'static str,
    /// Wire protocol.
    pub protocol: Protocol,
    /// API version string, sent as `Version` by the query protocol.
    pub api_version: &'static str,
    /// `X-Amz-Target` prefix for JSON RPC services.
    pub target_prefix: Option<&'static str>,
    /// Decoder for error documents returned by this service.
    pub error_parser: fn(&Response) -> ServiceError,
}

impl Service {
    /// `X-Amz-Target` value for the given operation.
    ///
    /// Falls back to the bare operation name for services without a prefix.
    #[must_use]
    pub fn target(&self, operation: &str) -> String {
        match self.target_prefix {
            Some(prefix) => format!("{prefix}.{operation}"),
            None => operation.to_owned(),
        }
    }
}
