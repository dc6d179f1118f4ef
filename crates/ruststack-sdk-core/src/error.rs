//! Error types shared by every service model.
//!
//! Three layers are distinguished:
//!
//! - [`InputError`]: the input shape could not be turned into a request
//!   (missing required member, value outside an enum, malformed parameters).
//! - [`ServiceError`]: the service answered with an error document.
//! - [`ClientError`]: umbrella type returned by request building and
//!   response parsing.

use std::fmt;

/// Errors raised while validating or serializing an input shape.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A member marked as required in the API model was not set.
    #[error("missing required field \"{field}\" on {shape}")]
    MissingRequiredField {
        /// Name of the shape that owns the member.
        shape: &'static str,
        /// Wire name of the member.
        field: &'static str,
    },

    /// An enum member holds a value that is not in its allowed set.
    #[error("invalid value \"{value}\" for {shape}.{field}, expected one of {expected:?}")]
    InvalidEnumValue {
        /// Name of the shape that owns the member.
        shape: &'static str,
        /// Wire name of the member.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// The allowed values.
        expected: &'static [&'static str],
    },

    /// The named-parameter map could not be mapped onto the input shape.
    #[error("invalid parameters for {shape}: {source}")]
    InvalidParameters {
        /// Name of the input shape.
        shape: &'static str,
        /// The underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// A union shape must set exactly one of its members.
    #[error("{shape} must set exactly one member, found {found:?}")]
    InvalidUnion {
        /// Name of the union shape.
        shape: &'static str,
        /// Wire names of the members that were set.
        found: Vec<String>,
    },

    /// A header name or value contains bytes HTTP does not allow.
    #[error("invalid header {name}: {value:?}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Offending value.
        value: String,
    },

    /// The body could not be encoded.
    #[error("failed to serialize {shape}: {message}")]
    Serialization {
        /// Name of the input shape.
        shape: &'static str,
        /// Encoder message.
        message: String,
    },
}

impl InputError {
    /// Shorthand for [`InputError::MissingRequiredField`].
    #[must_use]
    pub fn missing(shape: &'static str, field: &'static str) -> Self {
        Self::MissingRequiredField { shape, field }
    }

    /// Build a [`InputError::Serialization`] from any displayable error.
    #[must_use]
    pub fn serialization(shape: &'static str, err: impl fmt::Display) -> Self {
        Self::Serialization {
            shape,
            message: err.to_string(),
        }
    }
}

/// An error document returned by an AWS service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code} ({status}): {message}")]
pub struct ServiceError {
    /// The short error code, e.g. `ResourceNotFoundException`.
    pub code: String,
    /// Human readable message, empty when the service sent none.
    pub message: String,
    /// The request id reported by the service.
    pub request_id: Option<String>,
    /// HTTP status of the response.
    pub status: http::StatusCode,
}

impl ServiceError {
    /// Create a service error with the given code and message.
    #[must_use]
    pub fn new(status: http::StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            request_id: None,
            status,
        }
    }

    /// Attach a request id.
    #[must_use]
    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }
}

/// Errors returned when building requests or parsing responses.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The input shape was rejected before anything was sent.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The service returned an error document.
    #[error("service error: {0}")]
    Service(#[from] ServiceError),

    /// The `http` crate refused the assembled request.
    #[error("failed to build HTTP request: {0}")]
    Http(#[from] http::Error),

    /// The configured endpoint or region cannot form a URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A successful response could not be decoded into the output shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Build a [`ClientError::InvalidResponse`] from any displayable error.
    #[must_use]
    pub fn invalid_response(err: impl fmt::Display) -> Self {
        Self::InvalidResponse(err.to_string())
    }

    /// Returns the service error code, if this is a service error.
    #[must_use]
    pub fn service_code(&self) -> Option<&str> {
        match self {
            Self::Service(e) => Some(&e.code),
            _ => None,
        }
    }
}

/// Convenience result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_missing_field() {
        let err = InputError::missing("PutRecordInput", "StreamName");
        assert_eq!(
            err.to_string(),
            "missing required field \"StreamName\" on PutRecordInput"
        );
    }

    #[test]
    fn test_should_format_service_error() {
        let err = ServiceError::new(
            http::StatusCode::BAD_REQUEST,
            "ResourceNotFoundException",
            "Stream foo not found",
        );
        assert_eq!(
            err.to_string(),
            "ResourceNotFoundException (400 Bad Request): Stream foo not found"
        );
    }

    #[test]
    fn test_should_expose_service_code() {
        let err: ClientError =
            ServiceError::new(http::StatusCode::NOT_FOUND, "NoSuchKey", "").into();
        assert_eq!(err.service_code(), Some("NoSuchKey"));

        let err: ClientError = InputError::missing("X", "Y").into();
        assert!(err.service_code().is_none());
    }
}
