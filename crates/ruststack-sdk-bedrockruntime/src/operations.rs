//! Bedrock Runtime operation enum.

use std::fmt;

use bytes::Bytes;
use ruststack_sdk_core::{AwsInput, ClientConfig, ClientError};

use crate::input::{ConverseInput, InvokeModelInput};

/// All supported Bedrock Runtime operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedrockRuntimeOperation {
    /// Run inference with a model-specific payload.
    InvokeModel,
    /// Run inference with the model-neutral message API.
    Converse,
}

impl BedrockRuntimeOperation {
    /// All operations, in declaration order.
    pub const ALL: &'static [Self] = &[Self::InvokeModel, Self::Converse];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvokeModel => "InvokeModel",
            Self::Converse => "Converse",
        }
    }

    /// Parse an operation name string into a `BedrockRuntimeOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// Build the HTTP request for this operation from a named-parameter map.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the parameters do not map onto the input
    /// shape, fail validation, or the endpoint cannot be resolved.
    pub fn build_http_request(
        self,
        params: serde_json::Value,
        config: &ClientConfig,
    ) -> Result<http::Request<Bytes>, ClientError> {
        match self {
            Self::InvokeModel => InvokeModelInput::from_params(params)?.build_http_request(config),
            Self::Converse => ConverseInput::from_params(params)?.build_http_request(config),
        }
    }
}

impl fmt::Display for BedrockRuntimeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
