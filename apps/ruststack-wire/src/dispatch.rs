//! Operation lookup across the service crates.

use anyhow::{Result, anyhow};
use bytes::Bytes;
use clap::ValueEnum;
use ruststack_sdk_athena::AthenaOperation;
use ruststack_sdk_bedrockruntime::BedrockRuntimeOperation;
use ruststack_sdk_core::ClientConfig;
use ruststack_sdk_kinesis::KinesisOperation;
use ruststack_sdk_location::LocationOperation;
use ruststack_sdk_s3::S3Operation;
use ruststack_sdk_sns::SnsOperation;

/// Services the tool can build requests for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceName {
    /// Amazon S3 (restXml).
    S3,
    /// Kinesis Data Streams (awsJson1_1).
    Kinesis,
    /// Amazon Athena (awsJson1_1).
    Athena,
    /// Bedrock Runtime (restJson1).
    BedrockRuntime,
    /// Amazon Location Service (restJson1).
    Location,
    /// Amazon SNS (awsQuery).
    Sns,
}

impl ServiceName {
    /// Operation names supported for this service.
    #[must_use]
    pub fn operations(self) -> Vec<&'static str> {
        match self {
            Self::S3 => S3Operation::ALL.iter().map(S3Operation::as_str).collect(),
            Self::Kinesis => KinesisOperation::ALL.iter().map(KinesisOperation::as_str).collect(),
            Self::Athena => AthenaOperation::ALL.iter().map(AthenaOperation::as_str).collect(),
            Self::BedrockRuntime => BedrockRuntimeOperation::ALL
                .iter()
                .map(BedrockRuntimeOperation::as_str)
                .collect(),
            Self::Location => LocationOperation::ALL
                .iter()
                .map(LocationOperation::as_str)
                .collect(),
            Self::Sns => SnsOperation::ALL.iter().map(SnsOperation::as_str).collect(),
        }
    }

    /// Build the HTTP request for `operation` from a named-parameter map.
    ///
    /// # Errors
    ///
    /// Fails for an unknown operation name, or when the parameters are
    /// rejected by the input shape.
    pub fn build_request(
        self,
        operation: &str,
        params: serde_json::Value,
        config: &ClientConfig,
    ) -> Result<http::Request<Bytes>> {
        let unknown = || anyhow!("unknown operation {operation:?} for {self:?}");
        let request = match self {
            Self::S3 => S3Operation::from_name(operation)
                .ok_or_else(unknown)?
                .build_http_request(params, config)?,
            Self::Kinesis => KinesisOperation::from_name(operation)
                .ok_or_else(unknown)?
                .build_http_request(params, config)?,
            Self::Athena => AthenaOperation::from_name(operation)
                .ok_or_else(unknown)?
                .build_http_request(params, config)?,
            Self::BedrockRuntime => BedrockRuntimeOperation::from_name(operation)
                .ok_or_else(unknown)?
                .build_http_request(params, config)?,
            Self::Location => LocationOperation::from_name(operation)
                .ok_or_else(unknown)?
                .build_http_request(params, config)?,
            Self::Sns => SnsOperation::from_name(operation)
                .ok_or_else(unknown)?
                .build_http_request(params, config)?,
        };
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_list_operations_per_service() {
        assert!(ServiceName::S3.operations().contains(&"PutObject"));
        assert!(ServiceName::Sns.operations().contains(&"Publish"));
        assert_eq!(ServiceName::Sns.operations().len(), 4);
    }

    #[test]
    fn test_should_reject_unknown_operation() {
        let err = ServiceName::Kinesis
            .build_request("PutObject", json!({}), &ClientConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("unknown operation"));
    }

    #[test]
    fn test_should_build_kinesis_request() {
        let request = ServiceName::Kinesis
            .build_request(
                "CreateStream",
                json!({"StreamName": "events", "ShardCount": 1}),
                &ClientConfig::default(),
            )
            .unwrap();
        assert_eq!(
            request.headers()["x-amz-target"],
            "Kinesis_20131202.CreateStream"
        );
    }
}
