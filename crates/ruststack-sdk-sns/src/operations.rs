//! SNS operation enum.

use std::fmt;

use bytes::Bytes;
use ruststack_sdk_core::{AwsInput, ClientConfig, ClientError};

use crate::input::{CreateTopicInput, DeleteTopicInput, PublishInput, SubscribeInput};

/// All supported SNS operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnsOperation {
    CreateTopic,
    DeleteTopic,
    Publish,
    Subscribe,
}

impl SnsOperation {
    /// All operations, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CreateTopic,
        Self::DeleteTopic,
        Self::Publish,
        Self::Subscribe,
    ];

    /// Returns the AWS operation name string, also the query `Action`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateTopic => "CreateTopic",
            Self::DeleteTopic => "DeleteTopic",
            Self::Publish => "Publish",
            Self::Subscribe => "Subscribe",
        }
    }

    /// Parse an operation name string into an `SnsOperation`.
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
            Self::CreateTopic => CreateTopicInput::from_params(params)?.build_http_request(config),
            Self::DeleteTopic => DeleteTopicInput::from_params(params)?.build_http_request(config),
            Self::Publish => PublishInput::from_params(params)?.build_http_request(config),
            Self::Subscribe => SubscribeInput::from_params(params)?.build_http_request(config),
        }
    }
}

impl fmt::Display for SnsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_round_trip_operation_names() {
        for op in SnsOperation::ALL {
            assert_eq!(SnsOperation::from_name(op.as_str()), Some(*op));
        }
        assert_eq!(SnsOperation::from_name("ListTopics"), None);
    }

    #[test]
    fn test_should_post_form_to_regional_endpoint() {
        let config = ClientConfig::builder().region("ap-southeast-2").build();
        let request = SnsOperation::DeleteTopic
            .build_http_request(
                json!({"TopicArn": "arn:aws:sns:ap-southeast-2:123456789012:t"}),
                &config,
            )
            .unwrap();
        assert_eq!(*request.method(), http::Method::POST);
        assert_eq!(
            request.uri().to_string(),
            "https://sns.ap-southeast-2.amazonaws.com/"
        );
        assert_eq!(
            request.headers()["content-type"],
            "application/x-www-form-urlencoded"
        );
        assert!(request.body().starts_with(b"Action=DeleteTopic&Version=2010-03-31"));
    }

    #[test]
    fn test_should_use_custom_endpoint() {
        let config = ClientConfig::builder()
            .endpoint("http://localhost:4566")
            .build();
        let request = SnsOperation::Publish
            .build_http_request(json!({"PhoneNumber": "+15555550100", "Message": "hi"}), &config)
            .unwrap();
        assert_eq!(request.uri().to_string(), "http://localhost:4566/");
    }
}
