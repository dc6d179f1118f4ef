//! Bedrock Runtime output types.

use bytes::Bytes;
use ruststack_sdk_core::{ClientError, FromResponse, Response, json_output};
use serde::{Deserialize, Serialize};

use crate::types::{
    ConverseMetrics, ConverseOutputContent, PerformanceConfigLatency, PerformanceConfiguration,
    StopReason, TokenUsage,
};

/// Output for the `InvokeModel` operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvokeModelOutput {
    /// Model-specific response payload.
    pub body: Bytes,

    /// MIME type of `body`.
    pub content_type: Option<String>,

    pub performance_config_latency: Option<PerformanceConfigLatency>,
}

impl InvokeModelOutput {
    /// Decode the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidResponse`] when the payload is not JSON.
    pub fn json_body(&self) -> Result<serde_json::Value, ClientError> {
        serde_json::from_slice(&self.body).map_err(ClientError::invalid_response)
    }
}

impl FromResponse for InvokeModelOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        let content_type = response.header_string("content-type");
        let performance_config_latency =
            response.header_enum("x-amzn-bedrock-performanceconfig-latency");
        Ok(Self {
            body: response.into_body(),
            content_type,
            performance_config_latency,
        })
    }
}

/// Output for the `Converse` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<ConverseOutputContent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<StopReason>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ConverseMetrics>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_model_response_fields: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_config: Option<PerformanceConfiguration>,
}

json_output!(ConverseOutput);

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use ruststack_sdk_core::AwsInput;

    use super::*;
    use crate::input::{ConverseInput, InvokeModelInput};
    use crate::types::{ContentBlock, ConversationRole};

    #[test]
    fn test_should_parse_invoke_model_output() {
        let response = http::Response::builder()
            .status(StatusCode::OK)
            .header("content-type", "application/json")
            .header("x-amzn-bedrock-performanceconfig-latency", "standard")
            .body(Bytes::from_static(br#"{"completion":"Hi","stop_reason":"stop"}"#))
            .unwrap();

        let output = InvokeModelInput::parse_response(response).unwrap();
        assert_eq!(output.content_type.as_deref(), Some("application/json"));
        assert_eq!(
            output.performance_config_latency,
            Some(PerformanceConfigLatency::Standard)
        );
        assert_eq!(output.json_body().unwrap()["completion"], "Hi");
    }

    #[test]
    fn test_should_parse_converse_output() {
        let response = http::Response::builder()
            .status(StatusCode::OK)
            .body(Bytes::from_static(
                br#"{
                    "output": {"message": {"role": "assistant", "content": [{"text": "Paris"}]}},
                    "stopReason": "end_turn",
                    "usage": {"inputTokens": 12, "outputTokens": 1, "totalTokens": 13},
                    "metrics": {"latencyMs": 230}
                }"#,
            ))
            .unwrap();

        let output = ConverseInput::parse_response(response).unwrap();
        let message = output.output.unwrap().message.unwrap();
        assert_eq!(message.role, Some(ConversationRole::Assistant));
        assert_eq!(message.content, vec![ContentBlock::Text("Paris".to_owned())]);
        assert_eq!(output.stop_reason, Some(StopReason::EndTurn));
        assert_eq!(output.usage.unwrap().total_tokens, Some(13));
        assert_eq!(output.metrics.unwrap().latency_ms, Some(230));
    }

    #[test]
    fn test_should_decode_error_type_header() {
        let response = http::Response::builder()
            .status(StatusCode::TOO_MANY_REQUESTS)
            .header("x-amzn-ErrorType", "ThrottlingException:http://internal.amazon.com/coral/")
            .header("x-amzn-RequestId", "b-1")
            .body(Bytes::from_static(br#"{"message":"Too many requests, please wait."}"#))
            .unwrap();

        match ConverseInput::parse_response(response).unwrap_err() {
            ClientError::Service(e) => {
                assert_eq!(e.code, "ThrottlingException");
                assert_eq!(e.message, "Too many requests, please wait.");
                assert_eq!(e.request_id.as_deref(), Some("b-1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
