//! Bedrock Runtime input types.
//!
//! Members bound to the URI or to headers are skipped when the input is
//! serialized, so the serialized input is exactly the JSON body.

use std::collections::HashMap;

use bytes::Bytes;
use http::Method;
use ruststack_sdk_core::codec::text_blob;
use ruststack_sdk_core::input::{check_enum, json_body, required, validate_list, validate_opt};
use ruststack_sdk_core::uri::required_label;
use ruststack_sdk_core::{AwsInput, InputError, Request, Service, Validate};
use serde::{Deserialize, Serialize};

use crate::SERVICE;
use crate::output::{ConverseOutput, InvokeModelOutput};
use crate::types::{
    GuardrailConfiguration, InferenceConfiguration, Message, PerformanceConfigLatency,
    PerformanceConfiguration, SystemContentBlock, Trace,
};

/// Content type of an `InvokeModel` payload when the caller sets none.
const DEFAULT_PAYLOAD_CONTENT_TYPE: &str = "application/octet-stream";

// ---------------------------------------------------------------------------
// InvokeModel
// ---------------------------------------------------------------------------

/// Input for the `InvokeModel` operation.
///
/// The `body` is model-specific and sent verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InvokeModelInput {
    /// Request payload. Required.
    #[serde(default, with = "text_blob", skip_serializing_if = "Option::is_none")]
    pub body: Option<Bytes>,

    /// MIME type of `body`, sent as `Content-Type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Desired MIME type of the response, sent as `Accept`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,

    /// Model id, inference profile, or ARN. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Trace>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardrail_identifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardrail_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_config_latency: Option<PerformanceConfigLatency>,
}

impl Validate for InvokeModelInput {
    fn validate(&self) -> Result<(), InputError> {
        required("InvokeModelInput", "body", &self.body)?;
        required("InvokeModelInput", "modelId", &self.model_id)?;
        check_enum("InvokeModelInput", "trace", self.trace.as_ref())?;
        check_enum(
            "InvokeModelInput",
            "performanceConfigLatency",
            self.performance_config_latency.as_ref(),
        )
    }
}

impl AwsInput for InvokeModelInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "InvokeModel";
    type Output = InvokeModelOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let model_id = required_label("InvokeModelInput", "modelId", &self.model_id)?;

        let mut request = Request::new(Method::POST, format!("/model/{model_id}/invoke"));
        request.header_opt("Content-Type", self.content_type.as_deref())?;
        request.header_opt("Accept", self.accept.as_deref())?;
        request.header_opt("X-Amzn-Bedrock-Trace", self.trace.as_ref())?;
        request.header_opt(
            "X-Amzn-Bedrock-GuardrailIdentifier",
            self.guardrail_identifier.as_deref(),
        )?;
        request.header_opt(
            "X-Amzn-Bedrock-GuardrailVersion",
            self.guardrail_version.as_deref(),
        )?;
        request.header_opt(
            "X-Amzn-Bedrock-PerformanceConfig-Latency",
            self.performance_config_latency.as_ref(),
        )?;

        let body = required("InvokeModelInput", "body", &self.body)?;
        request.set_body(DEFAULT_PAYLOAD_CONTENT_TYPE, body.clone())?;
        Ok(request)
    }
}

// ---------------------------------------------------------------------------
// Converse
// ---------------------------------------------------------------------------

/// Input for the `Converse` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConverseInput {
    /// URI label. Required.
    #[serde(default, skip_serializing)]
    pub model_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub system: Vec<SystemContentBlock>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inference_config: Option<InferenceConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardrail_config: Option<GuardrailConfiguration>,

    /// Model-specific parameters passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_model_request_fields: Option<serde_json::Value>,

    /// JSON pointers of model-specific response fields to return.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_model_response_field_paths: Vec<String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub request_metadata: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_config: Option<PerformanceConfiguration>,
}

impl Validate for ConverseInput {
    fn validate(&self) -> Result<(), InputError> {
        required("ConverseInput", "modelId", &self.model_id)?;
        validate_list(&self.messages)?;
        validate_list(&self.system)?;
        validate_opt(self.inference_config.as_ref())?;
        validate_opt(self.guardrail_config.as_ref())?;
        validate_opt(self.performance_config.as_ref())
    }
}

impl AwsInput for ConverseInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "Converse";
    type Output = ConverseOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let model_id = required_label("ConverseInput", "modelId", &self.model_id)?;

        let mut request = Request::new(Method::POST, format!("/model/{model_id}/converse"));
        request.set_body(
            Self::SERVICE.protocol.content_type(),
            json_body(Self::OPERATION, self)?,
        )?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{ContentBlock, ConversationRole};

    #[test]
    fn test_should_build_invoke_model_request() {
        let input = InvokeModelInput::from_params(json!({
            "modelId": "anthropic.claude-3-haiku-20240307-v1:0",
            "body": "{\"prompt\":\"hi\"}",
            "contentType": "application/json",
            "accept": "application/json",
            "trace": "ENABLED",
            "performanceConfigLatency": "optimized"
        }))
        .unwrap();

        let request = input.request().unwrap();
        assert_eq!(*request.method(), Method::POST);
        assert_eq!(
            request.path(),
            "/model/anthropic.claude-3-haiku-20240307-v1%3A0/invoke"
        );
        assert_eq!(request.body().as_ref(), br#"{"prompt":"hi"}"#);
        assert_eq!(request.header_str("content-type"), Some("application/json"));
        assert_eq!(request.header_str("accept"), Some("application/json"));
        assert_eq!(request.header_str("x-amzn-bedrock-trace"), Some("ENABLED"));
        assert_eq!(
            request.header_str("x-amzn-bedrock-performanceconfig-latency"),
            Some("optimized")
        );
        assert!(request.header_str("x-amzn-bedrock-guardrailidentifier").is_none());
    }

    #[test]
    fn test_should_default_payload_content_type() {
        let input = InvokeModelInput {
            model_id: Some("m".to_owned()),
            body: Some(Bytes::from_static(b"\x00\x01")),
            ..Default::default()
        };
        let request = input.request().unwrap();
        assert_eq!(
            request.header_str("content-type"),
            Some("application/octet-stream")
        );
    }

    #[test]
    fn test_should_reject_invoke_model_without_body() {
        let input = InvokeModelInput {
            model_id: Some("m".to_owned()),
            ..Default::default()
        };
        assert!(matches!(
            input.request(),
            Err(InputError::MissingRequiredField {
                shape: "InvokeModelInput",
                field: "body"
            })
        ));
    }

    #[test]
    fn test_should_reject_unknown_trace_value() {
        let input = InvokeModelInput::from_params(json!({
            "modelId": "m",
            "body": "{}",
            "trace": "VERBOSE"
        }))
        .unwrap();
        assert!(matches!(
            input.request(),
            Err(InputError::InvalidEnumValue { field: "trace", .. })
        ));
    }

    #[test]
    fn test_should_build_converse_request() {
        let input = ConverseInput::from_params(json!({
            "modelId": "arn:aws:bedrock:us-east-1:123456789012:inference-profile/us.model",
            "messages": [{"role": "user", "content": [{"text": "Hello"}]}],
            "system": [{"text": "Answer in one word."}],
            "inferenceConfig": {"maxTokens": 64, "temperature": 0.5},
            "additionalModelRequestFields": {"top_k": 5}
        }))
        .unwrap();

        let request = input.request().unwrap();
        assert_eq!(
            request.path(),
            "/model/arn%3Aaws%3Abedrock%3Aus-east-1%3A123456789012%3Ainference-profile%2Fus.model/converse"
        );
        assert_eq!(request.header_str("content-type"), Some("application/json"));

        let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
        assert_eq!(
            body,
            json!({
                "messages": [{"role": "user", "content": [{"text": "Hello"}]}],
                "system": [{"text": "Answer in one word."}],
                "inferenceConfig": {"maxTokens": 64, "temperature": 0.5},
                "additionalModelRequestFields": {"top_k": 5}
            })
        );
    }

    #[test]
    fn test_should_reject_invalid_content_union_in_params() {
        let err = ConverseInput::from_params(json!({
            "modelId": "m",
            "messages": [{"role": "user", "content": [{"text": "a", "image": {"format": "png"}}]}]
        }))
        .unwrap_err();
        assert!(matches!(err, InputError::InvalidParameters { .. }));
        assert!(err.to_string().contains("exactly one member"));
    }

    #[test]
    fn test_should_validate_converse_messages() {
        let input = ConverseInput {
            model_id: Some("m".to_owned()),
            messages: vec![Message {
                role: None,
                content: vec![ContentBlock::Text("hi".to_owned())],
            }],
            ..Default::default()
        };
        assert!(matches!(
            input.request(),
            Err(InputError::MissingRequiredField {
                shape: "Message",
                field: "role"
            })
        ));

        let input = ConverseInput {
            model_id: Some("m".to_owned()),
            messages: vec![Message {
                role: Some(ConversationRole::User),
                content: vec![ContentBlock::Unknown("video".to_owned())],
            }],
            ..Default::default()
        };
        assert!(matches!(
            input.request(),
            Err(InputError::InvalidUnion {
                shape: "ContentBlock",
                ..
            })
        ));
    }

    #[test]
    fn test_should_require_model_id() {
        assert!(matches!(
            ConverseInput::default().request(),
            Err(InputError::MissingRequiredField {
                field: "modelId",
                ..
            })
        ));
    }
}
