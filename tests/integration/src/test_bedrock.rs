//! Bedrock Runtime integration tests: raw payloads and Converse.

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use ruststack_sdk_bedrockruntime::input::{ConverseInput, InvokeModelInput};
    use ruststack_sdk_bedrockruntime::types::StopReason;
    use ruststack_sdk_core::AwsInput;
    use serde_json::json;

    use crate::{aws_config, canned_response, json_response};

    #[test]
    fn test_should_invoke_model_with_raw_body() {
        let payload = json!({"prompt": "Hello", "max_tokens": 10}).to_string();
        let input = InvokeModelInput::from_params(json!({
            "modelId": "anthropic.claude-3-haiku-20240307-v1:0",
            "contentType": "application/json",
            "accept": "application/json",
            "body": payload
        }))
        .unwrap();
        let request = input.build_http_request(&aws_config("us-east-1")).unwrap();

        assert_eq!(
            request.uri().to_string(),
            "https://bedrock-runtime.us-east-1.amazonaws.com/model/anthropic.claude-3-haiku-20240307-v1%3A0/invoke"
        );
        assert_eq!(request.headers()["content-type"], "application/json");
        assert_eq!(request.headers()["accept"], "application/json");
        assert_eq!(request.body().as_ref(), payload.as_bytes());

        let output = InvokeModelInput::parse_response(canned_response(
            StatusCode::OK,
            &[("content-type", "application/json")],
            r#"{"completion":"Hi"}"#,
        ))
        .unwrap();
        assert_eq!(output.body.as_ref(), br#"{"completion":"Hi"}"#);
        assert_eq!(output.content_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn test_should_converse() {
        let input = ConverseInput::from_params(json!({
            "modelId": "amazon.nova-lite-v1:0",
            "messages": [{"role": "user", "content": [{"text": "Say hi"}]}],
            "inferenceConfig": {"maxTokens": 16}
        }))
        .unwrap();
        let request = input.build_http_request(&aws_config("us-east-1")).unwrap();
        assert!(request.uri().path().ends_with("/converse"));

        let output = ConverseInput::parse_response(json_response(
            StatusCode::OK,
            &json!({
                "output": {"message": {"role": "assistant", "content": [{"text": "Hi!"}]}},
                "stopReason": "end_turn",
                "usage": {"inputTokens": 3, "outputTokens": 2, "totalTokens": 5},
                "metrics": {"latencyMs": 120}
            }),
        ))
        .unwrap();
        let message = output.output.unwrap().message.unwrap();
        assert_eq!(message.text(), "Hi!");
        assert_eq!(output.stop_reason, Some(StopReason::EndTurn));
        assert_eq!(output.usage.unwrap().total_tokens, Some(5));
    }
}
