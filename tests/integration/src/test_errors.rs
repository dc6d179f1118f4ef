//! Error handling across protocols: validation before any request is
//! built, and service errors decoded from each wire format.

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use ruststack_sdk_athena::input::GetQueryExecutionInput;
    use ruststack_sdk_bedrockruntime::input::ConverseInput;
    use ruststack_sdk_core::{AwsInput, ClientError, InputError};
    use ruststack_sdk_kinesis::input::PutRecordInput;
    use ruststack_sdk_s3::input::PutObjectInput;
    use ruststack_sdk_sns::input::SubscribeInput;
    use serde_json::json;

    use crate::{aws_config, canned_response, json_response};

    #[test]
    fn test_should_fail_validation_before_building() {
        let input = SubscribeInput::from_params(json!({"TopicArn": "arn:aws:sns:us-east-1:1:t"}))
            .unwrap();
        let err = input.build_http_request(&aws_config("us-east-1")).unwrap_err();
        assert!(matches!(
            err,
            ClientError::Input(InputError::MissingRequiredField {
                field: "Protocol",
                ..
            })
        ));
    }

    #[test]
    fn test_should_reject_unknown_enum_value() {
        let input = PutObjectInput::from_params(json!({
            "Bucket": "b",
            "Key": "k",
            "StorageClass": "COLD"
        }))
        .unwrap();
        assert!(matches!(
            input.request(),
            Err(InputError::InvalidEnumValue {
                field: "StorageClass",
                ..
            })
        ));
    }

    #[test]
    fn test_should_reject_misspelled_parameter() {
        let err = PutRecordInput::from_params(json!({"streamName": "s"})).unwrap_err();
        assert!(matches!(err, InputError::InvalidParameters { .. }));
    }

    #[test]
    fn test_should_decode_json_rpc_error() {
        let err = PutRecordInput::parse_response(json_response(
            StatusCode::BAD_REQUEST,
            &json!({
                "__type": "com.amazonaws.kinesis#ResourceNotFoundException",
                "message": "Stream s under account 123456789012 not found."
            }),
        ))
        .unwrap_err();
        assert_eq!(err.service_code(), Some("ResourceNotFoundException"));
    }

    #[test]
    fn test_should_decode_athena_error_code() {
        let err = GetQueryExecutionInput::parse_response(json_response(
            StatusCode::BAD_REQUEST,
            &json!({"__type": "InvalidRequestException", "Message": "QueryExecution q was not found"}),
        ))
        .unwrap_err();
        match err {
            ClientError::Service(e) => {
                assert_eq!(e.code, "InvalidRequestException");
                assert_eq!(e.message, "QueryExecution q was not found");
                assert_eq!(e.status, StatusCode::BAD_REQUEST);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_should_decode_rest_json_error_from_header() {
        let err = ConverseInput::parse_response(canned_response(
            StatusCode::TOO_MANY_REQUESTS,
            &[
                ("x-amzn-errortype", "ThrottlingException:http://internal.amazon.com/"),
                ("x-amzn-requestid", "req-7"),
            ],
            r#"{"message":"Too many requests, please wait before trying again."}"#,
        ))
        .unwrap_err();
        match err {
            ClientError::Service(e) => {
                assert_eq!(e.code, "ThrottlingException");
                assert_eq!(e.request_id.as_deref(), Some("req-7"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_should_fall_back_to_status_reason() {
        let err = SubscribeInput::parse_response(canned_response(
            StatusCode::SERVICE_UNAVAILABLE,
            &[],
            "",
        ))
        .unwrap_err();
        assert_eq!(err.service_code(), Some("ServiceUnavailable"));
    }
}
