//! Kinesis integration tests: JSON RPC requests and base64 record data.

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use http::StatusCode;
    use ruststack_sdk_core::AwsInput;
    use ruststack_sdk_kinesis::input::{GetRecordsInput, PutRecordsInput};
    use serde_json::json;

    use crate::{aws_config, json_response};

    #[test]
    fn test_should_post_put_records_batch() {
        let input = PutRecordsInput::from_params(json!({
            "StreamName": "clicks",
            "Records": [
                {"Data": STANDARD.encode("first"), "PartitionKey": "user-1"},
                {"Data": STANDARD.encode("second"), "PartitionKey": "user-2"}
            ]
        }))
        .unwrap();
        let request = input.build_http_request(&aws_config("us-east-2")).unwrap();

        assert_eq!(
            request.uri().to_string(),
            "https://kinesis.us-east-2.amazonaws.com/"
        );
        assert_eq!(request.headers()["x-amz-target"], "Kinesis_20131202.PutRecords");
        assert_eq!(
            request.headers()["content-type"],
            "application/x-amz-json-1.1"
        );

        let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
        assert_eq!(body["Records"][1]["Data"], STANDARD.encode("second"));
        assert_eq!(body["StreamName"], "clicks");
    }

    #[test]
    fn test_should_decode_record_data() {
        let output = GetRecordsInput::parse_response(json_response(
            StatusCode::OK,
            &json!({
                "Records": [{
                    "SequenceNumber": "49590338271490256608559692538361571095921575989136588898",
                    "ApproximateArrivalTimestamp": 1_700_000_000.5,
                    "Data": STANDARD.encode("hello"),
                    "PartitionKey": "user-1"
                }],
                "NextShardIterator": "AAAAAAAAAAH",
                "MillisBehindLatest": 0
            }),
        ))
        .unwrap();

        assert_eq!(output.records.len(), 1);
        assert_eq!(output.records[0].data.as_deref(), Some(&b"hello"[..]));
        assert_eq!(
            output.records[0]
                .approximate_arrival_timestamp
                .unwrap()
                .timestamp(),
            1_700_000_000
        );
        assert_eq!(output.millis_behind_latest, Some(0));
    }
}
