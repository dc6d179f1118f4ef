//! Athena integration tests: query lifecycle over awsJson1_1.

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use ruststack_sdk_athena::input::{
        GetQueryExecutionInput, GetQueryResultsInput, StartQueryExecutionInput,
    };
    use ruststack_sdk_athena::types::QueryExecutionState;
    use ruststack_sdk_core::AwsInput;
    use serde_json::json;

    use crate::{aws_config, json_response, local_config};

    #[test]
    fn test_should_run_query_lifecycle() {
        let start = StartQueryExecutionInput::from_params(json!({
            "QueryString": "SELECT 1",
            "QueryExecutionContext": {"Database": "analytics"},
            "ResultConfiguration": {"OutputLocation": "s3://results/"}
        }))
        .unwrap();
        let request = start.build_http_request(&aws_config("us-east-1")).unwrap();
        assert_eq!(
            request.headers()["x-amz-target"],
            "AmazonAthena.StartQueryExecution"
        );
        let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
        assert!(body["ClientRequestToken"].is_string());
        assert_eq!(body["QueryExecutionContext"]["Database"], "analytics");

        let started = StartQueryExecutionInput::parse_response(json_response(
            StatusCode::OK,
            &json!({"QueryExecutionId": "q-1"}),
        ))
        .unwrap();
        let id = started.query_execution_id.unwrap();

        let status = GetQueryExecutionInput::parse_response(json_response(
            StatusCode::OK,
            &json!({"QueryExecution": {
                "QueryExecutionId": id,
                "Query": "SELECT 1",
                "Status": {"State": "SUCCEEDED", "SubmissionDateTime": 1_700_000_000.0}
            }}),
        ))
        .unwrap();
        let state = status.query_execution.unwrap().status.unwrap().state;
        assert_eq!(state, Some(QueryExecutionState::Succeeded));

        let results = GetQueryResultsInput::parse_response(json_response(
            StatusCode::OK,
            &json!({"ResultSet": {"Rows": [
                {"Data": [{"VarCharValue": "_col0"}]},
                {"Data": [{"VarCharValue": "1"}]}
            ]}}),
        ))
        .unwrap();
        let rows = results.result_set.unwrap().rows;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].data[0].var_char_value.as_deref(), Some("1"));
    }

    #[test]
    fn test_should_target_local_endpoint() {
        let input = GetQueryResultsInput::from_params(json!({
            "QueryExecutionId": "q-1",
            "MaxResults": 10
        }))
        .unwrap();
        let request = input.build_http_request(&local_config()).unwrap();
        assert!(request.uri().to_string().ends_with('/'));
        assert_eq!(request.headers()["x-amz-target"], "AmazonAthena.GetQueryResults");
    }
}
