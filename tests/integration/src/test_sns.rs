//! SNS integration tests: awsQuery form bodies and wrapped XML results.

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use ruststack_sdk_core::AwsInput;
    use ruststack_sdk_sns::input::{CreateTopicInput, PublishInput};
    use serde_json::json;

    use crate::{aws_config, canned_response, form_fields};

    #[test]
    fn test_should_create_topic_and_publish() {
        let config = aws_config("eu-central-1");

        let create = CreateTopicInput::from_params(json!({
            "Name": "alerts",
            "Attributes": {"DisplayName": "Alerts"},
            "Tags": [{"Key": "env", "Value": "prod"}]
        }))
        .unwrap();
        let request = create.build_http_request(&config).unwrap();
        assert_eq!(
            request.uri().to_string(),
            "https://sns.eu-central-1.amazonaws.com/"
        );
        let fields = form_fields(request.body());
        assert!(fields.contains(&("Action".to_owned(), "CreateTopic".to_owned())));
        assert!(fields.contains(&("Tags.member.1.Key".to_owned(), "env".to_owned())));

        let created = CreateTopicInput::parse_response(canned_response(
            StatusCode::OK,
            &[("content-type", "text/xml")],
            "<CreateTopicResponse><CreateTopicResult>\
             <TopicArn>arn:aws:sns:eu-central-1:123456789012:alerts</TopicArn>\
             </CreateTopicResult></CreateTopicResponse>",
        ))
        .unwrap();
        let topic_arn = created.topic_arn.unwrap();

        let publish = PublishInput::from_params(json!({
            "TopicArn": topic_arn,
            "Message": "{\"default\":\"down\"}",
            "MessageStructure": "json",
            "MessageAttributes": {"level": {"DataType": "String", "StringValue": "critical"}}
        }))
        .unwrap();
        let request = publish.build_http_request(&config).unwrap();
        let fields = form_fields(request.body());
        assert!(fields.contains(&(
            "TopicArn".to_owned(),
            "arn:aws:sns:eu-central-1:123456789012:alerts".to_owned()
        )));
        assert!(fields.contains(&("Message".to_owned(), "{\"default\":\"down\"}".to_owned())));
        assert!(fields.contains(&(
            "MessageAttributes.entry.1.Value.StringValue".to_owned(),
            "critical".to_owned()
        )));

        let published = PublishInput::parse_response(canned_response(
            StatusCode::OK,
            &[],
            "<PublishResponse><PublishResult><MessageId>m-1</MessageId></PublishResult></PublishResponse>",
        ))
        .unwrap();
        assert_eq!(published.message_id.as_deref(), Some("m-1"));
    }
}
