//! SNS output types.
//!
//! Each output is read from the `<{Op}Result>` child of the `<{Op}Response>`
//! document. A response without the result element decodes to the default.

use quick_xml::Reader;
use ruststack_sdk_core::{ClientError, FromResponse, Response};
use ruststack_sdk_xml::deserialize::{for_each_child, read_text_content, skip_element};
use ruststack_sdk_xml::{XmlDeserialize, XmlError, from_xml_child};

/// Output for the `CreateTopic` operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTopicOutput {
    pub topic_arn: Option<String>,
}

impl XmlDeserialize for CreateTopicOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        for_each_child(reader, "CreateTopicResult", |reader, name| {
            match name {
                "TopicArn" => out.topic_arn = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl FromResponse for CreateTopicOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        Ok(from_xml_child(response.body(), "CreateTopicResult")?)
    }
}

/// Output for the `Publish` operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishOutput {
    pub message_id: Option<String>,
    /// FIFO topics only.
    pub sequence_number: Option<String>,
}

impl XmlDeserialize for PublishOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        for_each_child(reader, "PublishResult", |reader, name| {
            match name {
                "MessageId" => out.message_id = Some(read_text_content(reader)?),
                "SequenceNumber" => out.sequence_number = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl FromResponse for PublishOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        Ok(from_xml_child(response.body(), "PublishResult")?)
    }
}

/// Output for the `Subscribe` operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscribeOutput {
    /// `pending confirmation` until the endpoint confirms, unless
    /// `ReturnSubscriptionArn` was set.
    pub subscription_arn: Option<String>,
}

impl XmlDeserialize for SubscribeOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        for_each_child(reader, "SubscribeResult", |reader, name| {
            match name {
                "SubscriptionArn" => out.subscription_arn = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl FromResponse for SubscribeOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        Ok(from_xml_child(response.body(), "SubscribeResult")?)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::StatusCode;
    use ruststack_sdk_core::AwsInput;

    use super::*;
    use crate::input::{CreateTopicInput, DeleteTopicInput, PublishInput, SubscribeInput};

    fn response(status: StatusCode, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn test_should_parse_create_topic_result() {
        let output = CreateTopicInput::parse_response(response(
            StatusCode::OK,
            r#"<CreateTopicResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
                <CreateTopicResult>
                    <TopicArn>arn:aws:sns:us-east-1:123456789012:alerts</TopicArn>
                </CreateTopicResult>
                <ResponseMetadata><RequestId>a8dec8b3-33a4-11df-8963-01868b7c937a</RequestId></ResponseMetadata>
            </CreateTopicResponse>"#,
        ))
        .unwrap();
        assert_eq!(
            output.topic_arn.as_deref(),
            Some("arn:aws:sns:us-east-1:123456789012:alerts")
        );
    }

    #[test]
    fn test_should_parse_publish_result() {
        let output = PublishInput::parse_response(response(
            StatusCode::OK,
            "<PublishResponse><PublishResult><MessageId>567910cd-659e-55d4-8ccb-5aaf14679dc0</MessageId>\
             <SequenceNumber>10000000000000003000</SequenceNumber></PublishResult></PublishResponse>",
        ))
        .unwrap();
        assert_eq!(
            output.message_id.as_deref(),
            Some("567910cd-659e-55d4-8ccb-5aaf14679dc0")
        );
        assert_eq!(output.sequence_number.as_deref(), Some("10000000000000003000"));
    }

    #[test]
    fn test_should_keep_pending_subscription_arn() {
        let output = SubscribeInput::parse_response(response(
            StatusCode::OK,
            "<SubscribeResponse><SubscribeResult><SubscriptionArn>pending confirmation</SubscriptionArn></SubscribeResult></SubscribeResponse>",
        ))
        .unwrap();
        assert_eq!(output.subscription_arn.as_deref(), Some("pending confirmation"));
    }

    #[test]
    fn test_should_accept_delete_topic_metadata_only() {
        DeleteTopicInput::parse_response(response(
            StatusCode::OK,
            "<DeleteTopicResponse><ResponseMetadata><RequestId>r</RequestId></ResponseMetadata></DeleteTopicResponse>",
        ))
        .unwrap();
    }

    #[test]
    fn test_should_decode_query_error() {
        let err = PublishInput::parse_response(response(
            StatusCode::NOT_FOUND,
            r#"<ErrorResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
                <Error><Type>Sender</Type><Code>NotFound</Code><Message>Topic does not exist</Message></Error>
                <RequestId>9dd01905-5012-5f99-8663-4b3ecd0dfaef</RequestId>
            </ErrorResponse>"#,
        ))
        .unwrap_err();
        match err {
            ClientError::Service(e) => {
                assert_eq!(e.code, "NotFound");
                assert_eq!(e.message, "Topic does not exist");
                assert_eq!(
                    e.request_id.as_deref(),
                    Some("9dd01905-5012-5f99-8663-4b3ecd0dfaef")
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
