//! SNS input types.
//!
//! Inputs deserialize from the named-parameter map (`PascalCase` member
//! names, unknown names rejected) and encode as `awsQuery` form bodies.

use std::collections::HashMap;

use ruststack_sdk_core::input::{required, validate_list, validate_map};
use ruststack_sdk_core::{AwsInput, InputError, QueryWriter, Request, Service, Validate};
use serde::Deserialize;

use crate::SERVICE;
use crate::output::{CreateTopicOutput, PublishOutput, SubscribeOutput};
use crate::types::{MessageAttributeValue, Tag};

fn query_writer(action: &str) -> QueryWriter {
    QueryWriter::new(action, SERVICE.api_version)
}

fn form_request(writer: QueryWriter) -> Result<Request, InputError> {
    Request::form(&SERVICE, writer.finish())
}

/// Write a `String -> String` attribute map as `{key}.entry.N.key/value`.
fn write_attributes(writer: &mut QueryWriter, key: &str, attributes: &HashMap<String, String>) {
    writer.map(key, attributes, "key", "value", |w, prefix, value| {
        w.push(prefix, value.clone());
    });
}

/// Input for the `CreateTopic` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreateTopicInput {
    /// Topic name. FIFO topics end in `.fifo`. Required.
    #[serde(default)]
    pub name: Option<String>,

    /// Topic attributes such as `DisplayName`, `FifoTopic` or `Policy`.
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub data_protection_policy: Option<String>,
}

impl Validate for CreateTopicInput {
    fn validate(&self) -> Result<(), InputError> {
        required("CreateTopicInput", "Name", &self.name)?;
        validate_list(&self.tags)
    }
}

impl AwsInput for CreateTopicInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "CreateTopic";
    type Output = CreateTopicOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let mut writer = query_writer(Self::OPERATION);
        writer.push_opt("Name", self.name.as_deref());
        write_attributes(&mut writer, "Attributes", &self.attributes);
        writer.list("Tags", &self.tags, |w, prefix, tag| w.structure(prefix, tag));
        writer.push_opt("DataProtectionPolicy", self.data_protection_policy.as_deref());
        form_request(writer)
    }
}

/// Input for the `DeleteTopic` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DeleteTopicInput {
    /// Required.
    #[serde(default)]
    pub topic_arn: Option<String>,
}

impl Validate for DeleteTopicInput {
    fn validate(&self) -> Result<(), InputError> {
        required("DeleteTopicInput", "TopicArn", &self.topic_arn)?;
        Ok(())
    }
}

impl AwsInput for DeleteTopicInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "DeleteTopic";
    type Output = ();

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let mut writer = query_writer(Self::OPERATION);
        writer.push_opt("TopicArn", self.topic_arn.as_deref());
        form_request(writer)
    }
}

/// Input for the `Publish` operation.
///
/// Exactly one of `TopicArn`, `TargetArn` or `PhoneNumber` addresses the
/// message. The service enforces that.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PublishInput {
    #[serde(default)]
    pub topic_arn: Option<String>,

    /// Endpoint ARN for mobile push.
    #[serde(default)]
    pub target_arn: Option<String>,

    /// E.164 number for SMS.
    #[serde(default)]
    pub phone_number: Option<String>,

    /// Required.
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub subject: Option<String>,

    /// `json` when `Message` holds one message per protocol.
    #[serde(default)]
    pub message_structure: Option<String>,

    #[serde(default)]
    pub message_attributes: HashMap<String, MessageAttributeValue>,

    /// FIFO topics only.
    #[serde(default)]
    pub message_deduplication_id: Option<String>,

    /// FIFO topics only.
    #[serde(default)]
    pub message_group_id: Option<String>,
}

impl Validate for PublishInput {
    fn validate(&self) -> Result<(), InputError> {
        required("PublishInput", "Message", &self.message)?;
        validate_map(&self.message_attributes)
    }
}

impl AwsInput for PublishInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "Publish";
    type Output = PublishOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let mut writer = query_writer(Self::OPERATION);
        writer.push_opt("TopicArn", self.topic_arn.as_deref());
        writer.push_opt("TargetArn", self.target_arn.as_deref());
        writer.push_opt("PhoneNumber", self.phone_number.as_deref());
        writer.push_opt("Message", self.message.as_deref());
        writer.push_opt("Subject", self.subject.as_deref());
        writer.push_opt("MessageStructure", self.message_structure.as_deref());
        writer.map(
            "MessageAttributes",
            &self.message_attributes,
            "Name",
            "Value",
            |w, prefix, value| w.structure(prefix, value),
        );
        writer.push_opt("MessageDeduplicationId", self.message_deduplication_id.as_deref());
        writer.push_opt("MessageGroupId", self.message_group_id.as_deref());
        form_request(writer)
    }
}

/// Input for the `Subscribe` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SubscribeInput {
    /// Required.
    #[serde(default)]
    pub topic_arn: Option<String>,

    /// `http`, `https`, `email`, `sqs`, `lambda`, `sms`... Required.
    #[serde(default)]
    pub protocol: Option<String>,

    /// Where to deliver, in the protocol's format.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Subscription attributes such as `FilterPolicy` or `RawMessageDelivery`.
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// Return the ARN even before the subscription is confirmed.
    #[serde(default)]
    pub return_subscription_arn: Option<bool>,
}

impl Validate for SubscribeInput {
    fn validate(&self) -> Result<(), InputError> {
        required("SubscribeInput", "TopicArn", &self.topic_arn)?;
        required("SubscribeInput", "Protocol", &self.protocol)?;
        Ok(())
    }
}

impl AwsInput for SubscribeInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "Subscribe";
    type Output = SubscribeOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let mut writer = query_writer(Self::OPERATION);
        writer.push_opt("TopicArn", self.topic_arn.as_deref());
        writer.push_opt("Protocol", self.protocol.as_deref());
        writer.push_opt("Endpoint", self.endpoint.as_deref());
        write_attributes(&mut writer, "Attributes", &self.attributes);
        writer.push_opt("ReturnSubscriptionArn", self.return_subscription_arn);
        form_request(writer)
    }
}
