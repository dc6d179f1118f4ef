//! SNS value objects.
//!
//! Value objects deserialize from the named-parameter map and flatten
//! themselves into query fields through [`QuerySerialize`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use ruststack_sdk_core::codec::blob;
use ruststack_sdk_core::input::required;
use ruststack_sdk_core::{InputError, QuerySerialize, QueryWriter, Validate};
use serde::Deserialize;

/// A topic tag.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Tag {
    /// Required.
    #[serde(default)]
    pub key: Option<String>,
    /// Required.
    #[serde(default)]
    pub value: Option<String>,
}

impl Validate for Tag {
    fn validate(&self) -> Result<(), InputError> {
        required("Tag", "Key", &self.key)?;
        required("Tag", "Value", &self.value)?;
        Ok(())
    }
}

impl QuerySerialize for Tag {
    fn serialize_query(&self, writer: &mut QueryWriter, prefix: &str) {
        writer.push_opt(&format!("{prefix}.Key"), self.key.as_deref());
        writer.push_opt(&format!("{prefix}.Value"), self.value.as_deref());
    }
}

/// A typed message attribute.
///
/// `DataType` is `String`, `String.Array`, `Number` or `Binary`, optionally
/// followed by a custom suffix (`Number.float`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MessageAttributeValue {
    /// Required.
    #[serde(default)]
    pub data_type: Option<String>,

    #[serde(default)]
    pub string_value: Option<String>,

    /// Base64 in the parameter map and on the wire.
    #[serde(default, with = "blob")]
    pub binary_value: Option<Bytes>,
}

impl Validate for MessageAttributeValue {
    fn validate(&self) -> Result<(), InputError> {
        required("MessageAttributeValue", "DataType", &self.data_type)?;
        Ok(())
    }
}

impl QuerySerialize for MessageAttributeValue {
    fn serialize_query(&self, writer: &mut QueryWriter, prefix: &str) {
        writer.push_opt(&format!("{prefix}.DataType"), self.data_type.as_deref());
        writer.push_opt(&format!("{prefix}.StringValue"), self.string_value.as_deref());
        writer.push_opt(
            &format!("{prefix}.BinaryValue"),
            self.binary_value.as_ref().map(|data| STANDARD.encode(data)),
        );
    }
}
