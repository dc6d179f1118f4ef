//! Bedrock Runtime enums and value objects.
//!
//! Member names are `camelCase` on the wire. Union shapes (`ContentBlock`,
//! `SystemContentBlock`) are Rust enums: exactly one member is set, and
//! members this model does not know decode to `Unknown(name)`.

use bytes::Bytes;
use ruststack_sdk_core::codec::blob;
use ruststack_sdk_core::input::{check_enum, required, required_list, validate_list};
use ruststack_sdk_core::{InputError, Validate, aws_enum};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

aws_enum! {
    /// Author of a conversation message.
    pub enum ConversationRole {
        User = "user",
        Assistant = "assistant",
    }
}

aws_enum! {
    /// Why the model stopped generating.
    pub enum StopReason {
        EndTurn = "end_turn",
        ToolUse = "tool_use",
        MaxTokens = "max_tokens",
        StopSequence = "stop_sequence",
        GuardrailIntervened = "guardrail_intervened",
        ContentFiltered = "content_filtered",
    }
}

aws_enum! {
    /// Guardrail trace setting of `InvokeModel`.
    pub enum Trace {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
        EnabledFull = "ENABLED_FULL",
    }
}

aws_enum! {
    /// Latency profile of an inference request.
    pub enum PerformanceConfigLatency {
        Standard = "standard",
        Optimized = "optimized",
    }
}

aws_enum! {
    /// Encoding of an image content block.
    pub enum ImageFormat {
        Png = "png",
        Jpeg = "jpeg",
        Gif = "gif",
        Webp = "webp",
    }
}

aws_enum! {
    /// Encoding of a document content block.
    pub enum DocumentFormat {
        Pdf = "pdf",
        Csv = "csv",
        Doc = "doc",
        Docx = "docx",
        Xls = "xls",
        Xlsx = "xlsx",
        Html = "html",
        Txt = "txt",
        Md = "md",
    }
}

// ---------------------------------------------------------------------------
// Union plumbing
// ---------------------------------------------------------------------------

/// Split a union document into its single set member.
///
/// `null` members count as unset.
fn single_member(shape: &'static str, members: Map<String, Value>) -> Result<(String, Value), InputError> {
    let mut set: Vec<(String, Value)> = members.into_iter().filter(|(_, v)| !v.is_null()).collect();
    if set.len() != 1 {
        return Err(InputError::InvalidUnion {
            shape,
            found: set.into_iter().map(|(name, _)| name).collect(),
        });
    }
    set.pop().ok_or(InputError::InvalidUnion {
        shape,
        found: Vec::new(),
    })
}

fn member<T: DeserializeOwned>(shape: &'static str, value: Value) -> Result<T, InputError> {
    serde_json::from_value(value).map_err(|source| InputError::InvalidParameters { shape, source })
}

fn unknown_member(shape: &'static str, name: &str) -> InputError {
    InputError::InvalidUnion {
        shape,
        found: vec![name.to_owned()],
    }
}

// ---------------------------------------------------------------------------
// Content blocks
// ---------------------------------------------------------------------------

/// Image bytes. Only the inline `bytes` member of the source union is modelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    /// Raw image bytes, base64 in JSON. Required.
    #[serde(default, with = "blob", skip_serializing_if = "Option::is_none")]
    pub bytes: Option<Bytes>,
}

/// An image in a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,

    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ImageSource>,
}

impl Validate for ImageBlock {
    fn validate(&self) -> Result<(), InputError> {
        let format = required("ImageBlock", "format", &self.format)?;
        check_enum("ImageBlock", "format", Some(format))?;
        let source = required("ImageBlock", "source", &self.source)?;
        required("ImageSource", "bytes", &source.bytes)?;
        Ok(())
    }
}

/// Document bytes. Only the inline `bytes` member of the source union is modelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSource {
    #[serde(default, with = "blob", skip_serializing_if = "Option::is_none")]
    pub bytes: Option<Bytes>,
}

/// A document in a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentBlock {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DocumentFormat>,

    /// Display name of the document. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<DocumentSource>,
}

impl Validate for DocumentBlock {
    fn validate(&self) -> Result<(), InputError> {
        let format = required("DocumentBlock", "format", &self.format)?;
        check_enum("DocumentBlock", "format", Some(format))?;
        required("DocumentBlock", "name", &self.name)?;
        let source = required("DocumentBlock", "source", &self.source)?;
        required("DocumentSource", "bytes", &source.bytes)?;
        Ok(())
    }
}

/// A tool invocation requested by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolUseBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_use_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Arguments as a free-form JSON document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
}

impl Validate for ToolUseBlock {
    fn validate(&self) -> Result<(), InputError> {
        required("ToolUseBlock", "toolUseId", &self.tool_use_id)?;
        required("ToolUseBlock", "name", &self.name)?;
        required("ToolUseBlock", "input", &self.input)?;
        Ok(())
    }
}

/// One block of message content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub enum ContentBlock {
    Text(String),
    Image(ImageBlock),
    Document(DocumentBlock),
    ToolUse(ToolUseBlock),
    /// A member this model does not know, by wire name.
    #[serde(skip)]
    Unknown(String),
}

impl TryFrom<Map<String, Value>> for ContentBlock {
    type Error = InputError;

    fn try_from(members: Map<String, Value>) -> Result<Self, Self::Error> {
        const SHAPE: &str = "ContentBlock";
        let (name, value) = single_member(SHAPE, members)?;
        Ok(match name.as_str() {
            "text" => Self::Text(member(SHAPE, value)?),
            "image" => Self::Image(member(SHAPE, value)?),
            "document" => Self::Document(member(SHAPE, value)?),
            "toolUse" => Self::ToolUse(member(SHAPE, value)?),
            _ => Self::Unknown(name),
        })
    }
}

impl Validate for ContentBlock {
    fn validate(&self) -> Result<(), InputError> {
        match self {
            Self::Text(_) => Ok(()),
            Self::Image(image) => image.validate(),
            Self::Document(document) => document.validate(),
            Self::ToolUse(tool_use) => tool_use.validate(),
            Self::Unknown(name) => Err(unknown_member("ContentBlock", name)),
        }
    }
}

/// One block of the system prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub enum SystemContentBlock {
    Text(String),
    #[serde(skip)]
    Unknown(String),
}

impl TryFrom<Map<String, Value>> for SystemContentBlock {
    type Error = InputError;

    fn try_from(members: Map<String, Value>) -> Result<Self, Self::Error> {
        const SHAPE: &str = "SystemContentBlock";
        let (name, value) = single_member(SHAPE, members)?;
        Ok(match name.as_str() {
            "text" => Self::Text(member(SHAPE, value)?),
            _ => Self::Unknown(name),
        })
    }
}

impl Validate for SystemContentBlock {
    fn validate(&self) -> Result<(), InputError> {
        match self {
            Self::Text(_) => Ok(()),
            Self::Unknown(name) => Err(unknown_member("SystemContentBlock", name)),
        }
    }
}

// ---------------------------------------------------------------------------
// Messages and configuration
// ---------------------------------------------------------------------------

/// A conversation turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ConversationRole>,

    /// Required, non-empty.
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl Message {
    /// Concatenated text blocks of this message.
    #[must_use]
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Validate for Message {
    fn validate(&self) -> Result<(), InputError> {
        let role = required("Message", "role", &self.role)?;
        check_enum("Message", "role", Some(role))?;
        required_list("Message", "content", &self.content)?;
        validate_list(&self.content)
    }
}

/// Sampling parameters shared by all models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i32>,

    /// 0.0 to 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop_sequences: Vec<String>,
}

impl Validate for InferenceConfiguration {
    fn validate(&self) -> Result<(), InputError> {
        Ok(())
    }
}

/// Latency settings of a `Converse` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<PerformanceConfigLatency>,
}

impl Validate for PerformanceConfiguration {
    fn validate(&self) -> Result<(), InputError> {
        check_enum("PerformanceConfiguration", "latency", self.latency.as_ref())
    }
}

/// Guardrail applied to a `Converse` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardrailConfiguration {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardrail_identifier: Option<String>,

    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardrail_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl Validate for GuardrailConfiguration {
    fn validate(&self) -> Result<(), InputError> {
        required(
            "GuardrailConfiguration",
            "guardrailIdentifier",
            &self.guardrail_identifier,
        )?;
        required(
            "GuardrailConfiguration",
            "guardrailVersion",
            &self.guardrail_version,
        )?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Response members
// ---------------------------------------------------------------------------

/// The `output` union of a `Converse` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseOutputContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

/// Token counts of a call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_read_input_tokens: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_write_input_tokens: Option<i32>,
}

/// Timing of a call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<i64>,
}
