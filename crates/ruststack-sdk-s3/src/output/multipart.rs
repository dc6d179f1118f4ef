//! Multipart upload outputs.

use chrono::{DateTime, Utc};
use quick_xml::Reader;
use ruststack_sdk_core::{ClientError, FromResponse, Response};
use ruststack_sdk_xml::deserialize::{for_each_child, read_text_content, skip_element};
use ruststack_sdk_xml::{XmlDeserialize, XmlError};

use super::xml_body;
use crate::types::{RequestCharged, ServerSideEncryption};

/// Output for the `CreateMultipartUpload` operation, from
/// `<InitiateMultipartUploadResult>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateMultipartUploadOutput {
    pub bucket: Option<String>,
    pub key: Option<String>,
    /// Pass to `UploadPart`, `CompleteMultipartUpload` and `AbortMultipartUpload`.
    pub upload_id: Option<String>,
    /// HTTP header: `x-amz-abort-date`.
    pub abort_date: Option<DateTime<Utc>>,
    /// HTTP header: `x-amz-abort-rule-id`.
    pub abort_rule_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl XmlDeserialize for CreateMultipartUploadOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        for_each_child(reader, "InitiateMultipartUploadResult", |reader, name| {
            match name {
                "Bucket" => out.bucket = Some(read_text_content(reader)?),
                "Key" => out.key = Some(read_text_content(reader)?),
                "UploadId" => out.upload_id = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl FromResponse for CreateMultipartUploadOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        let mut output: Self = xml_body(&response)?;
        output.abort_date = response.header_http_date("x-amz-abort-date")?;
        output.abort_rule_id = response.header_string("x-amz-abort-rule-id");
        output.server_side_encryption = response.header_enum("x-amz-server-side-encryption");
        output.ssekms_key_id =
            response.header_string("x-amz-server-side-encryption-aws-kms-key-id");
        output.request_charged = response.header_enum("x-amz-request-charged");
        Ok(output)
    }
}

/// Output for the `UploadPart` operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadPartOutput {
    /// HTTP header: `ETag`. Needed to complete the upload.
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl FromResponse for UploadPartOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        Ok(Self {
            e_tag: response.header_string("etag"),
            server_side_encryption: response.header_enum("x-amz-server-side-encryption"),
            ssekms_key_id: response.header_string("x-amz-server-side-encryption-aws-kms-key-id"),
            request_charged: response.header_enum("x-amz-request-charged"),
        })
    }
}

/// Output for the `CompleteMultipartUpload` operation, from
/// `<CompleteMultipartUploadResult>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompleteMultipartUploadOutput {
    /// URL of the assembled object.
    pub location: Option<String>,
    pub bucket: Option<String>,
    pub key: Option<String>,
    /// Multipart ETags end in `-{part count}`.
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl XmlDeserialize for CompleteMultipartUploadOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        for_each_child(reader, "CompleteMultipartUploadResult", |reader, name| {
            match name {
                "Location" => out.location = Some(read_text_content(reader)?),
                "Bucket" => out.bucket = Some(read_text_content(reader)?),
                "Key" => out.key = Some(read_text_content(reader)?),
                "ETag" => out.e_tag = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl FromResponse for CompleteMultipartUploadOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        let mut output: Self = xml_body(&response)?;
        output.expiration = response.header_string("x-amz-expiration");
        output.version_id = response.header_string("x-amz-version-id");
        output.server_side_encryption = response.header_enum("x-amz-server-side-encryption");
        output.request_charged = response.header_enum("x-amz-request-charged");
        Ok(output)
    }
}

/// Output for the `AbortMultipartUpload` operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbortMultipartUploadOutput {
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl FromResponse for AbortMultipartUploadOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        Ok(Self {
            request_charged: response.header_enum("x-amz-request-charged"),
        })
    }
}
