//! Object-level outputs.

use std::collections::HashMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use quick_xml::Reader;
use ruststack_sdk_core::{ClientError, FromResponse, Response};
use ruststack_sdk_xml::deserialize::{for_each_child, skip_element};
use ruststack_sdk_xml::{XmlDeserialize, XmlError};

use super::xml_body;
use crate::input::META_PREFIX;
use crate::types::{
    CopyObjectResult, DeletedObject, Error, RequestCharged, ServerSideEncryption, StorageClass,
    Tag, read_tag_set,
};

/// Output for the `PutObject` operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutObjectOutput {
    /// HTTP header: `ETag`.
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption-bucket-key-enabled`.
    pub bucket_key_enabled: Option<bool>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl FromResponse for PutObjectOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        Ok(Self {
            e_tag: response.header_string("etag"),
            expiration: response.header_string("x-amz-expiration"),
            version_id: response.header_string("x-amz-version-id"),
            server_side_encryption: response.header_enum("x-amz-server-side-encryption"),
            ssekms_key_id: response.header_string("x-amz-server-side-encryption-aws-kms-key-id"),
            bucket_key_enabled: response
                .header_bool("x-amz-server-side-encryption-bucket-key-enabled")?,
            request_charged: response.header_enum("x-amz-request-charged"),
        })
    }
}

/// Output for the `HeadObject` operation: the object's headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadObjectOutput {
    /// HTTP header: `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// HTTP header: `accept-ranges`.
    pub accept_ranges: Option<String>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    /// HTTP header: `x-amz-restore`.
    pub restore: Option<String>,
    /// HTTP header: `Last-Modified`.
    pub last_modified: Option<DateTime<Utc>>,
    /// HTTP header: `Content-Length`.
    pub content_length: Option<i64>,
    /// HTTP header: `ETag`.
    pub e_tag: Option<String>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
    /// HTTP header: `Cache-Control`.
    pub cache_control: Option<String>,
    /// HTTP header: `Content-Disposition`.
    pub content_disposition: Option<String>,
    /// HTTP header: `Content-Encoding`.
    pub content_encoding: Option<String>,
    /// HTTP header: `Content-Language`.
    pub content_language: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `Expires`, verbatim.
    pub expires: Option<String>,
    /// HTTP header: `x-amz-website-redirect-location`.
    pub website_redirect_location: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP prefix headers: `x-amz-meta-`, keyed without the prefix.
    pub metadata: HashMap<String, String>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-storage-class`. Absent for `STANDARD`.
    pub storage_class: Option<StorageClass>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
    /// HTTP header: `x-amz-mp-parts-count`.
    pub parts_count: Option<i32>,
}

impl FromResponse for HeadObjectOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        Ok(Self {
            delete_marker: response.header_bool("x-amz-delete-marker")?,
            accept_ranges: response.header_string("accept-ranges"),
            expiration: response.header_string("x-amz-expiration"),
            restore: response.header_string("x-amz-restore"),
            last_modified: response.header_http_date("last-modified")?,
            content_length: response.header_parse("content-length")?,
            e_tag: response.header_string("etag"),
            version_id: response.header_string("x-amz-version-id"),
            cache_control: response.header_string("cache-control"),
            content_disposition: response.header_string("content-disposition"),
            content_encoding: response.header_string("content-encoding"),
            content_language: response.header_string("content-language"),
            content_type: response.header_string("content-type"),
            expires: response.header_string("expires"),
            website_redirect_location: response.header_string("x-amz-website-redirect-location"),
            server_side_encryption: response.header_enum("x-amz-server-side-encryption"),
            metadata: response.prefixed_headers(META_PREFIX),
            ssekms_key_id: response.header_string("x-amz-server-side-encryption-aws-kms-key-id"),
            storage_class: response.header_enum("x-amz-storage-class"),
            request_charged: response.header_enum("x-amz-request-charged"),
            parts_count: response.header_parse("x-amz-mp-parts-count")?,
        })
    }
}

/// Output for the `GetObject` operation: the payload and the object's headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetObjectOutput {
    /// HTTP payload.
    pub body: Bytes,
    /// HTTP header: `Content-Range`, set for ranged reads.
    pub content_range: Option<String>,
    /// HTTP header: `x-amz-tagging-count`.
    pub tag_count: Option<i32>,
    /// Everything `HeadObject` would report.
    pub head: HeadObjectOutput,
}

impl GetObjectOutput {
    /// The payload as UTF-8 text, if it is valid UTF-8.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

impl FromResponse for GetObjectOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        let content_range = response.header_string("content-range");
        let tag_count = response.header_parse("x-amz-tagging-count")?;
        let body = response.body().clone();
        Ok(Self {
            body,
            content_range,
            tag_count,
            head: HeadObjectOutput::from_response(response)?,
        })
    }
}

/// Output for the `DeleteObject` operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteObjectOutput {
    /// HTTP header: `x-amz-delete-marker`.
    pub delete_marker: Option<bool>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl FromResponse for DeleteObjectOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        Ok(Self {
            delete_marker: response.header_bool("x-amz-delete-marker")?,
            version_id: response.header_string("x-amz-version-id"),
            request_charged: response.header_enum("x-amz-request-charged"),
        })
    }
}

/// Output for the `DeleteObjects` operation, from `<DeleteResult>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteObjectsOutput {
    /// Flattened `<Deleted>` entries.
    pub deleted: Vec<DeletedObject>,
    /// Flattened `<Error>` entries.
    pub errors: Vec<Error>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl XmlDeserialize for DeleteObjectsOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut output = Self::default();
        for_each_child(reader, "DeleteResult", |reader, name| {
            match name {
                "Deleted" => output.deleted.push(DeletedObject::deserialize_xml(reader)?),
                "Error" => output.errors.push(Error::deserialize_xml(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(output)
    }
}

impl FromResponse for DeleteObjectsOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        let mut output: Self = xml_body(&response)?;
        output.request_charged = response.header_enum("x-amz-request-charged");
        Ok(output)
    }
}

/// Output for the `CopyObject` operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyObjectOutput {
    /// HTTP payload.
    pub copy_object_result: Option<CopyObjectResult>,
    /// HTTP header: `x-amz-expiration`.
    pub expiration: Option<String>,
    /// HTTP header: `x-amz-copy-source-version-id`.
    pub copy_source_version_id: Option<String>,
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
    /// HTTP header: `x-amz-server-side-encryption`.
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    pub ssekms_key_id: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl FromResponse for CopyObjectOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        let result: CopyObjectResult = xml_body(&response)?;
        Ok(Self {
            copy_object_result: Some(result),
            expiration: response.header_string("x-amz-expiration"),
            copy_source_version_id: response.header_string("x-amz-copy-source-version-id"),
            version_id: response.header_string("x-amz-version-id"),
            server_side_encryption: response.header_enum("x-amz-server-side-encryption"),
            ssekms_key_id: response.header_string("x-amz-server-side-encryption-aws-kms-key-id"),
            request_charged: response.header_enum("x-amz-request-charged"),
        })
    }
}

/// Output for the `PutObjectTagging` operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutObjectTaggingOutput {
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
}

impl FromResponse for PutObjectTaggingOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        Ok(Self {
            version_id: response.header_string("x-amz-version-id"),
        })
    }
}

/// Output for the `GetObjectTagging` operation, from `<Tagging>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetObjectTaggingOutput {
    /// HTTP header: `x-amz-version-id`.
    pub version_id: Option<String>,
    pub tag_set: Vec<Tag>,
}

impl XmlDeserialize for GetObjectTaggingOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut output = Self::default();
        for_each_child(reader, "Tagging", |reader, name| {
            match name {
                "TagSet" => output.tag_set = read_tag_set(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(output)
    }
}

impl FromResponse for GetObjectTaggingOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        let mut output: Self = xml_body(&response)?;
        output.version_id = response.header_string("x-amz-version-id");
        Ok(output)
    }
}
