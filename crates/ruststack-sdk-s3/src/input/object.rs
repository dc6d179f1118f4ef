//! Object-level inputs.

use std::collections::HashMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::Method;
use ruststack_sdk_core::codec::{date_time, format_http_date, text_blob};
use ruststack_sdk_core::input::{check_enum, required, validate_opt};
use ruststack_sdk_core::{AwsInput, InputError, Request, Service, Validate};
use serde::Deserialize;

use super::{
    OCTET_STREAM, bucket_path, metadata_headers, object_path, set_xml_payload,
    sse_customer_headers,
};
use crate::SERVICE;
use crate::output::{
    CopyObjectOutput, DeleteObjectOutput, DeleteObjectsOutput, GetObjectOutput,
    GetObjectTaggingOutput, HeadObjectOutput, PutObjectOutput, PutObjectTaggingOutput,
};
use crate::types::{
    Delete, MetadataDirective, ObjectCannedACL, RequestPayer, ServerSideEncryption,
    StorageClass, Tagging, TaggingDirective, check_headers,
};

/// `If-*` preconditions of `GetObject` and `HeadObject`.
fn conditional_headers(
    request: &mut Request,
    if_match: Option<&str>,
    if_modified_since: Option<&DateTime<Utc>>,
    if_none_match: Option<&str>,
    if_unmodified_since: Option<&DateTime<Utc>>,
) -> Result<(), InputError> {
    request.header_opt("If-Match", if_match)?;
    request.header_timestamp("If-Modified-Since", if_modified_since)?;
    request.header_opt("If-None-Match", if_none_match)?;
    request.header_timestamp("If-Unmodified-Since", if_unmodified_since)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// PutObject
// ---------------------------------------------------------------------------

/// Input for the `PutObject` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PutObjectInput {
    /// HTTP header: `x-amz-acl`.
    #[serde(rename = "ACL", default)]
    pub acl: Option<ObjectCannedACL>,

    /// HTTP payload. Given as text in the parameter map.
    #[serde(default, with = "text_blob")]
    pub body: Option<Bytes>,

    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP header: `Cache-Control`.
    #[serde(default)]
    pub cache_control: Option<String>,

    /// HTTP header: `Content-Disposition`.
    #[serde(default)]
    pub content_disposition: Option<String>,

    /// HTTP header: `Content-Encoding`.
    #[serde(default)]
    pub content_encoding: Option<String>,

    /// HTTP header: `Content-Language`.
    #[serde(default)]
    pub content_language: Option<String>,

    /// HTTP header: `Content-Length`. Derived from the body when absent.
    #[serde(default)]
    pub content_length: Option<i64>,

    /// HTTP header: `Content-MD5`.
    #[serde(rename = "ContentMD5", default)]
    pub content_md5: Option<String>,

    /// HTTP header: `Content-Type`.
    #[serde(default)]
    pub content_type: Option<String>,

    /// HTTP header: `Expires`.
    #[serde(default, with = "date_time")]
    pub expires: Option<DateTime<Utc>>,

    /// HTTP header: `x-amz-grant-full-control`.
    #[serde(default)]
    pub grant_full_control: Option<String>,

    /// HTTP header: `x-amz-grant-read`.
    #[serde(default)]
    pub grant_read: Option<String>,

    /// HTTP header: `x-amz-grant-read-acp`.
    #[serde(rename = "GrantReadACP", default)]
    pub grant_read_acp: Option<String>,

    /// HTTP header: `x-amz-grant-write-acp`.
    #[serde(rename = "GrantWriteACP", default)]
    pub grant_write_acp: Option<String>,

    /// HTTP header: `If-Match`.
    #[serde(default)]
    pub if_match: Option<String>,

    /// HTTP header: `If-None-Match`. `*` refuses to overwrite.
    #[serde(default)]
    pub if_none_match: Option<String>,

    /// HTTP label (URI path, greedy). Required.
    #[serde(default)]
    pub key: Option<String>,

    /// HTTP prefix headers: `x-amz-meta-`.
    #[serde(default)]
    pub metadata: HashMap<String, String>,

    /// HTTP header: `x-amz-server-side-encryption`.
    #[serde(default)]
    pub server_side_encryption: Option<ServerSideEncryption>,

    /// HTTP header: `x-amz-storage-class`.
    #[serde(default)]
    pub storage_class: Option<StorageClass>,

    /// HTTP header: `x-amz-website-redirect-location`.
    #[serde(default)]
    pub website_redirect_location: Option<String>,

    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    #[serde(rename = "SSECustomerAlgorithm", default)]
    pub sse_customer_algorithm: Option<String>,

    /// HTTP header: `x-amz-server-side-encryption-customer-key`.
    #[serde(rename = "SSECustomerKey", default)]
    pub sse_customer_key: Option<String>,

    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    #[serde(rename = "SSECustomerKeyMD5", default)]
    pub sse_customer_key_md5: Option<String>,

    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    #[serde(rename = "SSEKMSKeyId", default)]
    pub ssekms_key_id: Option<String>,

    /// HTTP header: `x-amz-server-side-encryption-bucket-key-enabled`.
    #[serde(default)]
    pub bucket_key_enabled: Option<bool>,

    /// HTTP header: `x-amz-request-payer`.
    #[serde(default)]
    pub request_payer: Option<RequestPayer>,

    /// HTTP header: `x-amz-tagging`. URL query form, e.g. `k1=v1&k2=v2`.
    #[serde(default)]
    pub tagging: Option<String>,

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,
}

impl Validate for PutObjectInput {
    fn validate(&self) -> Result<(), InputError> {
        required("PutObjectInput", "Bucket", &self.bucket)?;
        required("PutObjectInput", "Key", &self.key)?;
        check_headers(
            "PutObjectInput",
            self.acl.as_ref(),
            self.storage_class.as_ref(),
            self.server_side_encryption.as_ref(),
        )?;
        check_enum("PutObjectInput", "RequestPayer", self.request_payer.as_ref())?;
        Ok(())
    }
}

impl AwsInput for PutObjectInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "PutObject";
    type Output = PutObjectOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let path = object_path("PutObjectInput", &self.bucket, &self.key)?;
        let mut request = Request::new(Method::PUT, path);
        request.header_opt("x-amz-acl", self.acl.as_ref())?;
        request.header_opt("Cache-Control", self.cache_control.as_deref())?;
        request.header_opt("Content-Disposition", self.content_disposition.as_deref())?;
        request.header_opt("Content-Encoding", self.content_encoding.as_deref())?;
        request.header_opt("Content-Language", self.content_language.as_deref())?;
        request.header_opt("Content-Length", self.content_length)?;
        request.header_opt("Content-MD5", self.content_md5.as_deref())?;
        request.header_opt("Content-Type", self.content_type.as_deref())?;
        request.header_timestamp("Expires", self.expires.as_ref())?;
        request.header_opt("x-amz-grant-full-control", self.grant_full_control.as_deref())?;
        request.header_opt("x-amz-grant-read", self.grant_read.as_deref())?;
        request.header_opt("x-amz-grant-read-acp", self.grant_read_acp.as_deref())?;
        request.header_opt("x-amz-grant-write-acp", self.grant_write_acp.as_deref())?;
        request.header_opt("If-Match", self.if_match.as_deref())?;
        request.header_opt("If-None-Match", self.if_none_match.as_deref())?;
        metadata_headers(&mut request, &self.metadata)?;
        request.header_opt(
            "x-amz-server-side-encryption",
            self.server_side_encryption.as_ref(),
        )?;
        request.header_opt("x-amz-storage-class", self.storage_class.as_ref())?;
        request.header_opt(
            "x-amz-website-redirect-location",
            self.website_redirect_location.as_deref(),
        )?;
        sse_customer_headers(
            &mut request,
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        request.header_opt(
            "x-amz-server-side-encryption-aws-kms-key-id",
            self.ssekms_key_id.as_deref(),
        )?;
        request.header_opt(
            "x-amz-server-side-encryption-bucket-key-enabled",
            self.bucket_key_enabled,
        )?;
        request.header_opt("x-amz-request-payer", self.request_payer.as_ref())?;
        request.header_opt("x-amz-tagging", self.tagging.as_deref())?;
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        if let Some(body) = &self.body {
            request.set_body(OCTET_STREAM, body.clone())?;
        }
        Ok(request)
    }
}

// ---------------------------------------------------------------------------
// GetObject / HeadObject
// ---------------------------------------------------------------------------

/// Input for the `GetObject` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GetObjectInput {
    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP header: `If-Match`.
    #[serde(default)]
    pub if_match: Option<String>,

    /// HTTP header: `If-Modified-Since`.
    #[serde(default, with = "date_time")]
    pub if_modified_since: Option<DateTime<Utc>>,

    /// HTTP header: `If-None-Match`.
    #[serde(default)]
    pub if_none_match: Option<String>,

    /// HTTP header: `If-Unmodified-Since`.
    #[serde(default, with = "date_time")]
    pub if_unmodified_since: Option<DateTime<Utc>>,

    /// HTTP label (URI path, greedy). Required.
    #[serde(default)]
    pub key: Option<String>,

    /// HTTP header: `Range`, e.g. `bytes=0-99`.
    #[serde(default)]
    pub range: Option<String>,

    /// HTTP query: `response-cache-control`.
    #[serde(default)]
    pub response_cache_control: Option<String>,

    /// HTTP query: `response-content-disposition`.
    #[serde(default)]
    pub response_content_disposition: Option<String>,

    /// HTTP query: `response-content-encoding`.
    #[serde(default)]
    pub response_content_encoding: Option<String>,

    /// HTTP query: `response-content-language`.
    #[serde(default)]
    pub response_content_language: Option<String>,

    /// HTTP query: `response-content-type`.
    #[serde(default)]
    pub response_content_type: Option<String>,

    /// HTTP query: `response-expires`.
    #[serde(default, with = "date_time")]
    pub response_expires: Option<DateTime<Utc>>,

    /// HTTP query: `versionId`.
    #[serde(default)]
    pub version_id: Option<String>,

    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    #[serde(rename = "SSECustomerAlgorithm", default)]
    pub sse_customer_algorithm: Option<String>,

    /// HTTP header: `x-amz-server-side-encryption-customer-key`.
    #[serde(rename = "SSECustomerKey", default)]
    pub sse_customer_key: Option<String>,

    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    #[serde(rename = "SSECustomerKeyMD5", default)]
    pub sse_customer_key_md5: Option<String>,

    /// HTTP header: `x-amz-request-payer`.
    #[serde(default)]
    pub request_payer: Option<RequestPayer>,

    /// HTTP query: `partNumber`.
    #[serde(default)]
    pub part_number: Option<i32>,

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,
}

impl Validate for GetObjectInput {
    fn validate(&self) -> Result<(), InputError> {
        required("GetObjectInput", "Bucket", &self.bucket)?;
        required("GetObjectInput", "Key", &self.key)?;
        check_enum("GetObjectInput", "RequestPayer", self.request_payer.as_ref())?;
        Ok(())
    }
}

impl AwsInput for GetObjectInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "GetObject";
    type Output = GetObjectOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let path = object_path("GetObjectInput", &self.bucket, &self.key)?;
        let mut request = Request::new(Method::GET, path);
        request.query_opt("partNumber", self.part_number);
        request.query_opt("response-cache-control", self.response_cache_control.as_deref());
        request.query_opt(
            "response-content-disposition",
            self.response_content_disposition.as_deref(),
        );
        request.query_opt("response-content-encoding", self.response_content_encoding.as_deref());
        request.query_opt("response-content-language", self.response_content_language.as_deref());
        request.query_opt("response-content-type", self.response_content_type.as_deref());
        request.query_opt("response-expires", self.response_expires.as_ref().map(format_http_date));
        request.query_opt("versionId", self.version_id.as_deref());
        conditional_headers(
            &mut request,
            self.if_match.as_deref(),
            self.if_modified_since.as_ref(),
            self.if_none_match.as_deref(),
            self.if_unmodified_since.as_ref(),
        )?;
        request.header_opt("Range", self.range.as_deref())?;
        sse_customer_headers(
            &mut request,
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        request.header_opt("x-amz-request-payer", self.request_payer.as_ref())?;
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        Ok(request)
    }
}

/// Input for the `HeadObject` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct HeadObjectInput {
    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP header: `If-Match`.
    #[serde(default)]
    pub if_match: Option<String>,

    /// HTTP header: `If-Modified-Since`.
    #[serde(default, with = "date_time")]
    pub if_modified_since: Option<DateTime<Utc>>,

    /// HTTP header: `If-None-Match`.
    #[serde(default)]
    pub if_none_match: Option<String>,

    /// HTTP header: `If-Unmodified-Since`.
    #[serde(default, with = "date_time")]
    pub if_unmodified_since: Option<DateTime<Utc>>,

    /// HTTP label (URI path, greedy). Required.
    #[serde(default)]
    pub key: Option<String>,

    /// HTTP header: `Range`.
    #[serde(default)]
    pub range: Option<String>,

    /// HTTP query: `versionId`.
    #[serde(default)]
    pub version_id: Option<String>,

    /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
    #[serde(rename = "SSECustomerAlgorithm", default)]
    pub sse_customer_algorithm: Option<String>,

    /// HTTP header: `x-amz-server-side-encryption-customer-key`.
    #[serde(rename = "SSECustomerKey", default)]
    pub sse_customer_key: Option<String>,

    /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
    #[serde(rename = "SSECustomerKeyMD5", default)]
    pub sse_customer_key_md5: Option<String>,

    /// HTTP header: `x-amz-request-payer`.
    #[serde(default)]
    pub request_payer: Option<RequestPayer>,

    /// HTTP query: `partNumber`.
    #[serde(default)]
    pub part_number: Option<i32>,

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,
}

impl Validate for HeadObjectInput {
    fn validate(&self) -> Result<(), InputError> {
        required("HeadObjectInput", "Bucket", &self.bucket)?;
        required("HeadObjectInput", "Key", &self.key)?;
        check_enum("HeadObjectInput", "RequestPayer", self.request_payer.as_ref())?;
        Ok(())
    }
}

impl AwsInput for HeadObjectInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "HeadObject";
    type Output = HeadObjectOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let path = object_path("HeadObjectInput", &self.bucket, &self.key)?;
        let mut request = Request::new(Method::HEAD, path);
        request.query_opt("partNumber", self.part_number);
        request.query_opt("versionId", self.version_id.as_deref());
        conditional_headers(
            &mut request,
            self.if_match.as_deref(),
            self.if_modified_since.as_ref(),
            self.if_none_match.as_deref(),
            self.if_unmodified_since.as_ref(),
        )?;
        request.header_opt("Range", self.range.as_deref())?;
        sse_customer_headers(
            &mut request,
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        request.header_opt("x-amz-request-payer", self.request_payer.as_ref())?;
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        Ok(request)
    }
}

// ---------------------------------------------------------------------------
// DeleteObject / DeleteObjects
// ---------------------------------------------------------------------------

/// Input for the `DeleteObject` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DeleteObjectInput {
    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP label (URI path, greedy). Required.
    #[serde(default)]
    pub key: Option<String>,

    /// HTTP header: `x-amz-mfa`.
    #[serde(rename = "MFA", default)]
    pub mfa: Option<String>,

    /// HTTP query: `versionId`.
    #[serde(default)]
    pub version_id: Option<String>,

    /// HTTP header: `x-amz-request-payer`.
    #[serde(default)]
    pub request_payer: Option<RequestPayer>,

    /// HTTP header: `x-amz-bypass-governance-retention`.
    #[serde(default)]
    pub bypass_governance_retention: Option<bool>,

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,
}

impl Validate for DeleteObjectInput {
    fn validate(&self) -> Result<(), InputError> {
        required("DeleteObjectInput", "Bucket", &self.bucket)?;
        required("DeleteObjectInput", "Key", &self.key)?;
        check_enum("DeleteObjectInput", "RequestPayer", self.request_payer.as_ref())?;
        Ok(())
    }
}

impl AwsInput for DeleteObjectInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "DeleteObject";
    type Output = DeleteObjectOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let path = object_path("DeleteObjectInput", &self.bucket, &self.key)?;
        let mut request = Request::new(Method::DELETE, path);
        request.query_opt("versionId", self.version_id.as_deref());
        request.header_opt("x-amz-mfa", self.mfa.as_deref())?;
        request.header_opt("x-amz-request-payer", self.request_payer.as_ref())?;
        request.header_opt(
            "x-amz-bypass-governance-retention",
            self.bypass_governance_retention,
        )?;
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        Ok(request)
    }
}

/// Input for the `DeleteObjects` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DeleteObjectsInput {
    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP payload. Required.
    #[serde(default)]
    pub delete: Option<Delete>,

    /// HTTP header: `x-amz-mfa`.
    #[serde(rename = "MFA", default)]
    pub mfa: Option<String>,

    /// HTTP header: `x-amz-request-payer`.
    #[serde(default)]
    pub request_payer: Option<RequestPayer>,

    /// HTTP header: `x-amz-bypass-governance-retention`.
    #[serde(default)]
    pub bypass_governance_retention: Option<bool>,

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,
}

impl Validate for DeleteObjectsInput {
    fn validate(&self) -> Result<(), InputError> {
        required("DeleteObjectsInput", "Bucket", &self.bucket)?;
        required("DeleteObjectsInput", "Delete", &self.delete)?;
        validate_opt(self.delete.as_ref())?;
        check_enum("DeleteObjectsInput", "RequestPayer", self.request_payer.as_ref())?;
        Ok(())
    }
}

impl AwsInput for DeleteObjectsInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "DeleteObjects";
    type Output = DeleteObjectsOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let delete = required("DeleteObjectsInput", "Delete", &self.delete)?;
        let mut request = Request::new(Method::POST, bucket_path("DeleteObjectsInput", &self.bucket)?);
        request.query("delete", "");
        request.header_opt("x-amz-mfa", self.mfa.as_deref())?;
        request.header_opt("x-amz-request-payer", self.request_payer.as_ref())?;
        request.header_opt(
            "x-amz-bypass-governance-retention",
            self.bypass_governance_retention,
        )?;
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        set_xml_payload(&mut request, "DeleteObjectsInput", "Delete", delete, true)?;
        Ok(request)
    }
}

// ---------------------------------------------------------------------------
// CopyObject
// ---------------------------------------------------------------------------

/// Input for the `CopyObject` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CopyObjectInput {
    /// HTTP header: `x-amz-acl`.
    #[serde(rename = "ACL", default)]
    pub acl: Option<ObjectCannedACL>,

    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP header: `Cache-Control`.
    #[serde(default)]
    pub cache_control: Option<String>,

    /// HTTP header: `Content-Disposition`.
    #[serde(default)]
    pub content_disposition: Option<String>,

    /// HTTP header: `Content-Encoding`.
    #[serde(default)]
    pub content_encoding: Option<String>,

    /// HTTP header: `Content-Language`.
    #[serde(default)]
    pub content_language: Option<String>,

    /// HTTP header: `Content-Type`.
    #[serde(default)]
    pub content_type: Option<String>,

    /// HTTP header: `x-amz-copy-source`. Required.
    ///
    /// `{bucket}/{key}[?versionId=..]`, already URL-encoded by the caller.
    #[serde(default)]
    pub copy_source: Option<String>,

    /// HTTP header: `x-amz-copy-source-if-match`.
    #[serde(default)]
    pub copy_source_if_match: Option<String>,

    /// HTTP header: `x-amz-copy-source-if-modified-since`.
    #[serde(default, with = "date_time")]
    pub copy_source_if_modified_since: Option<DateTime<Utc>>,

    /// HTTP header: `x-amz-copy-source-if-none-match`.
    #[serde(default)]
    pub copy_source_if_none_match: Option<String>,

    /// HTTP header: `x-amz-copy-source-if-unmodified-since`.
    #[serde(default, with = "date_time")]
    pub copy_source_if_unmodified_since: Option<DateTime<Utc>>,

    /// HTTP header: `Expires`.
    #[serde(default, with = "date_time")]
    pub expires: Option<DateTime<Utc>>,

    /// HTTP header: `x-amz-grant-full-control`.
    #[serde(default)]
    pub grant_full_control: Option<String>,

    /// HTTP header: `x-amz-grant-read`.
    #[serde(default)]
    pub grant_read: Option<String>,

    /// HTTP label (URI path, greedy). Required.
    #[serde(default)]
    pub key: Option<String>,

    /// HTTP prefix headers: `x-amz-meta-`. Applied only with `REPLACE`.
    #[serde(default)]
    pub metadata: HashMap<String, String>,

    /// HTTP header: `x-amz-metadata-directive`.
    #[serde(default)]
    pub metadata_directive: Option<MetadataDirective>,

    /// HTTP header: `x-amz-tagging-directive`.
    #[serde(default)]
    pub tagging_directive: Option<TaggingDirective>,

    /// HTTP header: `x-amz-server-side-encryption`.
    #[serde(default)]
    pub server_side_encryption: Option<ServerSideEncryption>,

    /// HTTP header: `x-amz-storage-class`.
    #[serde(default)]
    pub storage_class: Option<StorageClass>,

    /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
    #[serde(rename = "SSEKMSKeyId", default)]
    pub ssekms_key_id: Option<String>,

    /// HTTP header: `x-amz-request-payer`.
    #[serde(default)]
    pub request_payer: Option<RequestPayer>,

    /// HTTP header: `x-amz-tagging`.
    #[serde(default)]
    pub tagging: Option<String>,

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,

    /// HTTP header: `x-amz-source-expected-bucket-owner`.
    #[serde(default)]
    pub expected_source_bucket_owner: Option<String>,
}

impl Validate for CopyObjectInput {
    fn validate(&self) -> Result<(), InputError> {
        required("CopyObjectInput", "Bucket", &self.bucket)?;
        required("CopyObjectInput", "CopySource", &self.copy_source)?;
        required("CopyObjectInput", "Key", &self.key)?;
        check_headers(
            "CopyObjectInput",
            self.acl.as_ref(),
            self.storage_class.as_ref(),
            self.server_side_encryption.as_ref(),
        )?;
        check_enum("CopyObjectInput", "MetadataDirective", self.metadata_directive.as_ref())?;
        check_enum("CopyObjectInput", "TaggingDirective", self.tagging_directive.as_ref())?;
        check_enum("CopyObjectInput", "RequestPayer", self.request_payer.as_ref())?;
        Ok(())
    }
}

impl AwsInput for CopyObjectInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "CopyObject";
    type Output = CopyObjectOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let path = object_path("CopyObjectInput", &self.bucket, &self.key)?;
        let mut request = Request::new(Method::PUT, path);
        request.header_opt("x-amz-acl", self.acl.as_ref())?;
        request.header_opt("Cache-Control", self.cache_control.as_deref())?;
        request.header_opt("Content-Disposition", self.content_disposition.as_deref())?;
        request.header_opt("Content-Encoding", self.content_encoding.as_deref())?;
        request.header_opt("Content-Language", self.content_language.as_deref())?;
        request.header_opt("Content-Type", self.content_type.as_deref())?;
        request.header_opt("x-amz-copy-source", self.copy_source.as_deref())?;
        request.header_opt("x-amz-copy-source-if-match", self.copy_source_if_match.as_deref())?;
        request.header_timestamp(
            "x-amz-copy-source-if-modified-since",
            self.copy_source_if_modified_since.as_ref(),
        )?;
        request.header_opt(
            "x-amz-copy-source-if-none-match",
            self.copy_source_if_none_match.as_deref(),
        )?;
        request.header_timestamp(
            "x-amz-copy-source-if-unmodified-since",
            self.copy_source_if_unmodified_since.as_ref(),
        )?;
        request.header_timestamp("Expires", self.expires.as_ref())?;
        request.header_opt("x-amz-grant-full-control", self.grant_full_control.as_deref())?;
        request.header_opt("x-amz-grant-read", self.grant_read.as_deref())?;
        metadata_headers(&mut request, &self.metadata)?;
        request.header_opt("x-amz-metadata-directive", self.metadata_directive.as_ref())?;
        request.header_opt("x-amz-tagging-directive", self.tagging_directive.as_ref())?;
        request.header_opt(
            "x-amz-server-side-encryption",
            self.server_side_encryption.as_ref(),
        )?;
        request.header_opt("x-amz-storage-class", self.storage_class.as_ref())?;
        request.header_opt(
            "x-amz-server-side-encryption-aws-kms-key-id",
            self.ssekms_key_id.as_deref(),
        )?;
        request.header_opt("x-amz-request-payer", self.request_payer.as_ref())?;
        request.header_opt("x-amz-tagging", self.tagging.as_deref())?;
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        request.header_opt(
            "x-amz-source-expected-bucket-owner",
            self.expected_source_bucket_owner.as_deref(),
        )?;
        Ok(request)
    }
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Input for the `PutObjectTagging` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PutObjectTaggingInput {
    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP label (URI path, greedy). Required.
    #[serde(default)]
    pub key: Option<String>,

    /// HTTP query: `versionId`.
    #[serde(default)]
    pub version_id: Option<String>,

    /// HTTP header: `Content-MD5`. Computed when absent.
    #[serde(rename = "ContentMD5", default)]
    pub content_md5: Option<String>,

    /// HTTP payload. Required.
    #[serde(default)]
    pub tagging: Option<Tagging>,

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,

    /// HTTP header: `x-amz-request-payer`.
    #[serde(default)]
    pub request_payer: Option<RequestPayer>,
}

impl Validate for PutObjectTaggingInput {
    fn validate(&self) -> Result<(), InputError> {
        required("PutObjectTaggingInput", "Bucket", &self.bucket)?;
        required("PutObjectTaggingInput", "Key", &self.key)?;
        required("PutObjectTaggingInput", "Tagging", &self.tagging)?;
        validate_opt(self.tagging.as_ref())?;
        check_enum("PutObjectTaggingInput", "RequestPayer", self.request_payer.as_ref())?;
        Ok(())
    }
}

impl AwsInput for PutObjectTaggingInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "PutObjectTagging";
    type Output = PutObjectTaggingOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let tagging = required("PutObjectTaggingInput", "Tagging", &self.tagging)?;
        let path = object_path("PutObjectTaggingInput", &self.bucket, &self.key)?;
        let mut request = Request::new(Method::PUT, path);
        request.query("tagging", "");
        request.query_opt("versionId", self.version_id.as_deref());
        request.header_opt("Content-MD5", self.content_md5.as_deref())?;
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        request.header_opt("x-amz-request-payer", self.request_payer.as_ref())?;
        set_xml_payload(&mut request, "PutObjectTaggingInput", "Tagging", tagging, true)?;
        Ok(request)
    }
}

/// Input for the `GetObjectTagging` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GetObjectTaggingInput {
    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP label (URI path, greedy). Required.
    #[serde(default)]
    pub key: Option<String>,

    /// HTTP query: `versionId`.
    #[serde(default)]
    pub version_id: Option<String>,

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,

    /// HTTP header: `x-amz-request-payer`.
    #[serde(default)]
    pub request_payer: Option<RequestPayer>,
}

impl Validate for GetObjectTaggingInput {
    fn validate(&self) -> Result<(), InputError> {
        required("GetObjectTaggingInput", "Bucket", &self.bucket)?;
        required("GetObjectTaggingInput", "Key", &self.key)?;
        check_enum("GetObjectTaggingInput", "RequestPayer", self.request_payer.as_ref())?;
        Ok(())
    }
}

impl AwsInput for GetObjectTaggingInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "GetObjectTagging";
    type Output = GetObjectTaggingOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let path = object_path("GetObjectTaggingInput", &self.bucket, &self.key)?;
        let mut request = Request::new(Method::GET, path);
        request.query("tagging", "");
        request.query_opt("versionId", self.version_id.as_deref());
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        request.header_opt("x-amz-request-payer", self.request_payer.as_ref())?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_build_put_object_with_headers_and_metadata() {
        let input = PutObjectInput::from_params(json!({
            "Bucket": "media",
            "Key": "docs/readme.txt",
            "Body": "hello world",
            "ContentType": "text/plain",
            "CacheControl": "no-cache",
            "ACL": "bucket-owner-full-control",
            "StorageClass": "STANDARD_IA",
            "ServerSideEncryption": "aws:kms",
            "SSEKMSKeyId": "alias/media",
            "Tagging": "team=web",
            "Expires": "2024-05-01T00:00:00Z",
            "Metadata": {"origin": "upload"}
        }))
        .unwrap();
        let request = input.request().unwrap();

        assert_eq!(*request.method(), Method::PUT);
        assert_eq!(request.path(), "/media/docs/readme.txt");
        assert_eq!(request.body().as_ref(), b"hello world");
        assert_eq!(request.header_str("content-type"), Some("text/plain"));
        assert_eq!(request.header_str("cache-control"), Some("no-cache"));
        assert_eq!(request.header_str("x-amz-acl"), Some("bucket-owner-full-control"));
        assert_eq!(request.header_str("x-amz-storage-class"), Some("STANDARD_IA"));
        assert_eq!(request.header_str("x-amz-server-side-encryption"), Some("aws:kms"));
        assert_eq!(
            request.header_str("x-amz-server-side-encryption-aws-kms-key-id"),
            Some("alias/media")
        );
        assert_eq!(request.header_str("x-amz-tagging"), Some("team=web"));
        assert_eq!(request.header_str("expires"), Some("Wed, 01 May 2024 00:00:00 GMT"));
        assert_eq!(request.header_str("x-amz-meta-origin"), Some("upload"));
    }

    #[test]
    fn test_should_default_put_object_content_type() {
        let input = PutObjectInput {
            bucket: Some("b".to_owned()),
            key: Some("k".to_owned()),
            body: Some(Bytes::from_static(b"\x00\x01")),
            ..Default::default()
        };
        let request = input.request().unwrap();
        assert_eq!(request.header_str("content-type"), Some(OCTET_STREAM));
    }

    #[test]
    fn test_should_reject_put_object_with_unknown_storage_class() {
        let input = PutObjectInput::from_params(json!({
            "Bucket": "b", "Key": "k", "StorageClass": "COLD"
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
    fn test_should_reject_unknown_put_object_param() {
        let err = PutObjectInput::from_params(json!({"Bucket": "b", "Key": "k", "Colour": "red"}))
            .unwrap_err();
        assert!(matches!(err, InputError::InvalidParameters { .. }));
    }

    #[test]
    fn test_should_build_get_object_query_and_preconditions() {
        let input = GetObjectInput::from_params(json!({
            "Bucket": "media",
            "Key": "a/b.png",
            "Range": "bytes=0-99",
            "IfNoneMatch": "\"etag\"",
            "IfModifiedSince": "1994-11-06T08:49:37Z",
            "VersionId": "v1",
            "PartNumber": 2,
            "ResponseContentType": "image/png",
            "ResponseCacheControl": "max-age=60"
        }))
        .unwrap();
        let request = input.request().unwrap();

        assert_eq!(*request.method(), Method::GET);
        assert_eq!(
            request.path_and_query(),
            "/media/a/b.png?partNumber=2&response-cache-control=max-age%3D60\
             &response-content-type=image%2Fpng&versionId=v1"
        );
        assert_eq!(request.header_str("range"), Some("bytes=0-99"));
        assert_eq!(request.header_str("if-none-match"), Some("\"etag\""));
        assert_eq!(
            request.header_str("if-modified-since"),
            Some("Sun, 06 Nov 1994 08:49:37 GMT")
        );
    }

    #[test]
    fn test_should_build_head_object_without_response_overrides() {
        let input = HeadObjectInput::from_params(json!({
            "Bucket": "media", "Key": "a.png", "VersionId": "v9"
        }))
        .unwrap();
        let request = input.request().unwrap();
        assert_eq!(*request.method(), Method::HEAD);
        assert_eq!(request.path_and_query(), "/media/a.png?versionId=v9");

        let err = HeadObjectInput::from_params(json!({"Bucket": "b", "Key": "k", "ResponseContentType": "x"}))
            .unwrap_err();
        assert!(matches!(err, InputError::InvalidParameters { .. }));
    }

    #[test]
    fn test_should_build_delete_object_with_version() {
        let input = DeleteObjectInput::from_params(json!({
            "Bucket": "b", "Key": "old.log", "VersionId": "3", "BypassGovernanceRetention": true
        }))
        .unwrap();
        let request = input.request().unwrap();
        assert_eq!(*request.method(), Method::DELETE);
        assert_eq!(request.path_and_query(), "/b/old.log?versionId=3");
        assert_eq!(
            request.header_str("x-amz-bypass-governance-retention"),
            Some("true")
        );
    }

    #[test]
    fn test_should_build_delete_objects_with_checksum() {
        let input = DeleteObjectsInput::from_params(json!({
            "Bucket": "b",
            "Delete": {"Objects": [{"Key": "a"}, {"Key": "b", "VersionId": "2"}], "Quiet": false}
        }))
        .unwrap();
        let request = input.request().unwrap();

        assert_eq!(*request.method(), Method::POST);
        assert_eq!(request.path_and_query(), "/b?delete");
        assert_eq!(request.header_str("content-type"), Some("application/xml"));
        let md5 = crate::input::content_md5(request.body());
        assert_eq!(request.header_str("content-md5"), Some(md5.as_str()));
        let body = std::str::from_utf8(request.body()).unwrap();
        assert!(body.contains("<Quiet>false</Quiet><Object><Key>a</Key></Object>"));
    }

    #[test]
    fn test_should_keep_carriage_return_in_delete_key() {
        let input = DeleteObjectsInput::from_params(json!({
            "Bucket": "b",
            "Delete": {"Objects": [{"Key": "a\r\nb"}]}
        }))
        .unwrap();
        let request = input.request().unwrap();
        let body = std::str::from_utf8(request.body()).unwrap();
        assert!(body.contains("<Object><Key>a&#xD;&#xA;b</Key></Object>"));
        assert!(!body.contains('\r'));
        assert!(!body.contains('\n'));
    }

    #[test]
    fn test_should_require_delete_payload() {
        let input = DeleteObjectsInput {
            bucket: Some("b".to_owned()),
            ..Default::default()
        };
        assert!(matches!(
            input.request(),
            Err(InputError::MissingRequiredField { field: "Delete", .. })
        ));
    }

    #[test]
    fn test_should_build_copy_object_headers() {
        let input = CopyObjectInput::from_params(json!({
            "Bucket": "dest",
            "Key": "copy.txt",
            "CopySource": "src/original.txt",
            "MetadataDirective": "REPLACE",
            "Metadata": {"stage": "2"},
            "CopySourceIfMatch": "\"abc\""
        }))
        .unwrap();
        let request = input.request().unwrap();

        assert_eq!(*request.method(), Method::PUT);
        assert_eq!(request.path(), "/dest/copy.txt");
        assert_eq!(request.header_str("x-amz-copy-source"), Some("src/original.txt"));
        assert_eq!(request.header_str("x-amz-metadata-directive"), Some("REPLACE"));
        assert_eq!(request.header_str("x-amz-copy-source-if-match"), Some("\"abc\""));
        assert_eq!(request.header_str("x-amz-meta-stage"), Some("2"));
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_should_require_copy_source() {
        let input = CopyObjectInput {
            bucket: Some("b".to_owned()),
            key: Some("k".to_owned()),
            ..Default::default()
        };
        assert!(matches!(
            input.request(),
            Err(InputError::MissingRequiredField {
                shape: "CopyObjectInput",
                field: "CopySource"
            })
        ));
    }

    #[test]
    fn test_should_build_put_object_tagging() {
        let input = PutObjectTaggingInput::from_params(json!({
            "Bucket": "b",
            "Key": "k",
            "VersionId": "7",
            "Tagging": {"TagSet": [{"Key": "env", "Value": "dev"}]}
        }))
        .unwrap();
        let request = input.request().unwrap();

        assert_eq!(request.path_and_query(), "/b/k?tagging&versionId=7");
        assert!(request.header_str("content-md5").is_some());
        assert!(
            std::str::from_utf8(request.body())
                .unwrap()
                .contains("<TagSet><Tag><Key>env</Key><Value>dev</Value></Tag></TagSet>")
        );
    }

    #[test]
    fn test_should_reject_tag_without_value() {
        let input = PutObjectTaggingInput::from_params(json!({
            "Bucket": "b", "Key": "k", "Tagging": {"TagSet": [{"Key": "env"}]}
        }))
        .unwrap();
        assert!(matches!(
            input.request(),
            Err(InputError::MissingRequiredField {
                shape: "Tag",
                field: "Value"
            })
        ));
    }

    #[test]
    fn test_should_build_get_object_tagging() {
        let input = GetObjectTaggingInput {
            bucket: Some("b".to_owned()),
            key: Some("dir/k".to_owned()),
            ..Default::default()
        };
        let request = input.request().unwrap();
        assert_eq!(*request.method(), Method::GET);
        assert_eq!(request.path_and_query(), "/b/dir/k?tagging");
    }
}
