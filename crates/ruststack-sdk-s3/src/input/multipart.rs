//! Multipart upload inputs.

use std::collections::HashMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::Method;
use ruststack_sdk_core::codec::{date_time, text_blob};
use ruststack_sdk_core::input::{check_enum, required};
use ruststack_sdk_core::{AwsInput, InputError, Request, Service, Validate};
use serde::Deserialize;

use super::{OCTET_STREAM, metadata_headers, object_path, set_xml_payload, sse_customer_headers};
use crate::SERVICE;
use crate::output::{
    AbortMultipartUploadOutput, CompleteMultipartUploadOutput, CreateMultipartUploadOutput,
    UploadPartOutput,
};
use crate::types::{
    CompletedMultipartUpload, ObjectCannedACL, RequestPayer, ServerSideEncryption, StorageClass,
    check_headers,
};

/// Input for the `CreateMultipartUpload` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreateMultipartUploadInput {
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

    /// HTTP header: `Content-Type`. Applies to the assembled object.
    #[serde(default)]
    pub content_type: Option<String>,

    /// HTTP header: `Expires`.
    #[serde(default, with = "date_time")]
    pub expires: Option<DateTime<Utc>>,

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
}

impl Validate for CreateMultipartUploadInput {
    fn validate(&self) -> Result<(), InputError> {
        required("CreateMultipartUploadInput", "Bucket", &self.bucket)?;
        required("CreateMultipartUploadInput", "Key", &self.key)?;
        check_headers(
            "CreateMultipartUploadInput",
            self.acl.as_ref(),
            self.storage_class.as_ref(),
            self.server_side_encryption.as_ref(),
        )?;
        check_enum("CreateMultipartUploadInput", "RequestPayer", self.request_payer.as_ref())?;
        Ok(())
    }
}

impl AwsInput for CreateMultipartUploadInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "CreateMultipartUpload";
    type Output = CreateMultipartUploadOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let path = object_path("CreateMultipartUploadInput", &self.bucket, &self.key)?;
        let mut request = Request::new(Method::POST, path);
        request.query("uploads", "");
        request.header_opt("x-amz-acl", self.acl.as_ref())?;
        request.header_opt("Cache-Control", self.cache_control.as_deref())?;
        request.header_opt("Content-Disposition", self.content_disposition.as_deref())?;
        request.header_opt("Content-Encoding", self.content_encoding.as_deref())?;
        request.header_opt("Content-Language", self.content_language.as_deref())?;
        request.header_opt("Content-Type", self.content_type.as_deref())?;
        request.header_timestamp("Expires", self.expires.as_ref())?;
        metadata_headers(&mut request, &self.metadata)?;
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
        Ok(request)
    }
}

/// Input for the `UploadPart` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct UploadPartInput {
    /// HTTP payload. Given as text in the parameter map.
    #[serde(default, with = "text_blob")]
    pub body: Option<Bytes>,

    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP header: `Content-Length`.
    #[serde(default)]
    pub content_length: Option<i64>,

    /// HTTP header: `Content-MD5`.
    #[serde(rename = "ContentMD5", default)]
    pub content_md5: Option<String>,

    /// HTTP label (URI path, greedy). Required.
    #[serde(default)]
    pub key: Option<String>,

    /// HTTP query: `partNumber`. Required, 1 to 10000.
    #[serde(default)]
    pub part_number: Option<i32>,

    /// HTTP query: `uploadId`. Required.
    #[serde(default)]
    pub upload_id: Option<String>,

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

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,
}

impl Validate for UploadPartInput {
    fn validate(&self) -> Result<(), InputError> {
        required("UploadPartInput", "Bucket", &self.bucket)?;
        required("UploadPartInput", "Key", &self.key)?;
        required("UploadPartInput", "PartNumber", &self.part_number)?;
        required("UploadPartInput", "UploadId", &self.upload_id)?;
        check_enum("UploadPartInput", "RequestPayer", self.request_payer.as_ref())?;
        Ok(())
    }
}

impl AwsInput for UploadPartInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "UploadPart";
    type Output = UploadPartOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let path = object_path("UploadPartInput", &self.bucket, &self.key)?;
        let mut request = Request::new(Method::PUT, path);
        request.query_opt("partNumber", self.part_number);
        request.query_opt("uploadId", self.upload_id.as_deref());
        request.header_opt("Content-Length", self.content_length)?;
        request.header_opt("Content-MD5", self.content_md5.as_deref())?;
        sse_customer_headers(
            &mut request,
            self.sse_customer_algorithm.as_deref(),
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        request.header_opt("x-amz-request-payer", self.request_payer.as_ref())?;
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        if let Some(body) = &self.body {
            request.set_body(OCTET_STREAM, body.clone())?;
        }
        Ok(request)
    }
}

/// Input for the `CompleteMultipartUpload` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CompleteMultipartUploadInput {
    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP label (URI path, greedy). Required.
    #[serde(default)]
    pub key: Option<String>,

    /// HTTP payload.
    #[serde(default)]
    pub multipart_upload: Option<CompletedMultipartUpload>,

    /// HTTP query: `uploadId`. Required.
    #[serde(default)]
    pub upload_id: Option<String>,

    /// HTTP header: `x-amz-request-payer`.
    #[serde(default)]
    pub request_payer: Option<RequestPayer>,

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,

    /// HTTP header: `If-None-Match`.
    #[serde(default)]
    pub if_none_match: Option<String>,
}

impl Validate for CompleteMultipartUploadInput {
    fn validate(&self) -> Result<(), InputError> {
        required("CompleteMultipartUploadInput", "Bucket", &self.bucket)?;
        required("CompleteMultipartUploadInput", "Key", &self.key)?;
        required("CompleteMultipartUploadInput", "UploadId", &self.upload_id)?;
        check_enum(
            "CompleteMultipartUploadInput",
            "RequestPayer",
            self.request_payer.as_ref(),
        )?;
        Ok(())
    }
}

impl AwsInput for CompleteMultipartUploadInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "CompleteMultipartUpload";
    type Output = CompleteMultipartUploadOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let path = object_path("CompleteMultipartUploadInput", &self.bucket, &self.key)?;
        let mut request = Request::new(Method::POST, path);
        request.query_opt("uploadId", self.upload_id.as_deref());
        request.header_opt("x-amz-request-payer", self.request_payer.as_ref())?;
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        request.header_opt("If-None-Match", self.if_none_match.as_deref())?;
        if let Some(upload) = &self.multipart_upload {
            set_xml_payload(
                &mut request,
                "CompleteMultipartUploadInput",
                "CompleteMultipartUpload",
                upload,
                false,
            )?;
        }
        Ok(request)
    }
}

/// Input for the `AbortMultipartUpload` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AbortMultipartUploadInput {
    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP label (URI path, greedy). Required.
    #[serde(default)]
    pub key: Option<String>,

    /// HTTP query: `uploadId`. Required.
    #[serde(default)]
    pub upload_id: Option<String>,

    /// HTTP header: `x-amz-request-payer`.
    #[serde(default)]
    pub request_payer: Option<RequestPayer>,

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,
}

impl Validate for AbortMultipartUploadInput {
    fn validate(&self) -> Result<(), InputError> {
        required("AbortMultipartUploadInput", "Bucket", &self.bucket)?;
        required("AbortMultipartUploadInput", "Key", &self.key)?;
        required("AbortMultipartUploadInput", "UploadId", &self.upload_id)?;
        check_enum("AbortMultipartUploadInput", "RequestPayer", self.request_payer.as_ref())?;
        Ok(())
    }
}

impl AwsInput for AbortMultipartUploadInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "AbortMultipartUpload";
    type Output = AbortMultipartUploadOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let path = object_path("AbortMultipartUploadInput", &self.bucket, &self.key)?;
        let mut request = Request::new(Method::DELETE, path);
        request.query_opt("uploadId", self.upload_id.as_deref());
        request.header_opt("x-amz-request-payer", self.request_payer.as_ref())?;
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_build_create_multipart_upload() {
        let input = CreateMultipartUploadInput::from_params(json!({
            "Bucket": "b",
            "Key": "videos/big.mp4",
            "ContentType": "video/mp4",
            "StorageClass": "INTELLIGENT_TIERING",
            "Metadata": {"source": "camera"}
        }))
        .unwrap();
        let request = input.request().unwrap();

        assert_eq!(*request.method(), Method::POST);
        assert_eq!(request.path_and_query(), "/b/videos/big.mp4?uploads");
        assert_eq!(request.header_str("content-type"), Some("video/mp4"));
        assert_eq!(request.header_str("x-amz-storage-class"), Some("INTELLIGENT_TIERING"));
        assert_eq!(request.header_str("x-amz-meta-source"), Some("camera"));
    }

    #[test]
    fn test_should_build_upload_part_query() {
        let input = UploadPartInput::from_params(json!({
            "Bucket": "b",
            "Key": "videos/big.mp4",
            "PartNumber": 3,
            "UploadId": "VXBsb2FkIElE+",
            "Body": "part-three"
        }))
        .unwrap();
        let request = input.request().unwrap();

        assert_eq!(*request.method(), Method::PUT);
        assert_eq!(
            request.path_and_query(),
            "/b/videos/big.mp4?partNumber=3&uploadId=VXBsb2FkIElE%2B"
        );
        assert_eq!(request.body().as_ref(), b"part-three");
    }

    #[test]
    fn test_should_require_upload_part_identity() {
        let input = UploadPartInput::from_params(json!({
            "Bucket": "b", "Key": "k", "UploadId": "u"
        }))
        .unwrap();
        assert!(matches!(
            input.request(),
            Err(InputError::MissingRequiredField {
                field: "PartNumber",
                ..
            })
        ));
    }

    #[test]
    fn test_should_build_complete_multipart_upload_body() {
        let input = CompleteMultipartUploadInput::from_params(json!({
            "Bucket": "b",
            "Key": "k",
            "UploadId": "u-1",
            "MultipartUpload": {"Parts": [{"PartNumber": 1, "ETag": "e1"}, {"PartNumber": 2, "ETag": "e2"}]}
        }))
        .unwrap();
        let request = input.request().unwrap();

        assert_eq!(*request.method(), Method::POST);
        assert_eq!(request.path_and_query(), "/b/k?uploadId=u-1");
        let body = std::str::from_utf8(request.body()).unwrap();
        assert!(body.contains(
            "<CompleteMultipartUpload xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
             <Part><PartNumber>1</PartNumber><ETag>e1</ETag></Part>\
             <Part><PartNumber>2</PartNumber><ETag>e2</ETag></Part></CompleteMultipartUpload>"
        ));
    }

    #[test]
    fn test_should_build_abort_multipart_upload() {
        let input = AbortMultipartUploadInput {
            bucket: Some("b".to_owned()),
            key: Some("k".to_owned()),
            upload_id: Some("u-1".to_owned()),
            ..Default::default()
        };
        let request = input.request().unwrap();
        assert_eq!(*request.method(), Method::DELETE);
        assert_eq!(request.path_and_query(), "/b/k?uploadId=u-1");

        let missing = AbortMultipartUploadInput {
            upload_id: None,
            ..input
        };
        assert!(matches!(
            missing.request(),
            Err(InputError::MissingRequiredField {
                field: "UploadId",
                ..
            })
        ));
    }
}
