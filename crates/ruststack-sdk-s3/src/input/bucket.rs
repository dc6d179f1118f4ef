//! Bucket-level inputs.

use http::Method;
use ruststack_sdk_core::input::{check_enum, required, validate_opt};
use ruststack_sdk_core::{AwsInput, InputError, Request, Service, Validate};
use serde::Deserialize;

use super::{bucket_path, set_xml_payload};
use crate::SERVICE;
use crate::output::CreateBucketOutput;
use crate::types::{BucketCannedACL, CORSConfiguration, CreateBucketConfiguration, ObjectOwnership};

/// Input for the `CreateBucket` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreateBucketInput {
    /// HTTP header: `x-amz-acl`.
    #[serde(rename = "ACL", default)]
    pub acl: Option<BucketCannedACL>,

    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP payload.
    #[serde(default)]
    pub create_bucket_configuration: Option<CreateBucketConfiguration>,

    /// HTTP header: `x-amz-grant-full-control`.
    #[serde(default)]
    pub grant_full_control: Option<String>,

    /// HTTP header: `x-amz-grant-read`.
    #[serde(default)]
    pub grant_read: Option<String>,

    /// HTTP header: `x-amz-grant-read-acp`.
    #[serde(rename = "GrantReadACP", default)]
    pub grant_read_acp: Option<String>,

    /// HTTP header: `x-amz-grant-write`.
    #[serde(default)]
    pub grant_write: Option<String>,

    /// HTTP header: `x-amz-grant-write-acp`.
    #[serde(rename = "GrantWriteACP", default)]
    pub grant_write_acp: Option<String>,

    /// HTTP header: `x-amz-bucket-object-lock-enabled`.
    #[serde(default)]
    pub object_lock_enabled_for_bucket: Option<bool>,

    /// HTTP header: `x-amz-object-ownership`.
    #[serde(default)]
    pub object_ownership: Option<ObjectOwnership>,
}

impl Validate for CreateBucketInput {
    fn validate(&self) -> Result<(), InputError> {
        required("CreateBucketInput", "Bucket", &self.bucket)?;
        check_enum("CreateBucketInput", "ACL", self.acl.as_ref())?;
        check_enum("CreateBucketInput", "ObjectOwnership", self.object_ownership.as_ref())?;
        Ok(())
    }
}

impl AwsInput for CreateBucketInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "CreateBucket";
    type Output = CreateBucketOutput;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let mut request = Request::new(Method::PUT, bucket_path("CreateBucketInput", &self.bucket)?);
        request.header_opt("x-amz-acl", self.acl.as_ref())?;
        request.header_opt("x-amz-grant-full-control", self.grant_full_control.as_deref())?;
        request.header_opt("x-amz-grant-read", self.grant_read.as_deref())?;
        request.header_opt("x-amz-grant-read-acp", self.grant_read_acp.as_deref())?;
        request.header_opt("x-amz-grant-write", self.grant_write.as_deref())?;
        request.header_opt("x-amz-grant-write-acp", self.grant_write_acp.as_deref())?;
        request.header_opt(
            "x-amz-bucket-object-lock-enabled",
            self.object_lock_enabled_for_bucket,
        )?;
        request.header_opt("x-amz-object-ownership", self.object_ownership.as_ref())?;
        if let Some(configuration) = &self.create_bucket_configuration {
            set_xml_payload(
                &mut request,
                "CreateBucketInput",
                "CreateBucketConfiguration",
                configuration,
                false,
            )?;
        }
        Ok(request)
    }
}

/// Input for the `PutBucketCors` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PutBucketCorsInput {
    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP payload. Required.
    #[serde(rename = "CORSConfiguration", default)]
    pub cors_configuration: Option<CORSConfiguration>,

    /// HTTP header: `Content-MD5`. Computed when absent.
    #[serde(rename = "ContentMD5", default)]
    pub content_md5: Option<String>,

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,
}

impl Validate for PutBucketCorsInput {
    fn validate(&self) -> Result<(), InputError> {
        required("PutBucketCorsInput", "Bucket", &self.bucket)?;
        required("PutBucketCorsInput", "CORSConfiguration", &self.cors_configuration)?;
        validate_opt(self.cors_configuration.as_ref())
    }
}

impl AwsInput for PutBucketCorsInput {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "PutBucketCors";
    type Output = ();

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let configuration = required("PutBucketCorsInput", "CORSConfiguration", &self.cors_configuration)?;
        let mut request = Request::new(Method::PUT, bucket_path("PutBucketCorsInput", &self.bucket)?);
        request.query("cors", "");
        request.header_opt("Content-MD5", self.content_md5.as_deref())?;
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        set_xml_payload(
            &mut request,
            "PutBucketCorsInput",
            "CORSConfiguration",
            configuration,
            true,
        )?;
        Ok(request)
    }
}
