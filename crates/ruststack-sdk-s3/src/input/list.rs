//! Listing inputs.

use http::Method;
use ruststack_sdk_core::input::{check_enum, required};
use ruststack_sdk_core::{AwsInput, InputError, Request, Service, Validate};
use serde::Deserialize;

use super::bucket_path;
use crate::SERVICE;
use crate::output::ListObjectsV2Output;
use crate::types::{EncodingType, RequestPayer};

/// Input for the `ListObjectsV2` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ListObjectsV2Input {
    /// HTTP label (URI path). Required.
    #[serde(default)]
    pub bucket: Option<String>,

    /// HTTP query: `delimiter`.
    #[serde(default)]
    pub delimiter: Option<String>,

    /// HTTP query: `encoding-type`.
    #[serde(default)]
    pub encoding_type: Option<EncodingType>,

    /// HTTP query: `max-keys`. S3 caps pages at 1000.
    #[serde(default)]
    pub max_keys: Option<i32>,

    /// HTTP query: `prefix`.
    #[serde(default)]
    pub prefix: Option<String>,

    /// HTTP query: `continuation-token`.
    #[serde(default)]
    pub continuation_token: Option<String>,

    /// HTTP query: `fetch-owner`.
    #[serde(default)]
    pub fetch_owner: Option<bool>,

    /// HTTP query: `start-after`.
    #[serde(default)]
    pub start_after: Option<String>,

    /// HTTP header: `x-amz-request-payer`.
    #[serde(default)]
    pub request_payer: Option<RequestPayer>,

    /// HTTP header: `x-amz-expected-bucket-owner`.
    #[serde(default)]
    pub expected_bucket_owner: Option<String>,
}

impl Validate for ListObjectsV2Input {
    fn validate(&self) -> Result<(), InputError> {
        required("ListObjectsV2Input", "Bucket", &self.bucket)?;
        check_enum("ListObjectsV2Input", "EncodingType", self.encoding_type.as_ref())?;
        check_enum("ListObjectsV2Input", "RequestPayer", self.request_payer.as_ref())?;
        Ok(())
    }
}

impl AwsInput for ListObjectsV2Input {
    const SERVICE: Service = SERVICE;
    const OPERATION: &'static str = "ListObjectsV2";
    type Output = ListObjectsV2Output;

    fn request(&self) -> Result<Request, InputError> {
        self.validate()?;
        let mut request = Request::new(Method::GET, bucket_path("ListObjectsV2Input", &self.bucket)?);
        request.query("list-type", "2");
        request.query_opt("continuation-token", self.continuation_token.as_deref());
        request.query_opt("delimiter", self.delimiter.as_deref());
        request.query_opt("encoding-type", self.encoding_type.as_ref());
        request.query_opt("fetch-owner", self.fetch_owner);
        request.query_opt("max-keys", self.max_keys);
        request.query_opt("prefix", self.prefix.as_deref());
        request.query_opt("start-after", self.start_after.as_deref());
        request.header_opt("x-amz-request-payer", self.request_payer.as_ref())?;
        request.header_opt("x-amz-expected-bucket-owner", self.expected_bucket_owner.as_deref())?;
        Ok(request)
    }
}
