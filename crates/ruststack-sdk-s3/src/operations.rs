//! S3 operation enum.

use std::fmt;

use bytes::Bytes;
use ruststack_sdk_core::{AwsInput, ClientConfig, ClientError};

use crate::input::{
    AbortMultipartUploadInput, CompleteMultipartUploadInput, CopyObjectInput, CreateBucketInput,
    CreateMultipartUploadInput, DeleteObjectInput, DeleteObjectsInput, GetObjectInput,
    GetObjectTaggingInput, HeadObjectInput, ListObjectsV2Input, PutBucketCorsInput,
    PutObjectInput, PutObjectTaggingInput, UploadPartInput,
};

/// All supported S3 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum S3Operation {
    // Bucket
    CreateBucket,
    PutBucketCors,
    // Object
    PutObject,
    GetObject,
    HeadObject,
    DeleteObject,
    DeleteObjects,
    CopyObject,
    PutObjectTagging,
    GetObjectTagging,
    // List
    ListObjectsV2,
    // Multipart
    CreateMultipartUpload,
    UploadPart,
    CompleteMultipartUpload,
    AbortMultipartUpload,
}

impl S3Operation {
    /// All operations, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CreateBucket,
        Self::PutBucketCors,
        Self::PutObject,
        Self::GetObject,
        Self::HeadObject,
        Self::DeleteObject,
        Self::DeleteObjects,
        Self::CopyObject,
        Self::PutObjectTagging,
        Self::GetObjectTagging,
        Self::ListObjectsV2,
        Self::CreateMultipartUpload,
        Self::UploadPart,
        Self::CompleteMultipartUpload,
        Self::AbortMultipartUpload,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateBucket => "CreateBucket",
            Self::PutBucketCors => "PutBucketCors",
            Self::PutObject => "PutObject",
            Self::GetObject => "GetObject",
            Self::HeadObject => "HeadObject",
            Self::DeleteObject => "DeleteObject",
            Self::DeleteObjects => "DeleteObjects",
            Self::CopyObject => "CopyObject",
            Self::PutObjectTagging => "PutObjectTagging",
            Self::GetObjectTagging => "GetObjectTagging",
            Self::ListObjectsV2 => "ListObjectsV2",
            Self::CreateMultipartUpload => "CreateMultipartUpload",
            Self::UploadPart => "UploadPart",
            Self::CompleteMultipartUpload => "CompleteMultipartUpload",
            Self::AbortMultipartUpload => "AbortMultipartUpload",
        }
    }

    /// Parse an operation name string into an `S3Operation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// Returns `true` for operations whose request carries an XML document.
    #[must_use]
    pub fn has_xml_payload(&self) -> bool {
        matches!(
            self,
            Self::CreateBucket
                | Self::PutBucketCors
                | Self::DeleteObjects
                | Self::PutObjectTagging
                | Self::CompleteMultipartUpload
        )
    }

    /// Build the HTTP request for this operation from a named-parameter map.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the parameters do not map onto the input
    /// shape, fail validation, or the endpoint cannot be resolved.
    pub fn build_http_request(
        self,
        params: serde_json::Value,
        config: &ClientConfig,
    ) -> Result<http::Request<Bytes>, ClientError> {
        match self {
            Self::CreateBucket => CreateBucketInput::from_params(params)?.build_http_request(config),
            Self::PutBucketCors => {
                PutBucketCorsInput::from_params(params)?.build_http_request(config)
            }
            Self::PutObject => PutObjectInput::from_params(params)?.build_http_request(config),
            Self::GetObject => GetObjectInput::from_params(params)?.build_http_request(config),
            Self::HeadObject => HeadObjectInput::from_params(params)?.build_http_request(config),
            Self::DeleteObject => DeleteObjectInput::from_params(params)?.build_http_request(config),
            Self::DeleteObjects => {
                DeleteObjectsInput::from_params(params)?.build_http_request(config)
            }
            Self::CopyObject => CopyObjectInput::from_params(params)?.build_http_request(config),
            Self::PutObjectTagging => {
                PutObjectTaggingInput::from_params(params)?.build_http_request(config)
            }
            Self::GetObjectTagging => {
                GetObjectTaggingInput::from_params(params)?.build_http_request(config)
            }
            Self::ListObjectsV2 => {
                ListObjectsV2Input::from_params(params)?.build_http_request(config)
            }
            Self::CreateMultipartUpload => {
                CreateMultipartUploadInput::from_params(params)?.build_http_request(config)
            }
            Self::UploadPart => UploadPartInput::from_params(params)?.build_http_request(config),
            Self::CompleteMultipartUpload => {
                CompleteMultipartUploadInput::from_params(params)?.build_http_request(config)
            }
            Self::AbortMultipartUpload => {
                AbortMultipartUploadInput::from_params(params)?.build_http_request(config)
            }
        }
    }
}

impl fmt::Display for S3Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
