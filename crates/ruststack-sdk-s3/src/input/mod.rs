//! S3 input types, grouped by resource.
//!
//! Each member is bound to one place in the request: a URI label, a query
//! parameter, a header, or the payload. The binding is noted on the field.

mod bucket;
mod list;
mod multipart;
mod object;

use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use md5::{Digest, Md5};
use ruststack_sdk_core::uri::{required_greedy_label, required_label};
use ruststack_sdk_core::{InputError, Request};
use ruststack_sdk_xml::{XmlSerialize, to_xml};

pub use bucket::{CreateBucketInput, PutBucketCorsInput};
pub use list::ListObjectsV2Input;
pub use multipart::{
    AbortMultipartUploadInput, CompleteMultipartUploadInput, CreateMultipartUploadInput,
    UploadPartInput,
};
pub use object::{
    CopyObjectInput, DeleteObjectInput, DeleteObjectsInput, GetObjectInput,
    GetObjectTaggingInput, HeadObjectInput, PutObjectInput, PutObjectTaggingInput,
};

use crate::NAMESPACE;

/// Content type of raw payloads sent without an explicit `ContentType`.
pub(crate) const OCTET_STREAM: &str = "application/octet-stream";

/// Prefix of user metadata headers.
pub(crate) const META_PREFIX: &str = "x-amz-meta-";

/// `/{Bucket}`.
pub(crate) fn bucket_path(shape: &'static str, bucket: &Option<String>) -> Result<String, InputError> {
    Ok(format!("/{}", required_label(shape, "Bucket", bucket)?))
}

/// `/{Bucket}/{Key+}`. The key keeps its `/` separators.
pub(crate) fn object_path(
    shape: &'static str,
    bucket: &Option<String>,
    key: &Option<String>,
) -> Result<String, InputError> {
    let bucket = required_label(shape, "Bucket", bucket)?;
    let key = required_greedy_label(shape, "Key", key)?;
    Ok(format!("/{bucket}/{key}"))
}

/// Base64 of the MD5 digest, as carried by `Content-MD5`.
pub(crate) fn content_md5(body: &[u8]) -> String {
    STANDARD.encode(Md5::digest(body))
}

/// Serialize `value` as the XML payload under `root`.
///
/// With `checksum`, `Content-MD5` is computed from the document unless the
/// caller supplied one.
pub(crate) fn set_xml_payload<T: XmlSerialize>(
    request: &mut Request,
    shape: &'static str,
    root: &str,
    value: &T,
    checksum: bool,
) -> Result<(), InputError> {
    let body = to_xml(root, Some(NAMESPACE), value).map_err(|e| e.into_input_error(shape))?;
    if checksum && request.header_str("content-md5").is_none() {
        request.header("Content-MD5", &content_md5(&body))?;
    }
    request.set_body(crate::SERVICE.protocol.content_type(), body)
}

/// One `x-amz-meta-{name}` header per metadata entry.
pub(crate) fn metadata_headers(
    request: &mut Request,
    metadata: &HashMap<String, String>,
) -> Result<(), InputError> {
    for (name, value) in metadata {
        request.header(&format!("{META_PREFIX}{name}"), value)?;
    }
    Ok(())
}

/// The SSE-C triple shared by object reads and writes.
pub(crate) fn sse_customer_headers(
    request: &mut Request,
    algorithm: Option<&str>,
    key: Option<&str>,
    key_md5: Option<&str>,
) -> Result<(), InputError> {
    request.header_opt("x-amz-server-side-encryption-customer-algorithm", algorithm)?;
    request.header_opt("x-amz-server-side-encryption-customer-key", key)?;
    request.header_opt("x-amz-server-side-encryption-customer-key-MD5", key_md5)?;
    Ok(())
}
