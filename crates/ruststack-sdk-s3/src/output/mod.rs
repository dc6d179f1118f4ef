//! S3 output types, grouped by resource.
//!
//! Outputs combine response headers with, for some operations, an XML body.

mod bucket;
mod list;
mod multipart;
mod object;

use ruststack_sdk_core::{ClientError, Response};
use ruststack_sdk_xml::{XmlDeserialize, from_xml_or_default, parse_error, root_element};

pub use bucket::CreateBucketOutput;
pub use list::ListObjectsV2Output;
pub use multipart::{
    AbortMultipartUploadOutput, CompleteMultipartUploadOutput, CreateMultipartUploadOutput,
    UploadPartOutput,
};
pub use object::{
    CopyObjectOutput, DeleteObjectOutput, DeleteObjectsOutput, GetObjectOutput,
    GetObjectTaggingOutput, HeadObjectOutput, PutObjectOutput, PutObjectTaggingOutput,
};

/// Decode the XML body of a successful response.
///
/// `CopyObject` and `CompleteMultipartUpload` can fail after S3 has sent
/// `200 OK`, in which case the body is an `<Error>` document.
pub(crate) fn xml_body<T: XmlDeserialize + Default>(response: &Response) -> Result<T, ClientError> {
    if root_element(response.body())?.as_deref() == Some("Error") {
        return Err(parse_error(response).into());
    }
    Ok(from_xml_or_default(response.body())?)
}
