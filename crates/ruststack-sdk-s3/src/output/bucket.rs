//! Bucket-level outputs.

use ruststack_sdk_core::{ClientError, FromResponse, Response};

/// Output for the `CreateBucket` operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateBucketOutput {
    /// HTTP header: `Location`, e.g. `/logs`.
    pub location: Option<String>,
}

impl FromResponse for CreateBucketOutput {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        Ok(Self {
            location: response.header_string("location"),
        })
    }
}
