//! Listing outputs.

use quick_xml::Reader;
use ruststack_sdk_core::{ClientError, FromResponse, Response};
use ruststack_sdk_xml::deserialize::{
    for_each_child, read_bool, read_i32, read_text_content, skip_element,
};
use ruststack_sdk_xml::{XmlDeserialize, XmlError};

use super::xml_body;
use crate::types::{CommonPrefix, EncodingType, Object, RequestCharged};

/// Output for the `ListObjectsV2` operation, from `<ListBucketResult>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListObjectsV2Output {
    /// More keys follow; continue with `next_continuation_token`.
    pub is_truncated: Option<bool>,
    /// Flattened `<Contents>` entries.
    pub contents: Vec<Object>,
    /// Bucket name.
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub max_keys: Option<i32>,
    /// Flattened `<CommonPrefixes>` entries.
    pub common_prefixes: Vec<CommonPrefix>,
    /// When `url`, keys and prefixes in this page are URL-encoded.
    pub encoding_type: Option<EncodingType>,
    pub key_count: Option<i32>,
    pub continuation_token: Option<String>,
    pub next_continuation_token: Option<String>,
    pub start_after: Option<String>,
    /// HTTP header: `x-amz-request-charged`.
    pub request_charged: Option<RequestCharged>,
}

impl XmlDeserialize for ListObjectsV2Output {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        for_each_child(reader, "ListBucketResult", |reader, name| {
            match name {
                "IsTruncated" => out.is_truncated = Some(read_bool(reader)?),
                "Contents" => out.contents.push(Object::deserialize_xml(reader)?),
                "Name" => out.name = Some(read_text_content(reader)?),
                "Prefix" => out.prefix = Some(read_text_content(reader)?),
                "Delimiter" => out.delimiter = Some(read_text_content(reader)?),
                "MaxKeys" => out.max_keys = Some(read_i32(reader)?),
                "CommonPrefixes" => out.common_prefixes.push(CommonPrefix::deserialize_xml(reader)?),
                "EncodingType" => {
                    out.encoding_type = Some(EncodingType::from(read_text_content(reader)?));
                }
                "KeyCount" => out.key_count = Some(read_i32(reader)?),
                "ContinuationToken" => out.continuation_token = Some(read_text_content(reader)?),
                "NextContinuationToken" => {
                    out.next_continuation_token = Some(read_text_content(reader)?);
                }
                "StartAfter" => out.start_after = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl FromResponse for ListObjectsV2Output {
    fn from_response(response: Response) -> Result<Self, ClientError> {
        let mut output: Self = xml_body(&response)?;
        output.request_charged = response.header_enum("x-amz-request-charged");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::StatusCode;
    use ruststack_sdk_core::AwsInput;

    use crate::input::ListObjectsV2Input;

    fn ok(body: &'static [u8]) -> http::Response<Bytes> {
        http::Response::builder()
            .status(StatusCode::OK)
            .body(Bytes::from_static(body))
            .unwrap()
    }

    #[test]
    fn test_should_parse_list_bucket_result() {
        let output = ListObjectsV2Input::parse_response(ok(br#"<?xml version="1.0" encoding="UTF-8"?>
            <ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
                <Name>logs</Name>
                <Prefix>2024/</Prefix>
                <KeyCount>2</KeyCount>
                <MaxKeys>2</MaxKeys>
                <Delimiter>/</Delimiter>
                <IsTruncated>true</IsTruncated>
                <NextContinuationToken>1w41l63U0xa8q7smH50vCxyTQqdxo69O3EmK28Bi5PcROI4wI/EyIJg==</NextContinuationToken>
                <Contents>
                    <Key>2024/a.log</Key>
                    <LastModified>2024-03-01T10:00:00.000Z</LastModified>
                    <ETag>&quot;aaa&quot;</ETag>
                    <Size>10</Size>
                    <StorageClass>STANDARD</StorageClass>
                </Contents>
                <Contents>
                    <Key>2024/b.log</Key>
                    <Size>20</Size>
                </Contents>
                <CommonPrefixes><Prefix>2024/01/</Prefix></CommonPrefixes>
                <CommonPrefixes><Prefix>2024/02/</Prefix></CommonPrefixes>
            </ListBucketResult>"#))
        .unwrap();

        assert_eq!(output.name.as_deref(), Some("logs"));
        assert_eq!(output.is_truncated, Some(true));
        assert_eq!(output.key_count, Some(2));
        assert_eq!(output.contents.len(), 2);
        assert_eq!(output.contents[0].e_tag.as_deref(), Some("\"aaa\""));
        assert_eq!(output.contents[1].size, Some(20));
        assert_eq!(output.common_prefixes.len(), 2);
        assert_eq!(output.common_prefixes[1].prefix.as_deref(), Some("2024/02/"));
        assert!(output.next_continuation_token.is_some());
    }

    #[test]
    fn test_should_read_self_closing_prefix_as_empty() {
        let output = ListObjectsV2Input::parse_response(ok(
            b"<ListBucketResult><Name>empty</Name><Prefix/><KeyCount>0</KeyCount><IsTruncated>false</IsTruncated></ListBucketResult>",
        ))
        .unwrap();
        assert_eq!(output.prefix.as_deref(), Some(""));
        assert!(output.contents.is_empty());
        assert_eq!(output.key_count, Some(0));
    }

    #[test]
    fn test_should_decode_no_such_bucket() {
        let response = http::Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Bytes::from_static(
                b"<Error><Code>NoSuchBucket</Code><Message>The specified bucket does not exist</Message><BucketName>nope</BucketName></Error>",
            ))
            .unwrap();
        let err = ListObjectsV2Input::parse_response(response).unwrap_err();
        assert_eq!(err.service_code(), Some("NoSuchBucket"));
    }
}
