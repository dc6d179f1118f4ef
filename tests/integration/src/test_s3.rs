//! S3 integration tests: path-style requests, XML payloads, and the
//! multipart upload flow.

#[cfg(test)]
mod tests {
    use http::{Method, StatusCode};
    use ruststack_sdk_core::{AwsInput, ClientError};
    use ruststack_sdk_s3::input::{
        CompleteMultipartUploadInput, CreateMultipartUploadInput, DeleteObjectsInput,
        GetObjectInput, PutObjectInput, UploadPartInput,
    };
    use ruststack_sdk_s3::types::CompletedPart;
    use serde_json::json;

    use crate::{aws_config, canned_response, endpoint_url, local_config};

    #[test]
    fn test_should_send_put_object_to_local_endpoint() {
        let input = PutObjectInput::from_params(json!({
            "Bucket": "photos",
            "Key": "2024/cat.txt",
            "Body": "meow",
            "ContentType": "text/plain",
            "Metadata": {"owner": "alice"},
            "StorageClass": "STANDARD_IA"
        }))
        .unwrap();
        let request = input.build_http_request(&local_config()).unwrap();

        assert_eq!(*request.method(), Method::PUT);
        assert_eq!(
            request.uri().to_string(),
            format!("{}/photos/2024/cat.txt", endpoint_url().trim_end_matches('/'))
        );
        assert_eq!(request.headers()["content-type"], "text/plain");
        assert_eq!(request.headers()["x-amz-meta-owner"], "alice");
        assert_eq!(request.headers()["x-amz-storage-class"], "STANDARD_IA");
        assert_eq!(request.body().as_ref(), b"meow");
    }

    #[test]
    fn test_should_read_object_body_and_metadata() {
        let response = canned_response(
            StatusCode::OK,
            &[
                ("content-type", "text/plain"),
                ("content-length", "4"),
                ("etag", "\"4a8a08f09d37b73795649038408b5f33\""),
                ("x-amz-meta-owner", "alice"),
            ],
            "meow",
        );
        let output = GetObjectInput::parse_response(response).unwrap();
        assert_eq!(output.body.as_ref(), b"meow");
        assert_eq!(output.head.content_length, Some(4));
        assert_eq!(output.head.metadata.get("owner").map(String::as_str), Some("alice"));
    }

    #[test]
    fn test_should_checksum_delete_objects_document() {
        let input = DeleteObjectsInput::from_params(json!({
            "Bucket": "photos",
            "Delete": {"Objects": [{"Key": "a.txt"}, {"Key": "b.txt"}], "Quiet": true}
        }))
        .unwrap();
        let request = input.build_http_request(&aws_config("us-west-2")).unwrap();

        assert_eq!(
            request.uri().to_string(),
            "https://s3.us-west-2.amazonaws.com/photos?delete"
        );
        assert!(request.headers().contains_key("content-md5"));
        let body = std::str::from_utf8(request.body()).unwrap();
        assert!(body.starts_with("<?xml"));
        assert!(body.contains("<Object><Key>a.txt</Key></Object>"));
        assert!(body.contains("<Quiet>true</Quiet>"));
    }

    #[test]
    fn test_should_run_multipart_upload_flow() {
        let config = aws_config("eu-west-1");

        let create = CreateMultipartUploadInput::from_params(json!({
            "Bucket": "media",
            "Key": "video.mp4",
            "ContentType": "video/mp4"
        }))
        .unwrap();
        let request = create.build_http_request(&config).unwrap();
        assert_eq!(*request.method(), Method::POST);
        assert_eq!(
            request.uri().to_string(),
            "https://s3.eu-west-1.amazonaws.com/media/video.mp4?uploads"
        );

        let created = CreateMultipartUploadInput::parse_response(canned_response(
            StatusCode::OK,
            &[],
            "<InitiateMultipartUploadResult><Bucket>media</Bucket><Key>video.mp4</Key>\
             <UploadId>upload-1</UploadId></InitiateMultipartUploadResult>",
        ))
        .unwrap();
        let upload_id = created.upload_id.unwrap();

        let part = UploadPartInput::from_params(json!({
            "Bucket": "media",
            "Key": "video.mp4",
            "PartNumber": 1,
            "UploadId": upload_id,
            "Body": "frame data"
        }))
        .unwrap();
        let request = part.build_http_request(&config).unwrap();
        assert_eq!(
            request.uri().to_string(),
            "https://s3.eu-west-1.amazonaws.com/media/video.mp4?partNumber=1&uploadId=upload-1"
        );

        let uploaded = UploadPartInput::parse_response(canned_response(
            StatusCode::OK,
            &[("etag", "etag-1")],
            "",
        ))
        .unwrap();

        let complete = CompleteMultipartUploadInput {
            bucket: Some("media".to_owned()),
            key: Some("video.mp4".to_owned()),
            upload_id: Some(upload_id),
            multipart_upload: Some(ruststack_sdk_s3::types::CompletedMultipartUpload {
                parts: vec![CompletedPart {
                    part_number: Some(1),
                    e_tag: uploaded.e_tag,
                    ..Default::default()
                }],
            }),
            ..Default::default()
        };
        let request = complete.build_http_request(&config).unwrap();
        let body = std::str::from_utf8(request.body()).unwrap();
        assert!(body.contains("<Part><PartNumber>1</PartNumber><ETag>etag-1</ETag></Part>"));

        let completed = CompleteMultipartUploadInput::parse_response(canned_response(
            StatusCode::OK,
            &[],
            "<CompleteMultipartUploadResult><Bucket>media</Bucket><Key>video.mp4</Key>\
             <ETag>etag-final-1</ETag></CompleteMultipartUploadResult>",
        ))
        .unwrap();
        assert_eq!(completed.e_tag.as_deref(), Some("etag-final-1"));
    }

    #[test]
    fn test_should_map_missing_key_to_service_error() {
        let err = GetObjectInput::parse_response(canned_response(
            StatusCode::NOT_FOUND,
            &[("x-amz-request-id", "4442587FB7D0A2F9")],
            "<Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message></Error>",
        ))
        .unwrap_err();
        match err {
            ClientError::Service(e) => {
                assert_eq!(e.code, "NoSuchKey");
                assert_eq!(e.request_id.as_deref(), Some("4442587FB7D0A2F9"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
