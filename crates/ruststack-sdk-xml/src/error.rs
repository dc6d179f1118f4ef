//! XML error types and AWS XML error document decoding.

use std::io;

use quick_xml::Reader;
use quick_xml::events::Event;
use ruststack_sdk_core::error::{ClientError, InputError, ServiceError};
use ruststack_sdk_core::response::{Response, fallback_code};

use crate::deserialize::{element_name, resolve_reference};

/// Errors that can occur during XML serialization or deserialization.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}

impl From<XmlError> for ClientError {
    fn from(err: XmlError) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

impl XmlError {
    /// Convert into an [`InputError`] for the given input shape.
    #[must_use]
    pub fn into_input_error(self, shape: &'static str) -> InputError {
        InputError::serialization(shape, self)
    }
}

/// Decode an AWS XML error document.
///
/// Accepts both the bare S3 form and the query protocol form:
///
/// ```xml
/// <Error><Code>NoSuchKey</Code><Message>...</Message><RequestId>...</RequestId></Error>
///
/// <ErrorResponse>
///   <Error><Type>Sender</Type><Code>NotFound</Code><Message>...</Message></Error>
///   <RequestId>...</RequestId>
/// </ErrorResponse>
/// ```
///
/// Bodiless errors (S3 `HEAD`) fall back to the status reason as the code
/// and to the request id headers.
#[must_use]
pub fn parse_error(response: &Response) -> ServiceError {
    let fields = match read_error_fields(response.body()) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::debug!(error = %e, "malformed XML error document");
            ErrorFields::default()
        }
    };

    let code = fields
        .code
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| fallback_code(response.status()));
    let request_id = fields.request_id.or_else(|| response.request_id());

    ServiceError::new(response.status(), code, fields.message.unwrap_or_default())
        .with_request_id(request_id)
}

#[derive(Debug, Default)]
struct ErrorFields {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

fn read_error_fields(body: &[u8]) -> Result<ErrorFields, XmlError> {
    let mut reader = Reader::from_reader(body);
    let mut fields = ErrorFields::default();
    let mut path: Vec<String> = Vec::new();
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                path.push(element_name(&e)?);
                text.clear();
            }
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(e) => {
                let raw: &[u8] = &e;
                text.push(resolve_reference(raw)?);
            }
            Event::End(_) => {
                let name = path.pop().unwrap_or_default();
                let parent = path.last().map(String::as_str);
                let value = text.trim().to_owned();
                match (parent, name.as_str()) {
                    (Some("Error"), "Code") => fields.code = Some(value),
                    (Some("Error"), "Message") => fields.message = Some(value),
                    (Some("Error" | "ErrorResponse"), "RequestId") => {
                        fields.request_id = Some(value);
                    }
                    _ => {}
                }
                text.clear();
            }
            Event::Eof => return Ok(fields),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::{HeaderMap, HeaderValue, StatusCode};

    use super::*;

    fn response(status: StatusCode, body: &'static str) -> Response {
        Response::new(status, HeaderMap::new(), Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn test_should_parse_bare_error() {
        let resp = response(
            StatusCode::NOT_FOUND,
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <Error>
                <Code>NoSuchKey</Code>
                <Message>The specified key does not exist.</Message>
                <Key>photos/a.jpg</Key>
                <RequestId>4442587FB7D0A2F9</RequestId>
            </Error>"#,
        );
        let err = parse_error(&resp);
        assert_eq!(err.code, "NoSuchKey");
        assert_eq!(err.message, "The specified key does not exist.");
        assert_eq!(err.request_id.as_deref(), Some("4442587FB7D0A2F9"));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_should_parse_wrapped_error() {
        let resp = response(
            StatusCode::BAD_REQUEST,
            r#"<ErrorResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
                <Error>
                    <Type>Sender</Type>
                    <Code>InvalidParameter</Code>
                    <Message>Invalid parameter: TopicArn</Message>
                </Error>
                <RequestId>b6e1c1f2-0000-0000-0000-000000000000</RequestId>
            </ErrorResponse>"#,
        );
        let err = parse_error(&resp);
        assert_eq!(err.code, "InvalidParameter");
        assert_eq!(err.message, "Invalid parameter: TopicArn");
        assert_eq!(
            err.request_id.as_deref(),
            Some("b6e1c1f2-0000-0000-0000-000000000000")
        );
    }

    #[test]
    fn test_should_fall_back_for_empty_body() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amz-request-id", HeaderValue::from_static("REQ123"));
        let resp = Response::new(StatusCode::NOT_FOUND, headers, Bytes::new());

        let err = parse_error(&resp);
        assert_eq!(err.code, "NotFound");
        assert!(err.message.is_empty());
        assert_eq!(err.request_id.as_deref(), Some("REQ123"));
    }

    #[test]
    fn test_should_convert_into_client_error() {
        let err: ClientError = XmlError::MissingElement("root element".to_owned()).into();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
