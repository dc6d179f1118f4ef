//! Response access helpers and JSON error decoding.

use std::collections::HashMap;
use std::str::FromStr;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::codec::parse_http_date;
use crate::error::{ClientError, ServiceError};

/// Header names carrying the request id, in lookup order.
const REQUEST_ID_HEADERS: &[&str] = &["x-amzn-requestid", "x-amz-request-id"];

/// An HTTP response received from a service.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl From<http::Response<Bytes>> for Response {
    fn from(response: http::Response<Bytes>) -> Self {
        let (parts, body) = response.into_parts();
        Self {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }
}

impl Response {
    /// Create a response from its parts.
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// The HTTP status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw body.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume the response and return the body.
    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// A header value as a string, if present and printable.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Owned variant of [`Response::header`].
    #[must_use]
    pub fn header_string(&self, name: &str) -> Option<String> {
        self.header(name).map(str::to_owned)
    }

    /// Parse a header value with [`FromStr`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidResponse`] when the header is present
    /// but does not parse.
    pub fn header_parse<T: FromStr>(&self, name: &str) -> Result<Option<T>, ClientError> {
        self.header(name)
            .map(|raw| {
                raw.trim().parse::<T>().map_err(|_| {
                    ClientError::InvalidResponse(format!("invalid {name} header: {raw:?}"))
                })
            })
            .transpose()
    }

    /// Parse a `true`/`false` header.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidResponse`] for any other value.
    pub fn header_bool(&self, name: &str) -> Result<Option<bool>, ClientError> {
        self.header_parse::<bool>(name)
    }

    /// Parse an HTTP date header.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidResponse`] when the date is malformed.
    pub fn header_http_date(&self, name: &str) -> Result<Option<DateTime<Utc>>, ClientError> {
        self.header(name)
            .map(|raw| {
                parse_http_date(raw).ok_or_else(|| {
                    ClientError::InvalidResponse(format!("invalid {name} header: {raw:?}"))
                })
            })
            .transpose()
    }

    /// Read a header into a model enum. Unknown values are kept.
    #[must_use]
    pub fn header_enum<E: for<'a> From<&'a str>>(&self, name: &str) -> Option<E> {
        self.header(name).map(E::from)
    }

    /// Collect headers starting with `prefix` (lowercase), keyed by the rest
    /// of the name. Used for `x-amz-meta-*` metadata.
    #[must_use]
    pub fn prefixed_headers(&self, prefix: &str) -> HashMap<String, String> {
        self.headers
            .iter()
            .filter_map(|(name, value)| {
                let key = name.as_str().strip_prefix(prefix)?;
                let value = value.to_str().ok()?;
                Some((key.to_owned(), value.to_owned()))
            })
            .collect()
    }

    /// The request id reported in the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<String> {
        REQUEST_ID_HEADERS
            .iter()
            .find_map(|name| self.header_string(name))
    }

    /// Decode a JSON body. An empty body decodes as `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidResponse`] when the body is not valid
    /// JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        let body: &[u8] = if self.body.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &self.body
        };
        serde_json::from_slice(body).map_err(ClientError::invalid_response)
    }
}

/// Output shapes decoded from a successful response.
pub trait FromResponse: Sized {
    /// Decode the output.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidResponse`] when the response is malformed.
    fn from_response(response: Response) -> Result<Self, ClientError>;
}

/// Operations without output members.
impl FromResponse for () {
    fn from_response(_response: Response) -> Result<Self, ClientError> {
        Ok(())
    }
}

/// Implement [`FromResponse`] for outputs that are exactly the JSON body.
#[macro_export]
macro_rules! json_output {
    ($($output:ty),+ $(,)?) => {
        $(
            impl $crate::response::FromResponse for $output {
                fn from_response(
                    response: $crate::response::Response,
                ) -> ::std::result::Result<Self, $crate::error::ClientError> {
                    response.json()
                }
            }
        )+
    };
}

/// Decode a JSON protocol error document.
///
/// The code is taken from `__type`, `code`, or the `x-amzn-ErrorType`
/// header, keeping only the part after `#` and before `:`.
#[must_use]
pub fn parse_json_error(response: &Response) -> ServiceError {
    let document: serde_json::Value =
        serde_json::from_slice(response.body()).unwrap_or(serde_json::Value::Null);
    let field = |names: &[&str]| {
        names
            .iter()
            .find_map(|name| document.get(*name).and_then(serde_json::Value::as_str))
            .map(str::to_owned)
    };

    let code = field(&["__type", "code", "Code"])
        .or_else(|| response.header_string("x-amzn-errortype"))
        .map(|raw| sanitize_error_code(&raw).to_owned())
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| fallback_code(response.status()));
    let message = field(&["message", "Message", "errorMessage"]).unwrap_or_default();

    ServiceError::new(response.status(), code, message).with_request_id(response.request_id())
}

/// Strip the shape namespace and any trailing URI from an error code.
#[must_use]
pub fn sanitize_error_code(raw: &str) -> &str {
    let without_uri = raw.split(':').next().unwrap_or(raw);
    without_uri.rsplit('#').next().unwrap_or(without_uri).trim()
}

/// Code used when the service sent no error code at all.
#[must_use]
pub fn fallback_code(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| "UnknownError".to_owned(), |reason| reason.replace(' ', ""))
}
