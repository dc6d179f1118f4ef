//! Protocol-neutral request fragment produced by every input shape.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};

use crate::codec::format_http_date;
use crate::config::ClientConfig;
use crate::error::{ClientError, InputError};
use crate::service::Service;
use crate::uri::query_string;

/// Header carrying the JSON RPC operation name.
pub const X_AMZ_TARGET: &str = "x-amz-target";

/// An HTTP request before it is bound to an endpoint.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
    host_prefix: Option<String>,
}

impl Request {
    /// Create a request for the given method and already-encoded path.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
            host_prefix: None,
        }
    }

    /// Create a JSON RPC request: `POST /` with `X-Amz-Target` and a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidHeader`] if the target is not a valid header value.
    pub fn json_rpc(service: &Service, operation: &str, body: Vec<u8>) -> Result<Self, InputError> {
        let mut request = Self::new(Method::POST, "/");
        request.header(X_AMZ_TARGET, &service.target(operation))?;
        request.set_body(service.protocol.content_type(), body)?;
        Ok(request)
    }

    /// Create a query protocol request: `POST /` with a form-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidHeader`] if the content type is rejected.
    pub fn form(service: &Service, body: Vec<u8>) -> Result<Self, InputError> {
        let mut request = Self::new(Method::POST, "/");
        request.set_body(service.protocol.content_type(), body)?;
        Ok(request)
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The encoded path, starting with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query pairs in insertion order, not yet encoded.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// The value of the first query pair with the given key.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A header value as a string, if present and printable.
    #[must_use]
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The request body.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The operation-specific host prefix, e.g. `places.`.
    #[must_use]
    pub fn host_prefix(&self) -> Option<&str> {
        self.host_prefix.as_deref()
    }

    /// Append a query pair. An empty value renders as a bare key.
    pub fn query(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Append a query pair when the value is present.
    pub fn query_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.query(key, value.to_string());
        }
    }

    /// Set a header, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidHeader`] if the name or value contains
    /// bytes HTTP does not allow.
    pub fn header(&mut self, name: &str, value: &str) -> Result<(), InputError> {
        let invalid = || InputError::InvalidHeader {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        self.headers.insert(header_name, header_value);
        Ok(())
    }

    /// Set a header when the value is present.
    ///
    /// # Errors
    ///
    /// See [`Request::header`].
    pub fn header_opt<V: ToString>(&mut self, name: &str, value: Option<V>) -> Result<(), InputError> {
        match value {
            Some(value) => self.header(name, &value.to_string()),
            None => Ok(()),
        }
    }

    /// Set a timestamp header in HTTP date format when present.
    ///
    /// # Errors
    ///
    /// See [`Request::header`].
    pub fn header_timestamp(
        &mut self,
        name: &str,
        value: Option<&DateTime<Utc>>,
    ) -> Result<(), InputError> {
        self.header_opt(name, value.map(format_http_date))
    }

    /// Set the body and its content type.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidHeader`] for an invalid content type.
    pub fn set_body(&mut self, content_type: &str, body: impl Into<Bytes>) -> Result<(), InputError> {
        if !self.headers.contains_key(CONTENT_TYPE) {
            self.header(CONTENT_TYPE.as_str(), content_type)?;
        }
        self.body = body.into();
        Ok(())
    }

    /// Set a raw payload without touching the content type.
    pub fn set_payload(&mut self, body: impl Into<Bytes>) {
        self.body = body.into();
    }

    /// Set the host prefix for endpoint resolution.
    pub fn set_host_prefix(&mut self, prefix: impl Into<String>) {
        self.host_prefix = Some(prefix.into());
    }

    /// The path and query as they appear on the request line.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        let query = query_string(&self.query);
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{query}", self.path)
        }
    }

    /// Bind the request to an endpoint and produce an `http::Request`.
    ///
    /// `Content-Length` is set from the body unless the input already set it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] if the endpoint cannot be
    /// resolved and [`ClientError::Http`] if the URI is rejected.
    pub fn into_http(
        self,
        service: &Service,
        config: &ClientConfig,
    ) -> Result<http::Request<Bytes>, ClientError> {
        let endpoint = config.resolve_endpoint(service, self.host_prefix.as_deref())?;
        let uri = format!("{endpoint}{}", self.path_and_query());

        let mut builder = http::Request::builder().method(self.method).uri(uri);
        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers);
            if !headers.contains_key(CONTENT_LENGTH) {
                headers.insert(CONTENT_LENGTH, HeaderValue::from(self.body.len()));
            }
        }
        Ok(builder.body(self.body)?)
    }
}
