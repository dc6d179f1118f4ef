//! Client configuration and endpoint resolution.
//!
//! [`ClientConfig`] carries the region and optional endpoint overrides used
//! when binding a [`Request`](crate::Request) to a URL. Values can be loaded
//! from the standard AWS environment variables via [`ClientConfig::from_env`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::ClientError;
use crate::service::Service;

const DEFAULT_REGION: &str = "us-east-1";
const ENDPOINT_URL_VAR: &str = "AWS_ENDPOINT_URL";

/// Region and endpoint settings shared by every service.
///
/// # Examples
///
/// ```
/// use ruststack_sdk_core::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .region("eu-central-1")
///     .endpoint("http://localhost:4566")
///     .build();
/// assert_eq!(config.region, "eu-central-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// AWS region, e.g. `us-west-2`.
    #[builder(default = String::from(DEFAULT_REGION), setter(into))]
    pub region: String,

    /// Endpoint override applied to every service (`AWS_ENDPOINT_URL`).
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Per-service endpoint overrides keyed by [`Service::env_id`]
    /// (`AWS_ENDPOINT_URL_<ID>`).
    #[builder(default)]
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub service_endpoints: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: String::from(DEFAULT_REGION),
            endpoint: None,
            service_endpoints: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Meaning |
    /// |----------|---------|
    /// | `AWS_REGION` | region, preferred |
    /// | `AWS_DEFAULT_REGION` | region fallback (default `us-east-1`) |
    /// | `AWS_ENDPOINT_URL` | endpoint for every service |
    /// | `AWS_ENDPOINT_URL_<ID>` | endpoint for one service, e.g. `AWS_ENDPOINT_URL_S3` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build a configuration from `(name, value)` pairs using the
    /// [`from_env`](Self::from_env) rules.
    #[must_use]
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut config = Self::default();
        let mut region = None;
        let mut default_region = None;

        for (name, value) in vars {
            if value.is_empty() {
                continue;
            }
            match name.as_str() {
                "AWS_REGION" => region = Some(value),
                "AWS_DEFAULT_REGION" => default_region = Some(value),
                ENDPOINT_URL_VAR => config.endpoint = Some(value),
                _ => {
                    if let Some(id) = name.strip_prefix("AWS_ENDPOINT_URL_") {
                        config.service_endpoints.insert(id.to_owned(), value);
                    }
                }
            }
        }

        if let Some(region) = region.or(default_region) {
            config.region = region;
        }
        config
    }

    /// Returns the endpoint override for a service, if any.
    ///
    /// A service-specific override wins over the global one.
    #[must_use]
    pub fn endpoint_override(&self, service: &Service) -> Option<&str> {
        self.service_endpoints
            .get(service.env_id)
            .or(self.endpoint.as_ref())
            .map(String::as_str)
    }

    /// Resolve the base URL (scheme and authority, no trailing `/`) for a
    /// service.
    ///
    /// The operation host prefix is only applied to the default AWS
    /// endpoint. Explicit endpoints are used as given.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] when an override is not an
    /// `http`/`https` URL or the region is not a valid DNS label.
    pub fn resolve_endpoint(
        &self,
        service: &Service,
        host_prefix: Option<&str>,
    ) -> Result<String, ClientError> {
        if let Some(endpoint) = self.endpoint_override(service) {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ClientError::InvalidEndpoint(format!(
                    "endpoint must start with http:// or https://: {endpoint}"
                )));
            }
            return Ok(endpoint.trim_end_matches('/').to_owned());
        }

        if !is_valid_region(&self.region) {
            return Err(ClientError::InvalidEndpoint(format!(
                "invalid region: {:?}",
                self.region
            )));
        }

        let prefix = host_prefix.unwrap_or_default();
        if service.endpoint_prefix == "s3" && self.region == DEFAULT_REGION {
            return Ok(format!("https://{prefix}s3.amazonaws.com"));
        }
        let suffix = if self.region.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        Ok(format!(
            "https://{prefix}{}.{}.{suffix}",
            service.endpoint_prefix, self.region
        ))
    }
}

fn is_valid_region(region: &str) -> bool {
    !region.is_empty()
        && !region.starts_with('-')
        && !region.ends_with('-')
        && region
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
