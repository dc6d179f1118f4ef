//! The input side of an operation: validation and request building.

use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::enums::AwsEnum;
use crate::error::{ClientError, InputError};
use crate::request::Request;
use crate::response::{FromResponse, Response};
use crate::service::Service;

/// Shapes that can check their own constraints.
///
/// Value objects implement this so that inputs can validate the whole tree.
pub trait Validate {
    /// Check required members and enum values.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    fn validate(&self) -> Result<(), InputError>;
}

/// An operation input: one implementation per API operation.
pub trait AwsInput: Validate + fmt::Debug {
    /// The service this operation belongs to.
    const SERVICE: Service;

    /// Operation name as it appears in the API model.
    const OPERATION: &'static str;

    /// The shape produced from a successful response.
    type Output: FromResponse;

    /// Validate and serialize into a [`Request`].
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if a required member is missing, an enum
    /// member holds an unknown value, or the body cannot be encoded.
    fn request(&self) -> Result<Request, InputError>;

    /// Map a named-parameter document onto this input.
    ///
    /// Keys are the member names of the API model (`{"StreamName": "s"}`).
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidParameters`] for unknown keys or values
    /// of the wrong type.
    fn from_params(params: serde_json::Value) -> Result<Self, InputError>
    where
        Self: DeserializeOwned,
    {
        serde_json::from_value(params).map_err(|source| InputError::InvalidParameters {
            shape: Self::OPERATION,
            source,
        })
    }

    /// Build the complete HTTP request against the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when validation fails or the endpoint is invalid.
    fn build_http_request(&self, config: &ClientConfig) -> Result<http::Request<Bytes>, ClientError> {
        let request = self.request()?;
        let http_request = request.into_http(&Self::SERVICE, config)?;
        tracing::debug!(
            service = Self::SERVICE.name,
            operation = Self::OPERATION,
            method = %http_request.method(),
            uri = %http_request.uri(),
            "built request"
        );
        Ok(http_request)
    }

    /// Decode a response into [`Self::Output`], or into a [`ServiceError`](crate::ServiceError).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Service`] for non-2xx responses and
    /// [`ClientError::InvalidResponse`] when a 2xx body does not decode.
    fn parse_response(response: http::Response<Bytes>) -> Result<Self::Output, ClientError>
    where
        Self: Sized,
    {
        let response = Response::from(response);
        if !response.status().is_success() {
            let err = (Self::SERVICE.error_parser)(&response);
            tracing::warn!(
                service = Self::SERVICE.name,
                operation = Self::OPERATION,
                code = %err.code,
                status = %err.status,
                "service returned an error"
            );
            return Err(err.into());
        }
        tracing::debug!(
            service = Self::SERVICE.name,
            operation = Self::OPERATION,
            status = %response.status(),
            "parsing response"
        );
        Self::Output::from_response(response)
    }
}

/// Return the value of a required member.
///
/// # Errors
///
/// Returns [`InputError::MissingRequiredField`] when the member is `None`.
pub fn required<'a, T>(
    shape: &'static str,
    field: &'static str,
    value: &'a Option<T>,
) -> Result<&'a T, InputError> {
    value
        .as_ref()
        .ok_or(InputError::MissingRequiredField { shape, field })
}

/// Require a list member to hold at least one element.
///
/// # Errors
///
/// Returns [`InputError::MissingRequiredField`] when the list is empty.
pub fn required_list<T>(
    shape: &'static str,
    field: &'static str,
    value: &[T],
) -> Result<(), InputError> {
    if value.is_empty() {
        return Err(InputError::missing(shape, field));
    }
    Ok(())
}

/// Reject enum members holding a value outside the known set.
///
/// # Errors
///
/// Returns [`InputError::InvalidEnumValue`] for `Unknown` values.
pub fn check_enum<E: AwsEnum>(
    shape: &'static str,
    field: &'static str,
    value: Option<&E>,
) -> Result<(), InputError> {
    match value {
        Some(v) if !v.is_known() => Err(InputError::InvalidEnumValue {
            shape,
            field,
            value: v.as_str().to_owned(),
            expected: E::values(),
        }),
        _ => Ok(()),
    }
}

/// Check every enum value in a list member.
///
/// # Errors
///
/// Returns [`InputError::InvalidEnumValue`] for the first `Unknown` value.
pub fn check_enum_list<E: AwsEnum>(
    shape: &'static str,
    field: &'static str,
    values: &[E],
) -> Result<(), InputError> {
    values
        .iter()
        .try_for_each(|v| check_enum(shape, field, Some(v)))
}

/// Validate an optional nested value object.
///
/// # Errors
///
/// Propagates the nested validation error.
pub fn validate_opt<T: Validate>(value: Option<&T>) -> Result<(), InputError> {
    value.map_or(Ok(()), Validate::validate)
}

/// Validate every element of a list member.
///
/// # Errors
///
/// Propagates the first nested validation error.
pub fn validate_list<T: Validate>(values: &[T]) -> Result<(), InputError> {
    values.iter().try_for_each(Validate::validate)
}

/// Validate every value of a map member.
///
/// # Errors
///
/// Propagates the first nested validation error.
pub fn validate_map<T: Validate>(values: &HashMap<String, T>) -> Result<(), InputError> {
    values.values().try_for_each(Validate::validate)
}

/// Return the caller's idempotency token or generate a fresh one.
#[must_use]
pub fn idempotency_token(value: Option<&String>) -> String {
    value.map_or_else(|| uuid::Uuid::new_v4().to_string(), Clone::clone)
}

/// Serialize a JSON body.
///
/// # Errors
///
/// Returns [`InputError::Serialization`] if the encoder fails.
pub fn json_body<T: serde::Serialize>(shape: &'static str, value: &T) -> Result<Vec<u8>, InputError> {
    serde_json::to_vec(value).map_err(|e| InputError::serialization(shape, e))
}

/// Validate a JSON RPC input and serialize it as the body of `POST /`.
///
/// Used by `awsJson1_1` services, where the whole input shape is the body.
///
/// # Errors
///
/// Returns the validation error, or [`InputError::Serialization`].
pub fn json_rpc_request<T>(input: &T) -> Result<Request, InputError>
where
    T: AwsInput + serde::Serialize,
{
    input.validate()?;
    let body = json_body(T::OPERATION, input)?;
    Request::json_rpc(&T::SERVICE, T::OPERATION, body)
}
