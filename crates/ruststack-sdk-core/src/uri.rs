//! URI label and query string encoding.
//!
//! AWS expects RFC 3986 encoding: only unreserved characters
//! (`A-Z a-z 0-9 - . _ ~`) pass through. Greedy labels (`{Key+}`) also keep
//! the `/` separator.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::InputError;
use crate::input::required;

/// Characters escaped in labels and query components.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Characters escaped in greedy labels.
const GREEDY: &AsciiSet = &UNRESERVED.remove(b'/');

/// Percent-encode a single path label.
#[must_use]
pub fn encode_label(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}

/// Percent-encode a greedy path label, keeping `/`.
#[must_use]
pub fn encode_greedy_label(value: &str) -> String {
    utf8_percent_encode(value, GREEDY).to_string()
}

/// Encode a required label, failing when the member is unset or empty.
///
/// # Errors
///
/// Returns [`InputError::MissingRequiredField`] when the value is `None` or
/// an empty string, since an empty label would collapse the path.
pub fn required_label(
    shape: &'static str,
    field: &'static str,
    value: &Option<String>,
) -> Result<String, InputError> {
    let value = required(shape, field, value)?;
    if value.is_empty() {
        return Err(InputError::missing(shape, field));
    }
    Ok(encode_label(value))
}

/// Greedy variant of [`required_label`].
///
/// # Errors
///
/// Returns [`InputError::MissingRequiredField`] when the value is `None` or empty.
pub fn required_greedy_label(
    shape: &'static str,
    field: &'static str,
    value: &Option<String>,
) -> Result<String, InputError> {
    let value = required(shape, field, value)?;
    if value.is_empty() {
        return Err(InputError::missing(shape, field));
    }
    Ok(encode_greedy_label(value))
}

/// Render query pairs as `k=v&k2=v2`.
///
/// A pair with an empty value renders as the bare key (`?uploads`), which is
/// how S3 sub-resources are addressed.
#[must_use]
pub fn query_string(pairs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(&encode_label(key));
        if !value.is_empty() {
            out.push('=');
            out.push_str(&encode_label(value));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_unreserved_characters() {
        assert_eq!(encode_label("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
    }

    #[test]
    fn test_should_escape_reserved_characters() {
        assert_eq!(encode_label("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_label("x+y=z&"), "x%2By%3Dz%26");
        assert_eq!(encode_label("日本"), "%E6%97%A5%E6%9C%AC");
    }

    #[test]
    fn test_should_keep_slash_in_greedy_label() {
        assert_eq!(encode_greedy_label("photos/2024/a b.jpg"), "photos/2024/a%20b.jpg");
    }

    #[test]
    fn test_should_reject_missing_or_empty_label() {
        let err = required_label("GetObjectInput", "Bucket", &None).unwrap_err();
        assert!(matches!(
            err,
            InputError::MissingRequiredField { field: "Bucket", .. }
        ));
        assert!(required_label("GetObjectInput", "Bucket", &Some(String::new())).is_err());
        assert_eq!(
            required_greedy_label("GetObjectInput", "Key", &Some("a/b c".to_owned())).unwrap(),
            "a/b%20c"
        );
    }

    #[test]
    fn test_should_render_query_string() {
        let pairs = vec![
            ("uploads".to_owned(), String::new()),
            ("prefix".to_owned(), "logs/2024 01".to_owned()),
        ];
        assert_eq!(query_string(&pairs), "uploads&prefix=logs%2F2024%2001");
        assert_eq!(query_string(&[]), "");
    }
}
