//! Scalar codecs: timestamps and blobs in their various wire forms.
//!
//! The `serde` helper modules operate on `Option<_>` members and are meant to
//! be combined with `#[serde(default, skip_serializing_if = "Option::is_none")]`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Format a timestamp as RFC 3339 with millisecond precision and a `Z` suffix.
#[must_use]
pub fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Parse an RFC 3339 / ISO 8601 timestamp.
#[must_use]
pub fn parse_date_time(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ")
        .ok()
        .map(|ndt| ndt.and_utc())
}

/// Format a timestamp as an HTTP date (`Sun, 06 Nov 1994 08:49:37 GMT`).
#[must_use]
pub fn format_http_date(dt: &DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse an HTTP date, accepting RFC 2822 and RFC 3339 as fallbacks.
#[must_use]
pub fn parse_http_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S GMT") {
        return Some(dt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_date_time(s)
}

/// Seconds since the epoch, fractional when the timestamp has sub-second precision.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_epoch_seconds(dt: &DateTime<Utc>) -> f64 {
    dt.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`to_epoch_seconds`].
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn from_epoch_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    Utc.timestamp_millis_opt((secs * 1000.0).round() as i64).single()
}

/// `Option<DateTime<Utc>>` as epoch seconds (JSON protocols).
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as a JSON number. Whole seconds are written as integers.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) if dt.timestamp_subsec_millis() == 0 => serializer.serialize_i64(dt.timestamp()),
            Some(dt) => serializer.serialize_f64(super::to_epoch_seconds(dt)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from an integer or fractional number of seconds.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let secs = Option::<f64>::deserialize(deserializer)?;
        match secs {
            Some(secs) => super::from_epoch_seconds(secs)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {secs}"))),
            None => Ok(None),
        }
    }
}

/// `Option<DateTime<Utc>>` as an RFC 3339 string (members declared `date-time`).
pub mod date_time {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as an RFC 3339 string with millisecond precision.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&super::format_date_time(dt)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from an RFC 3339 string.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(raw) => super::parse_date_time(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
            None => Ok(None),
        }
    }
}

/// `Option<Bytes>` as standard base64 (blobs inside JSON documents).
pub mod blob {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as a base64 string.
    pub fn serialize<S: Serializer>(value: &Option<Bytes>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(data) => serializer.serialize_str(&STANDARD.encode(data)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from a base64 string.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Bytes>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(raw) => STANDARD
                .decode(raw.as_bytes())
                .map(|data| Some(Bytes::from(data)))
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// `Option<Bytes>` taken from a plain UTF-8 string (raw payload members).
///
/// Payload blobs travel as the HTTP body itself, so the parameter map carries
/// their text directly rather than a base64 form.
pub mod text_blob {
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as a string, replacing invalid UTF-8.
    pub fn serialize<S: Serializer>(value: &Option<Bytes>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(data) => serializer.serialize_str(&String::from_utf8_lossy(data)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from a string.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Bytes>, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.map(Bytes::from))
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Sample {
        #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
        at: Option<DateTime<Utc>>,
        #[serde(default, with = "date_time", skip_serializing_if = "Option::is_none")]
        when: Option<DateTime<Utc>>,
        #[serde(default, with = "blob", skip_serializing_if = "Option::is_none")]
        data: Option<Bytes>,
    }

    fn ts(secs: i64, millis: u32) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, millis * 1_000_000).single().unwrap()
    }

    #[test]
    fn test_should_format_timestamps() {
        let dt = ts(784_111_777, 0);
        assert_eq!(format_http_date(&dt), "Sun, 06 Nov 1994 08:49:37 GMT");
        assert_eq!(format_date_time(&dt), "1994-11-06T08:49:37.000Z");
    }

    #[test]
    fn test_should_parse_timestamps() {
        let dt = ts(784_111_777, 0);
        assert_eq!(parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT"), Some(dt));
        assert_eq!(parse_date_time("1994-11-06T08:49:37Z"), Some(dt));
        assert_eq!(parse_date_time("1994-11-06T08:49:37.000Z"), Some(dt));
        assert!(parse_date_time("yesterday").is_none());
    }

    #[test]
    fn test_should_encode_epoch_seconds() {
        let sample = Sample {
            at: Some(ts(1_700_000_000, 0)),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&sample).unwrap(), r#"{"at":1700000000}"#);

        let sample = Sample {
            at: Some(ts(1_700_000_000, 250)),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&sample).unwrap(), r#"{"at":1700000000.25}"#);

        let parsed: Sample = serde_json::from_str(r#"{"at":1.7000000005E9}"#).unwrap();
        assert_eq!(parsed.at, Some(ts(1_700_000_000, 500)));
    }

    #[test]
    fn test_should_encode_date_time_and_blob() {
        let sample = Sample {
            when: Some(ts(0, 0)),
            data: Some(Bytes::from_static(b"hello")),
            ..Default::default()
        };
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"{"when":"1970-01-01T00:00:00.000Z","data":"aGVsbG8="}"#);

        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back.data.as_deref(), Some(&b"hello"[..]));
        assert_eq!(back.when, Some(ts(0, 0)));
    }

    #[test]
    fn test_should_reject_invalid_base64() {
        let err = serde_json::from_str::<Sample>(r#"{"data":"***"}"#);
        assert!(err.is_err());
    }
}
