//! AWS query protocol body encoding.
//!
//! The query protocol flattens the input shape into form fields:
//!
//! ```text
//! Action=Publish&Version=2010-03-31&TopicArn=...
//! Tags.member.1.Key=env&Tags.member.1.Value=prod
//! Attributes.entry.1.key=DisplayName&Attributes.entry.1.value=Alerts
//! ```
//!
//! List and map indices are 1-based. Map entries are written in key order so
//! the encoded body is deterministic.

use std::collections::HashMap;

/// Accumulates form fields for a query protocol request.
#[derive(Debug, Clone, Default)]
pub struct QueryWriter {
    params: Vec<(String, String)>,
}

/// Shapes that flatten themselves into query fields under a prefix.
pub trait QuerySerialize {
    /// Write this value's members as `{prefix}.{Member}` fields.
    fn serialize_query(&self, writer: &mut QueryWriter, prefix: &str);
}

impl QueryWriter {
    /// Start a body with the `Action` and `Version` fields.
    #[must_use]
    pub fn new(action: &str, version: &str) -> Self {
        Self {
            params: vec![
                ("Action".to_owned(), action.to_owned()),
                ("Version".to_owned(), version.to_owned()),
            ],
        }
    }

    /// Append a field.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.push((key.into(), value.into()));
    }

    /// Append a field when the value is present.
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value.to_string());
        }
    }

    /// Write a nested structure under `key`.
    pub fn structure<T: QuerySerialize>(&mut self, key: &str, value: &T) {
        value.serialize_query(self, key);
    }

    /// Write a non-flattened list as `{key}.member.N`.
    ///
    /// Empty lists are omitted.
    pub fn list<T>(&mut self, key: &str, items: &[T], mut write: impl FnMut(&mut Self, &str, &T)) {
        for (index, item) in items.iter().enumerate() {
            let prefix = format!("{key}.member.{}", index + 1);
            write(self, &prefix, item);
        }
    }

    /// Write a map as `{key}.entry.N.{key_name}` / `{key}.entry.N.{value_name}`.
    ///
    /// Entries are emitted in ascending key order. Empty maps are omitted.
    pub fn map<V>(
        &mut self,
        key: &str,
        map: &HashMap<String, V>,
        key_name: &str,
        value_name: &str,
        mut write_value: impl FnMut(&mut Self, &str, &V),
    ) {
        let mut keys: Vec<&String> = map.keys().collect();
        keys.sort();
        for (index, entry_key) in keys.into_iter().enumerate() {
            let prefix = format!("{key}.entry.{}", index + 1);
            self.push(format!("{prefix}.{key_name}"), entry_key.clone());
            write_value(self, &format!("{prefix}.{value_name}"), &map[entry_key]);
        }
    }

    /// The fields written so far.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Encode the fields as `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish()
            .into_bytes()
    }
}
