//! Ordered header collection with deterministic flattening.

use std::collections::BTreeMap;

use crate::http::{ContentType, HeaderKey};

/// A single header name with an optional value.
///
/// Fields with a `None` value are kept in the collection but dropped when
/// flattening to a map, which lets callers unset a default header without
/// sending an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub name: String,
    pub value: Option<String>,
}

impl HeaderField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// A field with no value; dropped by [`HeaderFields::to_map`].
    pub fn unset(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// An ordered sequence of header fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    fields: Vec<HeaderField>,
}

impl HeaderFields {
    pub fn new(fields: Vec<HeaderField>) -> Self {
        Self { fields }
    }

    /// The default header set: exactly `Content-Type: application/json`.
    pub fn default_headers() -> Self {
        Self::new(vec![HeaderField::new(
            HeaderKey::ContentType.as_str(),
            ContentType::ApplicationJson.as_str(),
        )])
    }

    pub fn push(&mut self, field: HeaderField) {
        self.fields.push(field);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flatten to a name → value map.
    ///
    /// Iterates the stored sequence in order, dropping fields without a
    /// value; when a name repeats, the last value seen wins.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for field in &self.fields {
            if let Some(value) = &field.value {
                map.insert(field.name.clone(), value.clone());
            }
        }
        map
    }

    /// Concatenate `overrides` after `self`.
    ///
    /// Combined with [`to_map`](Self::to_map)'s last-write-wins rule this
    /// means entries from `overrides` replace same-named entries of `self`.
    pub fn merged(&self, overrides: &HeaderFields) -> HeaderFields {
        let mut fields = self.fields.clone();
        fields.extend(overrides.fields.iter().cloned());
        Self { fields }
    }
}
