//! Decode helpers for the polymorphic fields of the manifest dialect.
//!
//! Several manifest fields accept more than one YAML shape depending on
//! author intent (`on` may be a single event name, a list of names, or a
//! mapping; `runs-on` may be a label or a list of labels). The helpers here
//! give every such field a single decode path: a string-or-list union
//! container and normalizers that coerce loosely-keyed mappings into
//! string-keyed ones.

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::{Mapping, Value};
use std::fmt;

/// A field that can be written either as a single string or as a list of
/// strings, e.g. `runs-on: ubuntu-latest` vs `runs-on: [ubuntu-latest, macos-14]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringOrSeq {
    /// Canonical single value: the first element when the author wrote a list.
    pub value: String,
    /// All values in author order; a single scalar decodes to a one-element list.
    pub values: Vec<String>,
}

impl StringOrSeq {
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

impl fmt::Display for StringOrSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.len() == 1 {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{}", self.values.join(", "))
        }
    }
}

impl<'de> Deserialize<'de> for StringOrSeq {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Scalar-shaped input must win over list-shaped input; the variant
        // order below is a contract, not a convenience.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Scalar(String),
            Seq(Vec<String>),
        }

        match Raw::deserialize(deserializer) {
            Ok(Raw::Scalar(value)) => Ok(StringOrSeq {
                values: vec![value.clone()],
                value,
            }),
            Ok(Raw::Seq(values)) => Ok(StringOrSeq {
                value: values.first().cloned().unwrap_or_default(),
                values,
            }),
            Err(_) => Err(D::Error::custom("must be a string or a list of strings")),
        }
    }
}

impl Serialize for StringOrSeq {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.values.len() == 1 {
            serializer.serialize_str(&self.value)
        } else {
            self.values.serialize(serializer)
        }
    }
}

/// Render a scalar node as text. Non-scalar nodes yield `None`.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Deserialize an optional text field from any YAML scalar, rendering
/// numbers and booleans as their source text.
pub fn opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(ref value) => scalar_to_string(value)
            .map(Some)
            .ok_or_else(|| D::Error::custom("must be a scalar value")),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Coerce a raw mapping into a string-keyed one, preserving every value.
///
/// Permissive YAML decoders hand back mappings whose keys may be numbers or
/// booleans; those are rendered as text. Keys with no text rendition fail
/// with a decode error naming the key.
pub fn mapping_to_string_keys(mapping: &Mapping) -> Result<IndexMap<String, Value>, AppError> {
    let mut result = IndexMap::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = scalar_to_string(key).ok_or_else(|| {
            AppError::new(
                ErrorCategory::DecodeError,
                format!("map key {:?} cannot be coerced to a string", key),
            )
        })?;
        result.insert(key, value.clone());
    }
    Ok(result)
}

/// Normalize a node to a string-keyed, value-preserving mapping.
///
/// Null yields `None` so callers can tell "absent" from "present but empty";
/// any non-mapping node is a decode error.
pub fn map_of_string_value(value: &Value) -> Result<Option<IndexMap<String, Value>>, AppError> {
    match value {
        Value::Null => Ok(None),
        Value::Mapping(mapping) => mapping_to_string_keys(mapping).map(Some),
        other => Err(AppError::new(
            ErrorCategory::DecodeError,
            format!(
                "cannot convert {} to a string-keyed mapping",
                value_kind(other)
            ),
        )),
    }
}

/// Normalize a node to a string-keyed, string-valued mapping.
///
/// Same key handling as [`map_of_string_value`], with the extra requirement
/// that every value is already text.
pub fn map_of_string_string(value: &Value) -> Result<Option<IndexMap<String, String>>, AppError> {
    let Some(raw) = map_of_string_value(value)? else {
        return Ok(None);
    };
    let mut result = IndexMap::with_capacity(raw.len());
    for (key, value) in raw {
        let Value::String(text) = value else {
            return Err(AppError::new(
                ErrorCategory::DecodeError,
                format!("value for key {:?} must be a string", key),
            ));
        };
        result.insert(key, text);
    }
    Ok(Some(result))
}
