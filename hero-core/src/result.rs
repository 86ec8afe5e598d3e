//! The key/value result returned by the inference endpoint.
//!
//! The endpoint's response has no fixed schema. It is kept as an ordered
//! list of entries, in the order the keys appear in the response body, each
//! value reduced to a small closed set of displayable variants.

use crate::error::{Result, SubmitError};
use serde_json::{Map, Number, Value};
use std::fmt;

/// A single displayable result value.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    Text(String),
    Number(Number),
    Bool(bool),
    Null,
    /// An object or array, pretty-printed as JSON text
    Nested(String),
}

impl ResultValue {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => ResultValue::Text(s),
            Value::Number(n) => ResultValue::Number(n),
            Value::Bool(b) => ResultValue::Bool(b),
            Value::Null => ResultValue::Null,
            nested @ (Value::Array(_) | Value::Object(_)) => ResultValue::Nested(
                serde_json::to_string_pretty(&nested).unwrap_or_else(|_| nested.to_string()),
            ),
        }
    }

    /// Whether the text spans multiple lines and should keep its whitespace.
    pub fn is_nested(&self) -> bool {
        matches!(self, ResultValue::Nested(_))
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Text(s) => f.write_str(s),
            ResultValue::Number(n) => write!(f, "{}", n),
            ResultValue::Bool(b) => write!(f, "{}", b),
            ResultValue::Null => f.write_str("null"),
            ResultValue::Nested(s) => f.write_str(s),
        }
    }
}

/// Ordered mapping of result keys to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionResult {
    entries: Vec<(String, ResultValue)>,
}

impl SubmissionResult {
    /// Parse a response body. Anything other than a top-level JSON object
    /// is rejected.
    pub fn from_json_str(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            _ => Err(SubmitError::NotAnObject),
        }
    }

    fn from_map(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| (key, ResultValue::from_json(value)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ResultValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResultValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Render each entry as a `(key, text)` pair, in response order.
pub fn result_rows(result: &SubmissionResult) -> Vec<(String, String)> {
    result
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}
