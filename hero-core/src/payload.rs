//! The JSON body posted to the inference endpoint.

use crate::error::FormError;
use serde::{Deserialize, Serialize};

/// Body of a submission: `{"name": ..., "age": ..., "hero": ...}`.
///
/// Built from form fields at submit time and not retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub age: i64,
    pub hero: String,
}

impl SubmissionPayload {
    /// Validate raw field text and build a payload.
    ///
    /// Name and hero are sent exactly as typed and only have to be
    /// non-empty. Age must be a whole number; the 1-120 range shown on the
    /// input is only a hint.
    pub fn from_fields(name: &str, age: &str, hero: &str) -> Result<Self, FormError> {
        if name.is_empty() {
            return Err(FormError::MissingField("Name"));
        }
        let age = parse_age(age)?;
        if hero.is_empty() {
            return Err(FormError::MissingField("Hero"));
        }
        Ok(Self {
            name: name.to_string(),
            age,
            hero: hero.to_string(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Largest magnitude an `f64` holds without losing whole-number precision.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// Parse age text as a whole number.
///
/// Number inputs also hand over forms like `1e2` or `30.0`; those are
/// accepted when they denote a whole number. Fractions are rejected.
pub fn parse_age(age: &str) -> Result<i64, FormError> {
    let trimmed = age.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField("Age"));
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value)
            if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_F64 =>
        {
            Ok(value as i64)
        }
        _ => Err(FormError::InvalidAge(trimmed.to_string())),
    }
}
