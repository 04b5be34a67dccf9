//! Validation error types and JSON error format.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// The field name that failed validation
    pub field: String,
    /// Code of the rule that failed (e.g., "EmailAddress")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, serde_json::Value>>,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
            params: None,
        }
    }

    /// Attach a parameter, e.g. the rejected value.
    pub fn with_param(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.params
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: String,
    message: String,
    fields: Vec<FieldError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

/// Validation error containing all field errors.
///
/// Serializes as:
///
/// ```json
/// {
///   "error": {
///     "type": "validation_error",
///     "message": "Validation failed",
///     "fields": [...]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}: {} field error(s)", .fields.len())]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
    /// Summary message (default: "Validation failed")
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error with field errors.
    pub fn new(fields: Vec<FieldError>) -> Self {
        Self {
            fields,
            message: "Validation failed".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Convert `validator` errors to our format.
    ///
    /// Errors without a message get a generic one naming the field.
    pub fn from_validator_errors(errors: validator::ValidationErrors) -> Self {
        let mut fields = Vec::new();

        for (field, kinds) in errors.field_errors() {
            let field = field.to_string();
            for error in kinds {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| generic_message(&field));

                let params = if error.params.is_empty() {
                    None
                } else {
                    Some(
                        error
                            .params
                            .iter()
                            .map(|(key, value)| (key.to_string(), value.clone()))
                            .collect(),
                    )
                };

                fields.push(FieldError {
                    field: field.clone(),
                    code: error.code.to_string(),
                    message,
                    params,
                });
            }
        }

        Self::new(fields)
    }
}

pub(crate) fn generic_message(field: &str) -> String {
    format!("Validation failed for field '{}'", field)
}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorWrapper {
            error: ErrorBody {
                error_type: "validation_error".to_string(),
                message: self.message.clone(),
                fields: self.fields.clone(),
            },
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidationError {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wrapper = ErrorWrapper::deserialize(deserializer)?;
        Ok(Self {
            fields: wrapper.error.fields,
            message: wrapper.error.message,
        })
    }
}
