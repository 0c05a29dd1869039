//! Error types for payload validation and interpretation

use thiserror::Error;

/// The review API payload does not have the documented shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Top-level value is not a JSON object
    #[error("unexpected response type: expected an object, got {found}")]
    NotAMap {
        /// JSON type that was received instead
        found: &'static str,
    },

    /// Required collection key is absent
    #[error("response has no `{key}` key")]
    MissingKey {
        /// Name of the missing key
        key: &'static str,
    },

    /// Value under the collection key is not an array
    #[error("unexpected type under `{key}`: expected an array, got {found}")]
    WrongType {
        /// Name of the offending key
        key: &'static str,
        /// JSON type that was received instead
        found: &'static str,
    },
}

/// A submission record cannot be turned into a notification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// Record has no usable `homework_name`
    #[error("homework record has no `homework_name`")]
    MissingName,

    /// Status is absent or outside the verdict mapping
    #[error("unknown homework status: {}", status.as_deref().unwrap_or("<missing>"))]
    UnknownStatus {
        /// Raw status as received, `None` if absent or not a string
        status: Option<String>,
    },
}

/// Human-readable name of a JSON value's type, for error messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
