//! Response validation
//!
//! Checks the raw review API payload against its documented shape and
//! extracts the list of submission records.

use serde_json::Value;

use crate::error::{SchemaError, json_type_name};

/// Key holding the submission records in the API response
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Validates a review API response and returns its submission records
///
/// The returned slice borrows from `response` and is in API order; it may be
/// empty when nothing happened inside the requested window.
///
/// # Errors
/// * [`SchemaError::NotAMap`] if the payload is not a JSON object
/// * [`SchemaError::MissingKey`] if `homeworks` is absent
/// * [`SchemaError::WrongType`] if `homeworks` is not an array
pub fn check_response(response: &Value) -> Result<&[Value], SchemaError> {
    let object = response.as_object().ok_or(SchemaError::NotAMap {
        found: json_type_name(response),
    })?;

    let homeworks = object.get(HOMEWORKS_KEY).ok_or(SchemaError::MissingKey {
        key: HOMEWORKS_KEY,
    })?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(SchemaError::WrongType {
            key: HOMEWORKS_KEY,
            found: json_type_name(homeworks),
        })
}
