//! Status interpretation
//!
//! Turns a single submission record into the text the student receives.

use serde_json::Value;

use crate::domain::homework::HomeworkStatus;
use crate::error::InterpretError;

/// Composes the notification text for a homework and its status
pub fn status_message(homework_name: &str, status: HomeworkStatus) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name,
        status.verdict()
    )
}

/// Interprets a submission record as notification text
///
/// Pure: the same record always yields the same text.
///
/// # Errors
/// * [`InterpretError::MissingName`] if `homework_name` is absent or not a string
/// * [`InterpretError::UnknownStatus`] if `status` is absent or outside the verdict mapping
pub fn parse_status(homework: &Value) -> Result<String, InterpretError> {
    let homework_name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(InterpretError::MissingName)?;

    let code = homework.get("status").and_then(Value::as_str);
    let status = code
        .and_then(HomeworkStatus::from_code)
        .ok_or_else(|| InterpretError::UnknownStatus {
            status: code.map(str::to_string),
        })?;

    Ok(status_message(homework_name, status))
}
