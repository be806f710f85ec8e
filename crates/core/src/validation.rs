//! Shared field validation helpers.
//!
//! Request DTOs derive [`validator::Validate`] for per-field rules; the
//! helpers here are referenced from those derives (`custom(function)`) or
//! turn their errors into a [`CoreError`].

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Reject strings that are empty or contain only whitespace.
///
/// Intended for `#[validate(custom(function = "..."))]`.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Flatten `validator` errors into a single [`CoreError::Validation`].
///
/// Fields are reported in alphabetical order so messages are stable.
pub fn from_validation_errors(errors: &ValidationErrors) -> CoreError {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let parts: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = e
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {detail}")
            })
        })
        .collect();

    if parts.is_empty() {
        CoreError::Validation("Invalid request body".to_string())
    } else {
        CoreError::Validation(parts.join("; "))
    }
}
