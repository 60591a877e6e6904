//! Validation errors raised by the question model.

use thiserror::Error;

use super::ChoiceId;

/// Errors raised when a question or choice constraint is violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: &'static str },

    #[error("Field '{field}' must be at most {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' must be at least {min}, got {actual}")]
    BelowMinimum {
        field: &'static str,
        min: u32,
        actual: u32,
    },

    #[error("Choice {id} does not belong to this question")]
    UnknownChoice { id: ChoiceId },

    #[error("Selected {actual} choices, at most {max} allowed")]
    TooManySelections { max: u32, actual: usize },
}

impl ValidationError {
    pub fn empty_field(field: &'static str) -> Self {
        ValidationError::EmptyField { field }
    }

    pub fn too_long(field: &'static str, max: usize, actual: usize) -> Self {
        ValidationError::TooLong { field, max, actual }
    }

    pub fn below_minimum(field: &'static str, min: u32, actual: u32) -> Self {
        ValidationError::BelowMinimum { field, min, actual }
    }
}

/// Checks that `value` is non-empty and at most `max` characters long.
pub(crate) fn validate_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }

    let length = value.chars().count();
    if length > max {
        return Err(ValidationError::too_long(field, max, length));
    }

    Ok(())
}
