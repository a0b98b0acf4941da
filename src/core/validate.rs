//! Guard for user-supplied numeric fields.
//!
//! Every field must be a finite number and strictly positive. A single
//! violation rejects the whole submission with one message; no event is
//! constructed and nothing is mutated.

use crate::errors::{AppError, AppResult};

pub fn require_positive(fields: &[(&str, f64)]) -> AppResult<()> {
    for (name, value) in fields {
        if !value.is_finite() || *value <= 0.0 {
            return Err(AppError::Validation(format!(
                "Inputs must be positive numbers, please check your inputs ('{name}' = {value})."
            )));
        }
    }
    Ok(())
}
