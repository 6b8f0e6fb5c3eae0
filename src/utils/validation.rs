use crate::utils::error::{HolidayError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HolidayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(HolidayError::ValidationError {
            message: format!("{} must contain at least one entry", field_name),
        });
    }
    Ok(())
}

/// Rejects entries that differ only by ASCII case.
pub fn validate_unique_ignore_case<S: AsRef<str>>(field_name: &str, values: &[S]) -> Result<()> {
    let mut seen = HashSet::new();

    for value in values {
        let value = value.as_ref();
        if !seen.insert(value.to_ascii_uppercase()) {
            return Err(HolidayError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }

    Ok(())
}
