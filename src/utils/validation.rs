use crate::utils::error::{GisError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GisError::validation(format!(
            "{} cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(GisError::validation(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

pub fn validate_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value < min || value > max {
        return Err(GisError::validation(format!(
            "{} must be between {} and {}, got {}",
            field_name, min, max, value
        )));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| GisError::validation(format!("{} is required", field_name)))
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GisError::config(format!("{} cannot be empty", field_name)));
    }
    if path.contains('\0') {
        return Err(GisError::config(format!(
            "{} contains null bytes",
            field_name
        )));
    }
    Ok(())
}
