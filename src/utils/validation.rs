use crate::utils::error::{Result, RosterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RosterError::Entity {
            message: format!("{} must be between {} and {} (got {})", field_name, min, max, value),
        });
    }
    Ok(())
}

// Length in chars, not bytes: names and readings here are routinely Japanese.
pub fn validate_text_length(field_name: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(RosterError::Entity {
            message: format!(
                "{} must be {} to {} characters (got {})",
                field_name, min, max, len
            ),
        });
    }
    Ok(())
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::Config {
            field: field_name.to_string(),
            message: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
