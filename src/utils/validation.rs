use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a user-supplied amount into a finite `f64`.
///
/// This replaces the permissive numeric coercion of the original helper:
/// empty, non-numeric, and non-finite input is rejected instead of being
/// rendered as a placeholder. Callers that want the legacy behavior use
/// `formatter::format_lossy`.
pub fn parse_amount(field_name: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidAmount {
            field: field_name.to_string(),
            value: raw.to_string(),
        });
    }

    let value: f64 = trimmed.parse().map_err(|_| AppError::InvalidAmount {
        field: field_name.to_string(),
        value: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(AppError::InvalidAmount {
            field: field_name.to_string(),
            value: raw.to_string(),
        });
    }

    Ok(value)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Mount selectors are bare node ids; a leading `#` is tolerated and
/// stripped by the mount surface, but whitespace inside is not.
pub fn validate_selector(field_name: &str, selector: &str) -> Result<()> {
    validate_non_empty_string(field_name, selector)?;

    let bare = selector.trim_start_matches('#');
    if bare.is_empty() || bare.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: selector.to_string(),
            reason: "Selector must be a single node id, e.g. 'app' or '#app'".to_string(),
        });
    }

    Ok(())
}
