//! Field-level validation shared by the wishlist and item services.

use wishhub_core::error::AppError;

/// Maximum wishlist name length.
pub(crate) const WISHLIST_NAME_MAX: usize = 100;
/// Maximum item name length.
pub(crate) const ITEM_NAME_MAX: usize = 200;
/// Maximum description length.
pub(crate) const DESCRIPTION_MAX: usize = 1000;

/// Trims a required name field and enforces non-emptiness and a length cap.
pub(crate) fn required_name(field: &str, value: &str, max: usize) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    if trimmed.chars().count() > max {
        return Err(AppError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Enforces the length cap on an optional description.
pub(crate) fn description(value: Option<String>) -> Result<Option<String>, AppError> {
    if let Some(ref text) = value {
        if text.chars().count() > DESCRIPTION_MAX {
            return Err(AppError::validation(format!(
                "Description must be at most {DESCRIPTION_MAX} characters"
            )));
        }
    }
    Ok(value)
}
