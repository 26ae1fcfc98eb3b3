//! Request and response DTOs.

pub mod request;
pub mod response;

use validator::Validate;

use wishhub_core::error::AppError;

/// Runs `validator` derive checks on a request body, mapping failures into
/// a validation `AppError`.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate().map_err(|errors| {
        let message = errors.to_string().replace('\n', "; ");
        AppError::validation(message)
    })
}
