use crate::domain::query::Month;
use crate::errors::AppError;

/// Month numbers run 1 to 12. Anything else is refused up front
/// rather than silently matching nobody.
pub fn validate_month(month: i64) -> Result<Month, AppError> {
    u32::try_from(month)
        .ok()
        .and_then(Month::new)
        .ok_or_else(|| {
            AppError::InvalidArgument(format!("month must be between 1 and 12, got {month}"))
        })
}
