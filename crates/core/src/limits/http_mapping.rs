//! Pure functions for mapping limit errors to HTTP status codes.

use super::LimitError;

/// Maps a [`LimitError`] to an HTTP status code.
///
/// Every limit violation is the caller's fault and maps to 400 (Bad Request),
/// whichever limit was exceeded.
///
/// # Examples
///
/// ```
/// use gridstart_core::limits::{limit_error_to_status_code, LimitError};
///
/// let error = LimitError::TooManyColumns { count: 101 };
/// assert_eq!(limit_error_to_status_code(&error), 400);
/// ```
pub fn limit_error_to_status_code(error: &LimitError) -> u16 {
    match error {
        LimitError::TooManyColumns { .. } => 400,
        LimitError::TooManyMediaQueries { .. } => 400,
    }
}
