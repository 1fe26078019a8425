use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gridstart_core::limits::{limit_error_to_status_code, LimitError};

/// Application error type that wraps `anyhow::Error`.
///
/// Limit violations become a 400 with the overload message; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(limit_error) = self.0.downcast_ref::<LimitError>() {
            let status = StatusCode::from_u16(limit_error_to_status_code(limit_error))
                .unwrap_or(StatusCode::BAD_REQUEST);
            return (status, limit_error.to_string()).into_response();
        }

        tracing::error!(error = %self.0, "Application error");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
