use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EmailCheckError {
    #[error("{0}")]
    InvalidArgument(String),

    /// Resolver failure that is not one of the reported DNS outcomes
    #[error("DNS lookup failed: {0}")]
    Unexpected(String),
}

pub type EmailCheckResult<T> = Result<T, EmailCheckError>;

impl From<EmailCheckError> for AppError {
    fn from(err: EmailCheckError) -> Self {
        match err {
            EmailCheckError::InvalidArgument(msg) => AppError::BadRequest(msg),
            EmailCheckError::Unexpected(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl IntoResponse for EmailCheckError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
