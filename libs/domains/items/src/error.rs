use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::models::ItemId;

#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    #[error("Item with ID={0} not found.")]
    NotFound(ItemId),

    #[error("Item with name={0} already exists.")]
    DuplicateName(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl ItemError {
    /// Mapping used by the mutating routes, which report a missing id as 400
    /// rather than 404.
    pub fn missing_as_bad_request(self) -> AppError {
        match self {
            ItemError::NotFound(_) => AppError::BadRequest(self.to_string()),
            other => other.into(),
        }
    }
}

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) => AppError::NotFound(err.to_string()),
            ItemError::DuplicateName(_) => AppError::Conflict(err.to_string()),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
