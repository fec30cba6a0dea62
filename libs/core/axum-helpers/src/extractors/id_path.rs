//! Integer path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a single non-negative integer path parameter.
///
/// Anything that is not a `u64` is rejected with 422 and the standard error
/// body instead of axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_item(IdPath(id): IdPath) -> String {
///     format!("Item ID: {}", id)
/// }
///
/// let app = Router::new().route("/items/{item_id}", get(get_item));
/// ```
pub struct IdPath(pub u64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        raw.parse::<u64>().map(IdPath).map_err(|_| {
            AppError::UnprocessableEntity(format!("Invalid id: {}", raw)).into_response()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    async fn status_for(uri: &str) -> StatusCode {
        let app = Router::new().route(
            "/items/{item_id}",
            get(|IdPath(id): IdPath| async move { id.to_string() }),
        );
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_parses_integer_id() {
        assert_eq!(status_for("/items/3").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejects_non_integer_id() {
        assert_eq!(status_for("/items/abc").await, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_for("/items/-1").await, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
