//! Query-string extractor with validator rules.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor that applies `validator` rules after parsing.
///
/// Unparseable parameters and rule violations are both reported as
/// 422 Unprocessable Entity.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        params
            .validate()
            .map_err(|e| AppError::QueryValidation(e).into_response())?;

        Ok(ValidatedQuery(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Page {
        #[serde(default)]
        #[validate(range(max = 99))]
        skip: u32,
    }

    async fn page(ValidatedQuery(p): ValidatedQuery<Page>) -> String {
        p.skip.to_string()
    }

    async fn status_for(uri: &str) -> StatusCode {
        let app = Router::new().route("/", get(page));
        let request = axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_defaults_apply_without_query() {
        assert_eq!(status_for("/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rule_violation_is_422() {
        assert_eq!(status_for("/?skip=100").await, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unparseable_value_is_422() {
        assert_eq!(status_for("/?skip=-1").await, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
