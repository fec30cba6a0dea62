use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// Root greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Service is up", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "This is the root URL".to_string(),
    })
}

/// Creates the API routes, served at the root path.
///
/// Every sub-router has its state applied already, so the result is stateless.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(domain_items::handlers::router(state.items.clone()))
        .merge(domain_email_check::handlers::router(state.email.clone()))
}
