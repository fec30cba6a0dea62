use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{
    AppError, ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{DnsCheckRequest, DnsCheckResult, EmailFormatRequest, EmailFormatResult};
use crate::resolver::MxResolver;
use crate::service::EmailCheckService;

/// OpenAPI documentation for the email check routes
#[derive(OpenApi)]
#[openapi(
    paths(format_check, dns_check),
    components(
        schemas(EmailFormatRequest, EmailFormatResult, DnsCheckRequest, DnsCheckResult),
        responses(BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Email", description = "Email format and MX record checks")
    )
)]
pub struct ApiDoc;

/// Create the email check router
pub fn router<R: MxResolver + 'static>(service: EmailCheckService<R>) -> Router {
    Router::new()
        .route("/format-check/", post(format_check))
        .route("/dns-check/", post(dns_check))
        .with_state(Arc::new(service))
}

/// Check an address's length and syntax
#[utoipa::path(
    post,
    path = "/format-check/",
    tag = "Email",
    request_body = EmailFormatRequest,
    responses(
        (status = 200, description = "Format check result", body = EmailFormatResult),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn format_check<R: MxResolver>(
    State(service): State<Arc<EmailCheckService<R>>>,
    ValidatedJson(request): ValidatedJson<EmailFormatRequest>,
) -> Result<Json<EmailFormatResult>, AppError> {
    let result = service.check_format(&request.email)?;
    Ok(Json(result))
}

/// Look up the MX records of an address's domain
#[utoipa::path(
    post,
    path = "/dns-check/",
    tag = "Email",
    request_body = DnsCheckRequest,
    responses(
        (status = 200, description = "Lookup outcome, including missing domains and timeouts", body = DnsCheckResult),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn dns_check<R: MxResolver>(
    State(service): State<Arc<EmailCheckService<R>>>,
    ValidatedJson(request): ValidatedJson<DnsCheckRequest>,
) -> Result<Json<DnsCheckResult>, AppError> {
    let result = service.check_dns(&request.email).await?;
    Ok(Json(result))
}
