use utoipa::OpenApi;

use crate::api::RootResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "In-memory item catalog plus email format and MX record checks"
    ),
    paths(crate::api::root),
    components(schemas(RootResponse)),
    tags(
        (name = "Root", description = "Service greeting")
    )
)]
struct RootApiDoc;

/// Combined documentation for every route served at the root path
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = RootApiDoc::openapi();
        doc.merge(domain_items::ApiDoc::openapi());
        doc.merge(domain_email_check::ApiDoc::openapi());
        doc
    }
}
