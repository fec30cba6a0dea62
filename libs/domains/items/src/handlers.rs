use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    AppError, IdPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestResponse, ConflictResponse, NotFoundResponse, UnprocessableQueryResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{
    CreatedItemResponse, Item, ItemPatch, ItemResponse, ListParams, QueryParams,
};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the catalog routes
#[derive(OpenApi)]
#[openapi(
    paths(list_items, get_item, create_item, update_item, delete_item, query_items),
    components(
        schemas(Item, ItemPatch, ItemResponse, CreatedItemResponse),
        responses(
            BadRequestResponse,
            ConflictResponse,
            NotFoundResponse,
            UnprocessableQueryResponse
        )
    ),
    tags(
        (name = "Items", description = "In-memory item catalog")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/items/", get(list_items))
        .route("/items/{item_id}", get(get_item))
        .route("/create_items/", post(create_item))
        .route("/update/{item_id}", put(update_item))
        .route("/delete/{item_id}", delete(delete_item))
        .route("/query/", get(query_items))
        .with_state(shared_service)
}

/// List items page by page
#[utoipa::path(
    get,
    path = "/items/",
    tag = "Items",
    params(ListParams),
    responses(
        (status = 200, description = "Items in catalog order", body = Vec<Item>),
        (status = 422, response = UnprocessableQueryResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = service.list_items(params.skip, params.limit).await?;
    Ok(Json(items))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "Items",
    params(
        ("item_id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> Result<Json<ItemResponse>, AppError> {
    let item = service.get_item(id).await?;
    Ok(Json(ItemResponse {
        message: format!("Item with ID={id} found."),
        item,
    }))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/create_items/",
    tag = "Items",
    request_body = Item,
    responses(
        (status = 200, description = "Item created; body carries the new id and full catalog", body = CreatedItemResponse),
        (status = 400, response = ConflictResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> Result<Json<CreatedItemResponse>, AppError> {
    let created = service.create_item(item.clone()).await?;
    Ok(Json(CreatedItemResponse {
        message: format!("Item with ID={} created.", created.id),
        id: created.id,
        item,
        items: created.items,
    }))
}

/// Partially update an item
#[utoipa::path(
    put,
    path = "/update/{item_id}",
    tag = "Items",
    params(
        ("item_id" = u64, Path, description = "Item ID")
    ),
    request_body = ItemPatch,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(patch): ValidatedJson<ItemPatch>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = service
        .update_item(id, patch)
        .await
        .map_err(|e| e.missing_as_bad_request())?;
    Ok(Json(ItemResponse {
        message: format!("Item with ID={id} updated."),
        item,
    }))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/delete/{item_id}",
    tag = "Items",
    params(
        ("item_id" = u64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted; body carries the removed item", body = ItemResponse),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> Result<Json<ItemResponse>, AppError> {
    let item = service
        .delete_item(id)
        .await
        .map_err(|e| e.missing_as_bad_request())?;
    Ok(Json(ItemResponse {
        message: format!("Item with ID={id} deleted."),
        item,
    }))
}

/// Items at or above a price, page by page
#[utoipa::path(
    get,
    path = "/query/",
    tag = "Items",
    params(QueryParams),
    responses(
        (status = 200, description = "Matching items in catalog order", body = Vec<Item>),
        (status = 422, response = UnprocessableQueryResponse)
    )
)]
async fn query_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedQuery(params): ValidatedQuery<QueryParams>,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = service
        .query_items(params.skip, params.limit, params.price)
        .await?;
    Ok(Json(items))
}
