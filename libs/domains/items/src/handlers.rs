use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemFilter, ItemInput};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_items,
        create_item,
        get_item,
        update_item,
        delete_item,
        withdraw_item,
    ),
    components(
        schemas(Item, ItemInput),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Items", description = "Inventory items and stock withdrawal")
    )
)]
pub struct ApiDoc;

/// Item routes, relative to wherever the caller nests them.
///
/// Every route also answers `OPTIONS` with an empty 200 so preflights that slip
/// past the CORS layer still succeed.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_items).post(create_item).options(preflight),
        )
        .route(
            "/{id}",
            get(get_item)
                .put(update_item)
                .delete(delete_item)
                .options(preflight),
        )
        .route("/withdraw/{id}", get(withdraw_item).options(preflight))
        .with_state(shared_service)
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// List items, optionally those whose name contains `filter`
///
/// When `filter` is repeated, the first value is used.
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ItemFilter),
    responses(
        (status = 200, description = "Items in id order", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service
        .list_items(ItemFilter::from_query_pairs(pairs))
        .await?;
    Ok(Json(items))
}

/// Create an item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = ItemInput,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<ItemInput>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by id
///
/// An unknown id is reported as 500, not 404.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Item>> {
    let item = service
        .get_item(id)
        .await
        .map_err(ItemError::not_found_as_storage)?;
    Ok(Json(item))
}

/// Replace an item's name, desired and actual levels
///
/// Missing body fields become zero values. An unknown id is reported as 500.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    request_body = ItemInput,
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ItemInput>,
) -> ItemResult<StatusCode> {
    service
        .update_item(id, input)
        .await
        .map_err(ItemError::not_found_as_storage)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete an item
///
/// Deleting an id that does not exist also succeeds.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted, empty body"),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<StatusCode> {
    service.delete_item(id).await?;
    Ok(StatusCode::OK)
}

/// Withdraw one unit of stock
///
/// `actual` is decremented unless it is already zero.
#[utoipa::path(
    get,
    path = "/withdraw/{id}",
    tag = "Items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item after the withdrawal", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn withdraw_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Item>> {
    let item = service.withdraw_item(id).await?;
    Ok(Json(item))
}
