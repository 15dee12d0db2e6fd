use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        pagination::PageDto,
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            claims::Claims,
        },
        service::{partner::PartnerService, product::ProductService},
        state::AppState,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Add a product to a partner's catalog.
///
/// # Access Control
/// - `ManagePartner` - Owner of the partner or an admin
///
/// # Returns
/// - `201 Created` - Successfully created product
/// - `400 Bad Request` - Blank name or non-positive price
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not own the partner
/// - `404 Not Found` - Partner not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/partners/{partner_id}/products",
    tag = PRODUCT_TAG,
    params(
        ("partner_id" = i32, Path, description = "Partner ID")
    ),
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Successfully created product", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not own the partner", body = ErrorDto),
        (status = 404, description = "Partner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_product(
    State(state): State<AppState>,
    claims: Claims,
    Path(partner_id): Path<i32>,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::ManagePartner(partner_id)])
        .await?;

    let service = ProductService::new(&state.db);

    let product = service.create(partner_id, payload.into()).await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Get a partner's catalog ordered by name.
///
/// The owner of the partner and admins see unavailable products as well; everyone
/// else only sees what can currently be ordered.
///
/// # Returns
/// - `200 OK` - Paginated list of products
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Partner not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/partners/{partner_id}/products",
    tag = PRODUCT_TAG,
    params(
        ("partner_id" = i32, Path, description = "Partner ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved products", body = PageDto<ProductDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Partner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_products(
    State(state): State<AppState>,
    claims: Claims,
    Path(partner_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let partner = PartnerService::new(&state.db).get_by_id(partner_id).await?;
    let include_unavailable = user.is_admin() || partner.owner_id == user.id;

    let service = ProductService::new(&state.db);

    let products = service
        .get_catalog(partner_id, include_unavailable, params.page, params.entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(products.map(|p| p.into_dto()))),
    ))
}

/// Update a product in a partner's catalog.
///
/// # Access Control
/// - `ManagePartner` - Owner of the partner or an admin
///
/// # Returns
/// - `200 OK` - Updated product
/// - `400 Bad Request` - Blank name or non-positive price
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not own the partner
/// - `404 Not Found` - Partner or product not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/partners/{partner_id}/products/{product_id}",
    tag = PRODUCT_TAG,
    params(
        ("partner_id" = i32, Path, description = "Partner ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Successfully updated product", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not own the partner", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_product(
    State(state): State<AppState>,
    claims: Claims,
    Path((partner_id, product_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::ManagePartner(partner_id)])
        .await?;

    let service = ProductService::new(&state.db);

    let product = service
        .update(partner_id, product_id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Remove a product from a partner's catalog.
///
/// Products that appear on orders cannot be removed; mark them unavailable instead.
///
/// # Access Control
/// - `ManagePartner` - Owner of the partner or an admin
///
/// # Returns
/// - `204 No Content` - Successfully deleted product
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not own the partner
/// - `404 Not Found` - Partner or product not found
/// - `409 Conflict` - Product appears on an order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/partners/{partner_id}/products/{product_id}",
    tag = PRODUCT_TAG,
    params(
        ("partner_id" = i32, Path, description = "Partner ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted product"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not own the partner", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 409, description = "Product appears on an order", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_product(
    State(state): State<AppState>,
    claims: Claims,
    Path((partner_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::ManagePartner(partner_id)])
        .await?;

    let service = ProductService::new(&state.db);

    service.delete(partner_id, product_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
