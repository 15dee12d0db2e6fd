use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{AssignCourierDto, CreateOrderDto, OrderDto, UpdateOrderStatusDto},
        pagination::PageDto,
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::{auth::AuthGuard, claims::Claims},
        model::order::{CreateOrderParam, OrderStatus},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order with a partner.
///
/// Unit prices are taken from the catalog and the total is computed by the server.
///
/// # Returns
/// - `201 Created` - Order in `pending` status
/// - `400 Bad Request` - Empty order, bad quantity, foreign or unavailable product
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Partner not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully placed order", body = OrderDto),
        (status = 400, description = "Invalid order", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Partner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_order(
    State(state): State<AppState>,
    claims: Claims,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let service = OrderService::new(&state.db);

    let order = service
        .create(CreateOrderParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Get the caller's orders, newest first.
///
/// Admins see every order, couriers their assigned orders, partner users the orders
/// of partners they own, and customers their own orders.
///
/// # Returns
/// - `200 OK` - Paginated list of orders
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = PageDto<OrderDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_orders(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let service = OrderService::new(&state.db);

    let orders = service
        .list_for_user(&user, params.page, params.entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(orders.map(|o| o.into_dto()))),
    ))
}

/// Get a specific order with its items.
///
/// Orders the caller may not see are reported as missing.
///
/// # Returns
/// - `200 OK` - Order details
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Order not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved order", body = OrderDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    claims: Claims,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let service = OrderService::new(&state.db);

    let order = service.get_for_user(&user, order_id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Move an order to a new status.
///
/// # Access Control
/// - `accepted` - Partner owner
/// - `picked_up`, `delivered` - Assigned courier
/// - `cancelled` - Customer or partner owner
/// - Admins may perform any valid transition
///
/// # Returns
/// - `200 OK` - Updated order
/// - `400 Bad Request` - Unknown status or transition not allowed
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller may not perform this transition
/// - `404 Not Found` - Order not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/orders/{order_id}/status",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Successfully changed status", body = OrderDto),
        (status = 400, description = "Invalid status transition", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Transition not permitted for caller", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Order changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    claims: Claims,
    Path(order_id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let status = payload
        .status
        .parse::<OrderStatus>()
        .map_err(|_| AppError::BadRequest(format!("Unknown order status: {}", payload.status)))?;

    let service = OrderService::new(&state.db);

    let order = service.update_status(&user, order_id, status).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Assign a courier to an order.
///
/// # Access Control
/// - Partner owner of the order or an admin
///
/// # Returns
/// - `200 OK` - Updated order
/// - `400 Bad Request` - Order finished, or assignee is not a courier
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither partner owner nor admin
/// - `404 Not Found` - Order not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/orders/{order_id}/courier",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    request_body = AssignCourierDto,
    responses(
        (status = 200, description = "Successfully assigned courier", body = OrderDto),
        (status = 400, description = "Invalid assignment", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not assign couriers", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Order changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn assign_courier(
    State(state): State<AppState>,
    claims: Claims,
    Path(order_id): Path<i32>,
    Json(payload): Json<AssignCourierDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let service = OrderService::new(&state.db);

    let order = service
        .assign_courier(&user, order_id, &payload.courier_id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
