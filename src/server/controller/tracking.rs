use axum::{
    extract::{ws::WebSocketUpgrade, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, tracking::LocationDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, claims::Claims},
        service::tracking::TrackingService,
        state::AppState,
        tracking::relay,
    },
};

/// Tag for grouping tracking endpoints in OpenAPI documentation
pub static TRACKING_TAG: &str = "tracking";

/// Get the latest courier position of an order.
///
/// # Returns
/// - `200 OK` - Latest recorded location
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Order not found, or no location recorded yet
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/location",
    tag = TRACKING_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Latest recorded location", body = LocationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Order or location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_latest_location(
    State(state): State<AppState>,
    claims: Claims,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let service = TrackingService::new(&state.db);

    let location = service.latest_for_user(&user, order_id).await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Upgrade to the live tracking websocket.
///
/// The caller is authenticated before the upgrade; browsers pass the token as the
/// `token` query parameter. After the upgrade the connection speaks the JSON relay
/// protocol in `tracking::protocol`.
///
/// # Returns
/// - `101 Switching Protocols` - Connection upgraded
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No profile registered for the token subject
#[utoipa::path(
    get,
    path = "/ws/tracking",
    tag = TRACKING_TAG,
    params(
        ("token" = Option<String>, Query, description = "Bearer token when no Authorization header can be set")
    ),
    responses(
        (status = 101, description = "Switched to the tracking websocket"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Profile not registered", body = ErrorDto)
    )
)]
pub async fn tracking_socket(
    State(state): State<AppState>,
    claims: Claims,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    tracing::debug!(user_id = %user.id, "Upgrading tracking connection");

    Ok(ws.on_upgrade(move |socket| relay::run_connection(socket, state, user)))
}
