use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{UpsertProfileDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, middleware::claims::Claims,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create or update the caller's profile.
///
/// Works before any profile exists for the token subject, which is how users register.
/// The first user registered while no admin exists becomes admin; every later user
/// starts as a customer. Existing roles are left untouched.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `claims` - Validated bearer token of the caller
/// - `payload` - Display name and optional phone number
///
/// # Returns
/// - `200 OK` - Stored profile
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpsertProfileDto,
    responses(
        (status = 200, description = "Stored profile", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn upsert_me(
    State(state): State<AppState>,
    claims: Claims,
    Json(payload): Json<UpsertProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);

    let user = user_service
        .upsert_profile(claims.sub, payload.name, payload.phone)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get the caller's profile.
///
/// # Returns
/// - `200 OK` - Profile of the caller
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No profile registered for the token subject
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Profile of the caller", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Profile not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_me(
    State(state): State<AppState>,
    claims: Claims,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
