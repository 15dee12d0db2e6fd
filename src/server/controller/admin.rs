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
        user::{SetUserRoleDto, UserDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            claims::Claims,
        },
        model::user::{SetRoleParam, UserRole},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get all users with pagination.
///
/// Users are ordered by name. Only accessible by admins.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Paginated list of users
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PageDto<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let user_service = UserService::new(&state.db);

    let users = user_service
        .get_all_users(params.page, params.entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(users.map(|u| u.into_dto()))),
    ))
}

/// Change a user's role.
///
/// Admins cannot remove the admin role from themselves, which keeps at least one
/// admin in the system.
///
/// # Access Control
/// - `Admin` - Only admins can change roles
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `claims` - Validated bearer token of the caller
/// - `user_id` - User whose role changes
/// - `payload` - New role name
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Unknown role name, or self-demotion
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/role",
    tag = ADMIN_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    request_body = SetUserRoleDto,
    responses(
        (status = 200, description = "Successfully changed role", body = UserDto),
        (status = 400, description = "Invalid role", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn set_user_role(
    State(state): State<AppState>,
    claims: Claims,
    Path(user_id): Path<String>,
    Json(payload): Json<SetUserRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let role = payload
        .role
        .parse::<UserRole>()
        .map_err(|_| AppError::BadRequest(format!("Unknown role: {}", payload.role)))?;

    let user_service = UserService::new(&state.db);

    let user = user_service
        .set_role(&actor, SetRoleParam { user_id, role })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
