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
        partner::{CreatePartnerDto, PartnerDto, UpdatePartnerDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            claims::Claims,
        },
        model::{partner::CreatePartnerParam, user::UserRole},
        service::partner::PartnerService,
        state::AppState,
    },
};

/// Tag for grouping partner endpoints in OpenAPI documentation
pub static PARTNER_TAG: &str = "partner";

/// Create a new partner owned by the caller.
///
/// # Access Control
/// - `Partner` - Users with the partner role (admins pass as well)
///
/// # Returns
/// - `201 Created` - Successfully created partner
/// - `400 Bad Request` - Blank name or address
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not a partner
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/partners",
    tag = PARTNER_TAG,
    request_body = CreatePartnerDto,
    responses(
        (status = 201, description = "Successfully created partner", body = PartnerDto),
        (status = 400, description = "Invalid partner data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a partner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_partner(
    State(state): State<AppState>,
    claims: Claims,
    Json(payload): Json<CreatePartnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Role(UserRole::Partner)])
        .await?;

    let service = PartnerService::new(&state.db);

    let partner = service
        .create(CreatePartnerParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(partner.into_dto())))
}

/// Get paginated partners ordered by name.
///
/// # Returns
/// - `200 OK` - Paginated list of partners
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/partners",
    tag = PARTNER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved partners", body = PageDto<PartnerDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_partners(
    State(state): State<AppState>,
    claims: Claims,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let service = PartnerService::new(&state.db);

    let partners = service.get_paginated(params.page, params.entries).await?;

    Ok((
        StatusCode::OK,
        Json(PageDto::from(partners.map(|p| p.into_dto()))),
    ))
}

/// Get a specific partner by ID.
///
/// # Returns
/// - `200 OK` - Partner details
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Partner not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/partners/{partner_id}",
    tag = PARTNER_TAG,
    params(
        ("partner_id" = i32, Path, description = "Partner ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved partner", body = PartnerDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Partner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_partner_by_id(
    State(state): State<AppState>,
    claims: Claims,
    Path(partner_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let service = PartnerService::new(&state.db);

    let partner = service.get_by_id(partner_id).await?;

    Ok((StatusCode::OK, Json(partner.into_dto())))
}

/// Update a partner's details.
///
/// # Access Control
/// - `ManagePartner` - Owner of the partner or an admin
///
/// # Returns
/// - `200 OK` - Updated partner
/// - `400 Bad Request` - Blank name or address
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not own the partner
/// - `404 Not Found` - Partner not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/partners/{partner_id}",
    tag = PARTNER_TAG,
    params(
        ("partner_id" = i32, Path, description = "Partner ID")
    ),
    request_body = UpdatePartnerDto,
    responses(
        (status = 200, description = "Successfully updated partner", body = PartnerDto),
        (status = 400, description = "Invalid partner data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not own the partner", body = ErrorDto),
        (status = 404, description = "Partner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_partner(
    State(state): State<AppState>,
    claims: Claims,
    Path(partner_id): Path<i32>,
    Json(payload): Json<UpdatePartnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::ManagePartner(partner_id)])
        .await?;

    let service = PartnerService::new(&state.db);

    let partner = service.update(partner_id, payload.into()).await?;

    Ok((StatusCode::OK, Json(partner.into_dto())))
}

/// Delete a partner together with its catalog.
///
/// Partners that already received orders are kept to preserve order history.
///
/// # Access Control
/// - `Admin` - Only admins can delete partners
///
/// # Returns
/// - `204 No Content` - Successfully deleted partner
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Partner not found
/// - `409 Conflict` - Partner has orders
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/partners/{partner_id}",
    tag = PARTNER_TAG,
    params(
        ("partner_id" = i32, Path, description = "Partner ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted partner"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Partner not found", body = ErrorDto),
        (status = 409, description = "Partner has orders", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_partner(
    State(state): State<AppState>,
    claims: Claims,
    Path(partner_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let service = PartnerService::new(&state.db);

    service.delete(partner_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
