use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied with the request.
    ///
    /// Neither an `Authorization: Bearer` header nor a `token` query parameter was
    /// present. Results in a 401 Unauthorized response.
    #[error("Request did not include a bearer token")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token subject has no user record.
    ///
    /// The caller must create their profile through `PUT /api/users/me` first.
    /// Results in a 404 Not Found response.
    #[error("User {0} not found in database")]
    UserNotInDatabase(String),

    /// The user lacks a permission the endpoint requires.
    ///
    /// The second field describes the failed check for the server log only.
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
