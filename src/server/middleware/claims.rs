//! Bearer token extraction.
//!
//! Tokens are HS256 JWTs issued by an external identity provider. The token is read from
//! the `Authorization: Bearer` header, or from the `token` query parameter for websocket
//! upgrades since browsers cannot set headers on those.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Query},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Validated JWT claims of the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id at the identity provider; doubles as the local user id.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Decodes and validates bearer tokens with the shared secret.
#[derive(Clone)]
pub struct TokenDecoder {
    key: Arc<DecodingKey>,
    validation: Arc<Validation>,
}

impl TokenDecoder {
    pub fn new(secret: &str) -> Self {
        Self {
            key: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            validation: Arc::new(Validation::new(Algorithm::HS256)),
        }
    }

    /// Validates signature and expiry of `token` and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed, or expired
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(decode::<Claims>(token, &self.key, &self.validation)?.claims)
    }
}

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

fn bearer_from_header(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
}

fn bearer_from_query(parts: &Parts) -> Option<String> {
    Query::<TokenQuery>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|Query(query)| query.token)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for Claims {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_from_header(parts)
            .or_else(|| bearer_from_query(parts))
            .ok_or(AuthError::MissingToken)?;

        Ok(state.tokens.decode(&token)?)
    }
}
