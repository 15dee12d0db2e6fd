//! Bearer token minting for tests.
//!
//! Tokens are issued by an external identity provider in production. Tests sign their
//! own HS256 tokens with the same claim layout so requests pass the server's
//! authentication layer.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use crate::error::TestError;

/// Secret shared between test token minting and the test server configuration.
pub const TEST_JWT_SECRET: &str = "test-secret-for-marketplace";

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    iat: i64,
    exp: i64,
}

/// Signs a token for `subject` with the test secret, valid for one hour.
///
/// # Arguments
/// - `subject` - User ID placed in the `sub` claim
///
/// # Returns
/// - `Ok(String)` - Encoded token
/// - `Err(TestError::Token)` - Signing failed
pub fn bearer_token(subject: &str) -> Result<String, TestError> {
    sign(subject, TEST_JWT_SECRET, Duration::hours(1))
}

/// Signs a token for `subject` with an arbitrary secret and lifetime.
///
/// A negative `ttl` produces an already expired token.
pub fn sign(subject: &str, secret: &str, ttl: Duration) -> Result<String, TestError> {
    let now = Utc::now();
    let claims = TestClaims {
        sub: subject,
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}
