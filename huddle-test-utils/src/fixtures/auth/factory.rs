//! Factory functions for minting identity tokens.
//!
//! Tokens are signed with HS256 using [`TEST_JWT_SECRET`], matching the verifier the
//! integration tests install in their `AppState`.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use crate::{constant::TEST_JWT_SECRET, error::TestError};

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: String,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    exp: i64,
}

/// Mint a valid token for the provided email.
///
/// The subject claim is derived from the email so repeated calls produce the same identity.
pub fn identity_token(email: &str) -> Result<String, TestError> {
    sign(email, Some("Test User"), Duration::hours(1), TEST_JWT_SECRET)
}

/// Mint a token whose expiry lies in the past.
pub fn expired_identity_token(email: &str) -> Result<String, TestError> {
    sign(email, None, Duration::hours(-2), TEST_JWT_SECRET)
}

/// Mint a token signed with a secret the server does not trust.
pub fn foreign_identity_token(email: &str) -> Result<String, TestError> {
    sign(email, None, Duration::hours(1), "not-the-test-secret")
}

/// Format a token as an `Authorization` header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn sign(email: &str, name: Option<&str>, ttl: Duration, secret: &str) -> Result<String, TestError> {
    let claims = TestClaims {
        sub: format!("user_{}", email),
        email,
        name,
        exp: (Utc::now() + ttl).timestamp(),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}
