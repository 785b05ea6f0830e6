//! Test configuration constants for identity token verification.
//!
//! These values are placeholders shared by the fixtures that mint tokens and the
//! integration tests that build an `AppState` to verify them. None of them are real
//! credentials.

/// Shared HS256 secret used to sign and verify test identity tokens.
pub static TEST_JWT_SECRET: &str = "huddle-test-secret";

/// Email domain admitted by the identity gate during tests.
pub static TEST_EMAIL_DOMAIN: &str = "example.com";

/// Default email for the first test user.
pub static TEST_EMAIL: &str = "alice@example.com";
