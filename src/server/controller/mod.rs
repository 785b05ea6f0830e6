//! HTTP controller endpoints for the huddle API.
//!
//! Controllers are thin axum handlers: they authenticate the caller through the
//! [`util::auth::AuthenticatedUser`] extractor, turn rejected path ids, queries and bodies
//! into 400 responses, call into the service layer and wrap results in the JSON envelopes
//! the API returns. Every handler carries a utoipa annotation for the OpenAPI document.

pub mod comment;
pub mod event;
pub mod health;
pub mod rsvp;
pub mod user;
pub mod util;
