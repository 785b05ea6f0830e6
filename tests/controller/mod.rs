//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors already resolved, verifying status
//! codes, response envelopes and the rows left behind.

mod comment;
mod event;
mod health;
mod rsvp;
mod user;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use huddle::server::controller::util::auth::AuthenticatedUser;
use huddle_test_utils::prelude::*;

use crate::util::{body_json, identity, TestContextExt};

fn caller(email: &str) -> AuthenticatedUser {
    AuthenticatedUser(identity(email))
}
