use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Rejected request input, always rendered as 400 with the display message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid id")]
    InvalidId,
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
    #[error("Invalid query: {0}")]
    MalformedQuery(String),
    #[error("title and startsAt are required")]
    MissingRequired,
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("startsAt must be a valid date")]
    InvalidStartsAt,
    #[error("capacity must be at least 1")]
    InvalidCapacity,
    #[error("Unknown signupMode {0:?}")]
    UnknownSignupMode(String),
    #[error("Unknown office {0:?}")]
    UnknownOffice(String),
    #[error("externalUrl is required when signupMode is external")]
    ExternalUrlRequired,
    #[error("{0} cannot be null")]
    NullField(&'static str),
    #[error("Comment content is required")]
    EmptyComment,
    #[error("Comment must be at most {max} characters")]
    CommentTooLong { max: usize },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request input: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
