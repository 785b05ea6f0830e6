use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ExternalSignupErrorDto, server::error::error_response};

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Event ID {0} not found")]
    NotFound(i32),
    /// `user_id` is `None` when the caller has no local user yet
    #[error("{} attempted to modify event ID {event_id} they did not create", describe_caller(.user_id))]
    NotCreator {
        event_id: i32,
        user_id: Option<i32>,
    },
    #[error("Event ID {0} is cancelled")]
    Cancelled(i32),
    #[error("Event ID {event_id} only accepts signups at {external_url}")]
    ExternalSignup { event_id: i32, external_url: String },
}

fn describe_caller(user_id: &Option<i32>) -> String {
    match user_id {
        Some(user_id) => format!("User ID {}", user_id),
        None => "A caller without a local user".to_string(),
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Event not found"),
            Self::NotCreator { .. } => error_response(
                StatusCode::FORBIDDEN,
                "Only the event creator can modify this event",
            ),
            Self::Cancelled(_) => error_response(StatusCode::BAD_REQUEST, "Event is cancelled"),
            Self::ExternalSignup { external_url, .. } => (
                StatusCode::BAD_REQUEST,
                Json(ExternalSignupErrorDto {
                    error: "External signup only".to_string(),
                    external_url,
                }),
            )
                .into_response(),
        }
    }
}
