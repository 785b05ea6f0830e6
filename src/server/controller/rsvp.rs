use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, RegisterErrorDto},
        rsvp::{CancelRsvpResponse, RsvpResponse},
    },
    server::{
        controller::util::{auth::AuthenticatedUser, extract::path_id},
        error::Error,
        model::app::AppState,
        service::rsvp::RsvpService,
    },
};

pub static RSVP_TAG: &str = "rsvp";

/// Register for an event
///
/// The caller is admitted as `going` while seats remain and waitlisted once the event is
/// full. Registering again re-evaluates admission but keeps the original registration time.
/// Also served at `POST /events/{id}/rsvp`.
#[utoipa::path(
    post,
    path = "/events/{id}/register",
    tag = RSVP_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Registered as going or waitlisted", body = RsvpResponse),
        (status = 400, description = "Event is cancelled (`{error}`) or takes signups externally (`{error, externalUrl}`)", body = RegisterErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Email outside the allowed domain", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    AuthenticatedUser(identity): AuthenticatedUser,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let event_id = path_id(path)?;

    let rsvp = RsvpService::new(&state.db)
        .register(&identity, event_id)
        .await?;

    Ok((StatusCode::OK, Json(RsvpResponse { rsvp: rsvp.into() })))
}

/// Cancel the caller's registration
///
/// Returns `{"rsvp": null}` when the caller had nothing to cancel. Also served at
/// `DELETE /events/{id}/rsvp`.
#[utoipa::path(
    delete,
    path = "/events/{id}/register",
    tag = RSVP_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Registration cancelled, or nothing to cancel", body = CancelRsvpResponse),
        (status = 400, description = "Invalid event ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Email outside the allowed domain", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_registration(
    AuthenticatedUser(identity): AuthenticatedUser,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let event_id = path_id(path)?;

    let rsvp = RsvpService::new(&state.db)
        .cancel(&identity, event_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(CancelRsvpResponse {
            rsvp: rsvp.map(Into::into),
        }),
    ))
}
