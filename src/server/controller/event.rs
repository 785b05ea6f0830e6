use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{
            CreateEventDto, EventDetailDto, EventListQuery, EventListResponse, EventResponse,
            UpdateEventDto,
        },
    },
    server::{
        controller::util::{
            auth::AuthenticatedUser,
            extract::{json_body, path_id, query_params},
        },
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::event::{input::parse_office, EventService},
    },
};

pub static EVENT_TAG: &str = "event";

/// List events in start order
///
/// Cancelled events are hidden unless `includeCancelled=true`. Each event carries the number
/// of going attendees, a preview of the first few and the caller's own registration.
#[utoipa::path(
    get,
    path = "/events",
    tag = EVENT_TAG,
    params(EventListQuery),
    responses(
        (status = 200, description = "Events ordered by start time", body = EventListResponse),
        (status = 400, description = "Unknown office or malformed query", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Email outside the allowed domain", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    AuthenticatedUser(identity): AuthenticatedUser,
    State(state): State<AppState>,
    query: Result<Query<EventListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let query = query_params(query)?;

    let office = match query.office.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(office) => Some(
            parse_office(office).ok_or_else(|| ValidationError::UnknownOffice(office.to_string()))?,
        ),
    };

    let events = EventService::new(&state.db)
        .list(&identity, office, query.include_cancelled.unwrap_or(false))
        .await?;

    Ok((StatusCode::OK, Json(EventListResponse { events })))
}

/// Get an event with its going and waitlist breakdown
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event detail", body = EventDetailDto),
        (status = 400, description = "Invalid event ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Email outside the allowed domain", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    AuthenticatedUser(identity): AuthenticatedUser,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let event_id = path_id(path)?;

    let detail = EventService::new(&state.db)
        .get_detail(&identity, event_id)
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Create an event owned by the caller
#[utoipa::path(
    post,
    path = "/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Email outside the allowed domain", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    AuthenticatedUser(identity): AuthenticatedUser,
    State(state): State<AppState>,
    body: Result<Json<CreateEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let dto = json_body(body)?;

    let event = EventService::new(&state.db).create(&identity, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(EventResponse {
            event: event.into(),
        }),
    ))
}

/// Partially update an event the caller created
///
/// Absent fields are kept, `null` clears optional fields.
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 400, description = "Invalid fields, invalid ID or cancelled event", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller did not create the event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    AuthenticatedUser(identity): AuthenticatedUser,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let event_id = path_id(path)?;
    let dto = json_body(body)?;

    let event = EventService::new(&state.db)
        .update(&identity, event_id, dto)
        .await?;

    Ok((
        StatusCode::OK,
        Json(EventResponse {
            event: event.into(),
        }),
    ))
}

/// Cancel an event the caller created
///
/// Events are never removed, they move to the `cancelled` status and keep their RSVPs.
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event cancelled", body = EventResponse),
        (status = 400, description = "Invalid event ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller did not create the event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_event(
    AuthenticatedUser(identity): AuthenticatedUser,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let event_id = path_id(path)?;

    let event = EventService::new(&state.db)
        .cancel(&identity, event_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(EventResponse {
            event: event.into(),
        }),
    ))
}
