//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Swagger UI serves the generated document at `/api/docs`.

use axum::{routing::post, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /health` - Liveness check, unauthenticated
/// - `GET /db/health` - Database connectivity check
/// - `GET /me` - Identity of the caller
/// - `GET /events`, `POST /events` - List and create events
/// - `GET /events/{id}`, `PUT /events/{id}`, `DELETE /events/{id}` - Read, update and cancel an event
/// - `POST /events/{id}/register`, `DELETE /events/{id}/register` - Register and cancel registration
/// - `POST /events/{id}/rsvp`, `DELETE /events/{id}/rsvp` - Aliases of the registration routes
/// - `GET /comments/{event_id}`, `POST /comments/{event_id}` - List and post comments
///
/// Every route except `/health` requires an `Authorization: Bearer` identity token.
///
/// # Returns
/// An Axum `Router<AppState>` ready to receive state and middleware layers.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Huddle", description = "Huddle team events API"), tags(
        (name = controller::event::EVENT_TAG, description = "Event lifecycle and listings"),
        (name = controller::rsvp::RSVP_TAG, description = "Registration with capacity and waitlist"),
        (name = controller::comment::COMMENT_TAG, description = "Event comments"),
        (name = controller::user::USER_TAG, description = "Caller identity"),
        (name = controller::health::HEALTH_TAG, description = "Health checks"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::health::db_health))
        .routes(routes!(controller::user::get_me))
        .routes(routes!(
            controller::event::list_events,
            controller::event::create_event
        ))
        .routes(routes!(
            controller::event::get_event,
            controller::event::update_event,
            controller::event::cancel_event
        ))
        .routes(routes!(
            controller::rsvp::register,
            controller::rsvp::cancel_registration
        ))
        .routes(routes!(
            controller::comment::list_comments,
            controller::comment::create_comment
        ))
        .split_for_parts();

    // Older clients still call the registration routes under this name
    let rsvp_alias = Router::new().route(
        "/events/{id}/rsvp",
        post(controller::rsvp::register).delete(controller::rsvp::cancel_registration),
    );

    routes
        .merge(rsvp_alias)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
