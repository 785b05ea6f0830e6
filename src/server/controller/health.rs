use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::ConnectionTrait;

use crate::{
    model::api::{DbHealthDto, ErrorDto, HealthDto},
    server::{controller::util::auth::AuthenticatedUser, error::Error, model::app::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Liveness check, no authentication required
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is up", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    )
}

/// Check that the database answers a trivial query
#[utoipa::path(
    get,
    path = "/db/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Database reachable", body = DbHealthDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Email outside the allowed domain", body = ErrorDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn db_health(
    AuthenticatedUser(_identity): AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    state.db.execute_unprepared("SELECT 1").await?;

    Ok((StatusCode::OK, Json(DbHealthDto { ok: true })))
}
