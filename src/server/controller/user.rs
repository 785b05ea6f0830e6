use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::MeDto},
    server::{controller::util::auth::AuthenticatedUser, error::Error},
};

pub static USER_TAG: &str = "user";

/// Get the identity of the caller
///
/// Reads the verified token only, no local user is created.
#[utoipa::path(
    get,
    path = "/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The caller's identity", body = MeDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Email outside the allowed domain", body = ErrorDto)
    ),
)]
pub async fn get_me(
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    Ok((
        StatusCode::OK,
        Json(MeDto {
            user_id: identity.subject,
            email: identity.email,
        }),
    ))
}
