use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentListResponse, CommentResponse, CreateCommentDto},
    },
    server::{
        controller::util::{
            auth::AuthenticatedUser,
            extract::{json_body, path_id},
        },
        error::Error,
        model::app::AppState,
        service::comment::CommentService,
    },
};

pub static COMMENT_TAG: &str = "comment";

/// List an event's comments, newest first
#[utoipa::path(
    get,
    path = "/comments/{event_id}",
    tag = COMMENT_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Comments with their authors", body = CommentListResponse),
        (status = 400, description = "Invalid event ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Email outside the allowed domain", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    AuthenticatedUser(_identity): AuthenticatedUser,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let event_id = path_id(path)?;

    let comments = CommentService::new(&state.db).list(event_id).await?;

    Ok((StatusCode::OK, Json(CommentListResponse { comments })))
}

/// Comment on an event
#[utoipa::path(
    post,
    path = "/comments/{event_id}",
    tag = COMMENT_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment posted", body = CommentResponse),
        (status = 400, description = "Empty or too long content, or invalid event ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Email outside the allowed domain", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    AuthenticatedUser(identity): AuthenticatedUser,
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<CreateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let event_id = path_id(path)?;
    let dto = json_body(body)?;

    let comment = CommentService::new(&state.db)
        .create(&identity, event_id, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}
