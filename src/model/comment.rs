use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub name: Option<String>,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl From<entity::user::Model> for AuthorDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            name: user.name,
            email: user.email,
            avatar_url: user.avatar_url,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorDto,
}

impl CommentDto {
    pub fn new(comment: entity::comment::Model, author: entity::user::Model) -> Self {
        Self {
            id: comment.id,
            event_id: comment.event_id,
            user_id: comment.user_id,
            content: comment.content,
            created_at: comment.created_at.and_utc(),
            updated_at: comment.updated_at.and_utc(),
            author: author.into(),
        }
    }
}

#[derive(Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CommentListResponse {
    pub comments: Vec<CommentDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment: CommentDto,
}
