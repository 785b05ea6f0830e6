use sea_orm::DatabaseConnection;

use crate::{
    model::comment::{CommentDto, CreateCommentDto},
    server::{
        data::{comment::CommentRepository, event::EventRepository},
        error::{event::EventError, validation::ValidationError, Error},
        model::auth::Identity,
        service::user::UserService,
    },
};

pub const MAX_COMMENT_CHARS: usize = 2000;

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    /// Creates a new instance of CommentService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List an event's comments, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<CommentDto>)` - Comments with their authors, empty if there are none
    /// - `Err(EventError::NotFound)` - No event with this ID
    pub async fn list(&self, event_id: i32) -> Result<Vec<CommentDto>, Error> {
        self.ensure_event_exists(event_id).await?;

        let comments = CommentRepository::new(self.db)
            .get_by_event_with_authors(event_id)
            .await?
            .into_iter()
            .map(|(comment, author)| CommentDto::new(comment, author))
            .collect();

        Ok(comments)
    }

    /// Post a comment as the caller.
    ///
    /// Comments are allowed on cancelled events.
    ///
    /// # Returns
    /// - `Ok(CommentDto)` - The stored comment with the caller as author
    /// - `Err(Error::ValidationError)` - Content missing, blank or too long
    /// - `Err(EventError::NotFound)` - No event with this ID
    pub async fn create(
        &self,
        identity: &Identity,
        event_id: i32,
        dto: CreateCommentDto,
    ) -> Result<CommentDto, Error> {
        let content = validate_content(dto.content)?;

        self.ensure_event_exists(event_id).await?;

        let author = UserService::new(self.db).get_or_create(identity).await?;
        let comment = CommentRepository::new(self.db)
            .create(event_id, author.id, content)
            .await?;

        tracing::debug!(comment_id = comment.id, event_id, user_id = author.id, "Posted comment");

        Ok(CommentDto::new(comment, author))
    }

    async fn ensure_event_exists(&self, event_id: i32) -> Result<(), Error> {
        EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        Ok(())
    }
}

fn validate_content(content: Option<String>) -> Result<String, ValidationError> {
    let content = content.as_deref().map(str::trim).unwrap_or_default();

    if content.is_empty() {
        return Err(ValidationError::EmptyComment);
    }
    if content.chars().count() > MAX_COMMENT_CHARS {
        return Err(ValidationError::CommentTooLong {
            max: MAX_COMMENT_CHARS,
        });
    }

    Ok(content.to_string())
}
