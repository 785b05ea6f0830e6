use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    /// Creates a new instance of [`CommentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        event_id: i32,
        user_id: i32,
        content: String,
    ) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let comment = entity::comment::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        comment.insert(self.db).await
    }

    /// Get an event's comments with their authors, newest first
    pub async fn get_by_event_with_authors(
        &self,
        event_id: i32,
    ) -> Result<Vec<(entity::comment::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::EventId.eq(event_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(comment, author)| author.map(|author| (comment, author)))
            .collect())
    }
}
